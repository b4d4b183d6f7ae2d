//! Catalog Store
//!
//! Abstract read/write interfaces for restaurants, branches and menus.
//! Reads are async to match a remote service layer; writes replace a whole
//! scope collection at once.

mod key_value;
mod seed;
mod tests;

use async_trait::async_trait;
use crate::domain::{Branch, DomainResult, MenuItem, Restaurant, ViewScope};

pub use key_value::{KeyValueStorage, KeyValueCatalog, MemoryStorage, RESTAURANTS_KEY, BRANCHES_KEY};
pub use seed::{seed_demo_data, SeedReport};

/// Read side of the catalog service
///
/// Futures are not `Send`: everything runs on the browser event loop.
#[async_trait(?Send)]
pub trait CatalogStore {
    async fn get_branch_by_id(&self, id: u32) -> DomainResult<Option<Branch>>;

    async fn get_restaurant_by_id(&self, id: u32) -> DomainResult<Option<Restaurant>>;

    /// Branches owned by a restaurant, in collection order
    async fn get_all_branches(&self, restaurant_id: u32) -> DomainResult<Vec<Branch>>;

    async fn get_menu_items(&self, scope: ViewScope) -> DomainResult<Vec<MenuItem>>;

    async fn list_restaurants(&self) -> DomainResult<Vec<Restaurant>>;
}

/// Write side: last write wins, whole collection per scope key
pub trait CatalogWriter {
    fn set_menu_items(&self, scope: ViewScope, items: &[MenuItem]) -> DomainResult<()>;
}
