//! Catalog Service Wrappers
//!
//! Async bindings the components call, organized by domain. Everything is
//! served from browser storage through the catalog core.

mod catalog;
mod venue;

use menu_catalog::store::KeyValueCatalog;
use crate::storage::BrowserStorage;

/// Catalog over local storage
pub fn catalog_store() -> KeyValueCatalog<BrowserStorage> {
    KeyValueCatalog::new(BrowserStorage)
}

// Re-export all public items
pub use catalog::*;
pub use venue::*;
