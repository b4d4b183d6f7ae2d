//! Menu Catalog Core
//!
//! View-state logic behind the restaurant menu screens: which branch or
//! restaurant a view is bound to, the category set derived from its items,
//! filtering and paging, and single-item edits written back to storage.

pub mod cancel;
pub mod category;
pub mod config;
pub mod controller;
pub mod domain;
pub mod mutate;
pub mod resolve;
pub mod store;
pub mod view;

pub use cancel::CancelToken;
pub use config::CatalogConfig;
pub use controller::{load_catalog, LoadedCatalog, MenuCatalogController};
pub use domain::{Branch, DomainError, DomainResult, ItemStatus, MenuItem, NavParams, Price, Restaurant, ViewScope};
pub use resolve::{ScopeResolution, ScopeResolver};
