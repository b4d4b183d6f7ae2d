//! Domain Layer
//!
//! Catalog entities and core abstractions. Only serde beyond std.

mod entity;
mod menu_item;
mod venue;
mod scope;

pub use entity::{Entity, DomainError, DomainResult};
pub use menu_item::{MenuItem, ItemStatus, Price};
pub use venue::{Branch, Restaurant};
pub use scope::{NavParams, ViewScope};
