//! UI Components
//!
//! Reusable Leptos components.

mod catalog_header;
mod category_bar;
mod category_editor;
mod diagnostics;
mod menu_catalog_view;
mod menu_item_card;
mod not_found;
mod notice_banner;
mod pagination;
mod restaurant_list;
mod search_box;

pub use catalog_header::CatalogHeader;
pub use category_bar::CategoryBar;
pub use category_editor::CategoryEditorPanel;
pub use diagnostics::DiagnosticsPanel;
pub use menu_catalog_view::MenuCatalogView;
pub use menu_item_card::MenuItemCard;
pub use not_found::NotFound;
pub use notice_banner::NoticeBanner;
pub use pagination::Pagination;
pub use restaurant_list::RestaurantList;
pub use search_box::SearchBox;
