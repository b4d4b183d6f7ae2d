//! Menu Commands
//!
//! Loading a catalog view and writing item edits.

use menu_catalog::mutate::MutationOutcome;
use menu_catalog::{load_catalog, CancelToken, DomainError, LoadedCatalog, MenuCatalogController, NavParams};
use super::catalog_store;

/// `Ok(None)` when the load was cancelled by a newer navigation or teardown
pub async fn load_menu(params: NavParams, cancel: &CancelToken) -> Result<Option<LoadedCatalog>, String> {
    match load_catalog(&catalog_store(), params, cancel).await {
        Ok(loaded) => Ok(Some(loaded)),
        Err(DomainError::Cancelled) => Ok(None),
        Err(e) => Err(e.to_string()),
    }
}

pub fn toggle_item_status(controller: &mut MenuCatalogController, item_id: u32) -> Result<MutationOutcome, String> {
    controller.toggle_status(&catalog_store(), item_id).map_err(|e| e.to_string())
}

pub fn set_item_category(
    controller: &mut MenuCatalogController,
    item_id: u32,
    category: &str,
) -> Result<MutationOutcome, String> {
    controller.reassign_category(&catalog_store(), item_id, category).map_err(|e| e.to_string())
}

pub fn save_categories(controller: &mut MenuCatalogController) -> Result<MutationOutcome, String> {
    controller.commit_category_edit(&catalog_store()).map_err(|e| e.to_string())
}
