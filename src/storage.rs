//! Browser Storage
//!
//! `KeyValueStorage` over `window.localStorage`, plus small UI preferences
//! kept next to the catalog collections.

use std::collections::BTreeMap;

use menu_catalog::store::KeyValueStorage;
use menu_catalog::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

pub const CONFIG_KEY: &str = "catalog_config";
const PREFS_KEY: &str = "catalog_ui_prefs";

fn js_error(context: &str, e: JsValue) -> DomainError {
    DomainError::Storage(format!("{}: {:?}", context, e))
}

/// Looks the storage object up on every call so the handle stays `Send`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage(&self) -> DomainResult<web_sys::Storage> {
        let window = web_sys::window().ok_or_else(|| DomainError::Storage("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| js_error("localStorage unavailable", e))?
            .ok_or_else(|| DomainError::Storage("localStorage disabled".to_string()))
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> DomainResult<Option<String>> {
        self.local_storage()?
            .get_item(key)
            .map_err(|e| js_error(key, e))
    }

    fn set_item(&self, key: &str, value: &str) -> DomainResult<()> {
        self.local_storage()?
            .set_item(key, value)
            .map_err(|e| js_error(key, e))
    }
}

/// Per-browser view preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiPrefs {
    /// restaurant id -> branch last picked in its restaurant view
    #[serde(default)]
    pub selected_branches: BTreeMap<u32, u32>,
}

impl UiPrefs {
    pub fn load() -> Self {
        match BrowserStorage.get_item(PREFS_KEY) {
            Ok(Some(json)) => serde_json::from_str(&json).unwrap_or_else(|e| {
                log::warn!("[PREFS] ignoring unreadable preferences: {}", e);
                Self::default()
            }),
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("[PREFS] {}", e);
                Self::default()
            }
        }
    }

    pub fn save(&self) -> DomainResult<()> {
        let json = serde_json::to_string(self)?;
        BrowserStorage.set_item(PREFS_KEY, &json)
    }

    pub fn remember_branch(restaurant_id: u32, branch_id: u32) {
        let mut prefs = Self::load();
        prefs.selected_branches.insert(restaurant_id, branch_id);
        if let Err(e) = prefs.save() {
            log::warn!("[PREFS] failed to save branch pick: {}", e);
        }
    }

    pub fn branch_for(restaurant_id: u32) -> Option<u32> {
        Self::load().selected_branches.get(&restaurant_id).copied()
    }
}
