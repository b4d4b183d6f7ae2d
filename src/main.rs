//! Menu Catalog Frontend Entry Point

mod app;
mod commands;
mod components;
mod context;
mod logging;
mod route;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;
use menu_catalog::store::{seed_demo_data, KeyValueStorage};
use menu_catalog::CatalogConfig;
use storage::{BrowserStorage, CONFIG_KEY};

/// Optional JSON override stored under `catalog_config`
fn load_config() -> CatalogConfig {
    match BrowserStorage.get_item(CONFIG_KEY) {
        Ok(Some(json)) => CatalogConfig::from_json(&json).unwrap_or_else(|e| {
            log::warn!("[APP] invalid {}: {}, using defaults", CONFIG_KEY, e);
            CatalogConfig::default()
        }),
        Ok(None) => CatalogConfig::default(),
        Err(e) => {
            log::warn!("[APP] could not read {}: {}", CONFIG_KEY, e);
            CatalogConfig::default()
        }
    }
}

fn main() {
    console_error_panic_hook::set_once();
    logging::init_logging();

    let config = load_config();
    if config.seed_demo_data {
        if let Err(e) = seed_demo_data(&BrowserStorage) {
            log::error!("[APP] demo data seeding failed: {}", e);
        }
    }

    mount_to_body(move || view! { <App config=config /> });
}
