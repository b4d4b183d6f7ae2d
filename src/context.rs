//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use menu_catalog::CatalogConfig;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload the landing page venues - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload the landing page venues - write
    set_reload_trigger: WriteSignal<u32>,
    /// Error banner text - read
    pub notice: ReadSignal<Option<String>>,
    /// Error banner text - write
    set_notice: WriteSignal<Option<String>>,
    /// Catalog configuration loaded at startup
    config: StoredValue<CatalogConfig>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        notice: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
        config: CatalogConfig,
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            notice: notice.0,
            set_notice: notice.1,
            config: StoredValue::new(config),
        }
    }

    /// Trigger a reload
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Show an error banner and log it
    pub fn notify(&self, message: impl Into<String>) {
        let message = message.into();
        log::error!("[APP] {}", message);
        self.set_notice.set(Some(message));
    }

    pub fn dismiss_notice(&self) {
        self.set_notice.set(None);
    }

    pub fn config(&self) -> CatalogConfig {
        self.config.get_value()
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
