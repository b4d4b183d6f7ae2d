//! Console Logging
//!
//! Sink that mirrors rolling-logger lines to the browser console. The same
//! ring also takes `tracing` events, which the catalog core emits on loads
//! and saves.

use rolling_logger::{LogLine, LogSink, LoggerConfig};
use tracing_subscriber::layer::SubscriberExt;
use wasm_bindgen::JsValue;

pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn write(&self, line: &LogLine) {
        let text = JsValue::from_str(&format!("[{}] {}", line.target, line.message));
        match line.level {
            log::Level::Error => web_sys::console::error_1(&text),
            log::Level::Warn => web_sys::console::warn_1(&text),
            log::Level::Info => web_sys::console::info_1(&text),
            log::Level::Debug | log::Level::Trace => web_sys::console::debug_1(&text),
        }
    }
}

pub fn init_logging() {
    let level = if cfg!(debug_assertions) { log::LevelFilter::Debug } else { log::LevelFilter::Info };
    let logger = match rolling_logger::init(LoggerConfig { level, ..Default::default() }, Box::new(ConsoleSink)) {
        Ok(logger) => logger,
        Err(e) => {
            web_sys::console::error_1(&format!("logger already set: {}", e).into());
            return;
        }
    };
    let subscriber = tracing_subscriber::registry().with(logger.layer());
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        log::warn!("tracing subscriber already set: {}", e);
    }
}
