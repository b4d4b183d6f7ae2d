//! Rolling Logger
//!
//! Keeps the most recent log lines in a circular buffer and forwards each
//! line to a sink such as the browser console. Works as the global `log`
//! logger and as a `tracing` layer over the same buffer, so both end up in
//! one readable history.

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex, OnceLock};

use chrono::{DateTime, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use tracing::field::{Field, Visit};
use tracing::Subscriber;
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;

pub const DEFAULT_CAPACITY: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Lines kept before the oldest is dropped
    pub capacity: usize,
    pub level: LevelFilter,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self { capacity: DEFAULT_CAPACITY, level: LevelFilter::Info }
    }
}

/// One captured log line
#[derive(Debug, Clone, PartialEq)]
pub struct LogLine {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:<5} [{}] {}",
            self.timestamp.format("%Y-%m-%dT%H:%M:%S%.3fZ"),
            self.level,
            self.target,
            self.message
        )
    }
}

/// Where lines go after being buffered
pub trait LogSink: Send + Sync {
    fn write(&self, line: &LogLine);
}

/// Buffer only
pub struct NullSink;

impl LogSink for NullSink {
    fn write(&self, _line: &LogLine) {}
}

struct Inner {
    lines: Mutex<VecDeque<LogLine>>,
    config: LoggerConfig,
    sink: Box<dyn LogSink>,
}

#[derive(Clone)]
pub struct RollingLogger {
    inner: Arc<Inner>,
}

impl RollingLogger {
    pub fn new(config: LoggerConfig, sink: Box<dyn LogSink>) -> Self {
        let capacity = config.capacity.max(1);
        Self {
            inner: Arc::new(Inner {
                lines: Mutex::new(VecDeque::with_capacity(capacity)),
                config: LoggerConfig { capacity, ..config },
                sink,
            }),
        }
    }

    pub fn push(&self, line: LogLine) {
        if line.level > self.inner.config.level {
            return;
        }
        self.inner.sink.write(&line);
        if let Ok(mut lines) = self.inner.lines.lock() {
            if lines.len() == self.inner.config.capacity {
                lines.pop_front();
            }
            lines.push_back(line);
        }
    }

    /// Buffered lines, oldest first
    pub fn snapshot(&self) -> Vec<LogLine> {
        self.inner
            .lines
            .lock()
            .map(|lines| lines.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn clear(&self) {
        if let Ok(mut lines) = self.inner.lines.lock() {
            lines.clear();
        }
    }


    /// `tracing` layer feeding this logger's buffer
    pub fn layer(&self) -> RingLayer {
        RingLayer { logger: self.clone() }
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.inner.config.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        self.push(LogLine {
            timestamp: Utc::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        });
    }

    fn flush(&self) {}
}

static GLOBAL: OnceLock<RollingLogger> = OnceLock::new();

/// Install as the global `log` logger; later calls return the first logger
pub fn init(config: LoggerConfig, sink: Box<dyn LogSink>) -> Result<&'static RollingLogger, SetLoggerError> {
    if let Some(existing) = GLOBAL.get() {
        return Ok(existing);
    }
    let logger = GLOBAL.get_or_init(|| RollingLogger::new(config, sink));
    log::set_logger(logger)?;
    log::set_max_level(config.level);
    Ok(logger)
}

pub fn global() -> Option<&'static RollingLogger> {
    GLOBAL.get()
}

/// Routes `tracing` events into a `RollingLogger`
pub struct RingLayer {
    logger: RollingLogger,
}

#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: Vec<String>,
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push(format!("{}={}", field.name(), value));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.fields.push(format!("{}={:?}", field.name(), value));
        }
    }
}

fn to_log_level(level: &tracing::Level) -> Level {
    match *level {
        tracing::Level::ERROR => Level::Error,
        tracing::Level::WARN => Level::Warn,
        tracing::Level::INFO => Level::Info,
        tracing::Level::DEBUG => Level::Debug,
        tracing::Level::TRACE => Level::Trace,
    }
}

impl<S: Subscriber> Layer<S> for RingLayer {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let mut message = visitor.message;
        if !visitor.fields.is_empty() {
            if !message.is_empty() {
                message.push(' ');
            }
            message.push_str(&visitor.fields.join(" "));
        }

        self.logger.push(LogLine {
            timestamp: Utc::now(),
            level: to_log_level(metadata.level()),
            target: metadata.target().to_string(),
            message,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::layer::SubscriberExt;

    fn line(level: Level, message: &str) -> LogLine {
        LogLine { timestamp: Utc::now(), level, target: "test".to_string(), message: message.to_string() }
    }

    fn logger(capacity: usize, level: LevelFilter) -> RollingLogger {
        RollingLogger::new(LoggerConfig { capacity, level }, Box::new(NullSink))
    }

    #[test]
    fn test_ring_drops_oldest() {
        let logger = logger(3, LevelFilter::Trace);
        for i in 0..5 {
            logger.push(line(Level::Info, &format!("line {}", i)));
        }
        let messages: Vec<String> = logger.snapshot().into_iter().map(|l| l.message).collect();
        assert_eq!(messages, vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_level_filter() {
        let logger = logger(10, LevelFilter::Warn);
        logger.push(line(Level::Debug, "hidden"));
        logger.push(line(Level::Error, "shown"));
        let snapshot = logger.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].message, "shown");
    }

    #[test]
    fn test_log_record_capture() {
        let logger = logger(10, LevelFilter::Info);
        logger.log(
            &Record::builder()
                .level(Level::Info)
                .target("menu_catalog::resolve")
                .args(format_args!("branch {} not found", 7))
                .build(),
        );
        let snapshot = logger.snapshot();
        assert_eq!(snapshot[0].target, "menu_catalog::resolve");
        assert_eq!(snapshot[0].message, "branch 7 not found");
    }

    #[test]
    fn test_display_and_clear() {
        let logger = logger(10, LevelFilter::Info);
        logger.push(line(Level::Warn, "first"));
        logger.push(line(Level::Info, "second"));

        let rendered = logger.snapshot()[0].to_string();
        assert!(rendered.contains("WARN"));
        assert!(rendered.ends_with("[test] first"));

        logger.clear();
        assert!(logger.snapshot().is_empty());
    }

    #[test]
    fn test_tracing_layer() {
        let logger = logger(10, LevelFilter::Info);
        let subscriber = tracing_subscriber::registry().with(logger.layer());
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(items = 4, "menu loaded");
            tracing::debug!("too verbose");
        });
        let snapshot = logger.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].message, "menu loaded items=4");
        assert_eq!(snapshot[0].level, Level::Info);
    }
}
