//! Logging
//!
//! Structured logging for deep-link handling.

use std::collections::BTreeMap;
use std::sync::Mutex;

/// Log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Debug level.
    Debug,
    /// Info level.
    Info,
    /// Warn level.
    Warn,
    /// Error level.
    Error,
}

/// Callback log context.
///
/// `url` must already be redacted; loggers print it as given.
#[derive(Debug, Clone, Default)]
pub struct CallbackLogContext {
    /// Operation name.
    pub operation: &'static str,
    /// Redacted callback URL.
    pub url: String,
    /// Additional fields, kept sorted for stable output.
    pub fields: BTreeMap<&'static str, String>,
}

impl CallbackLogContext {
    /// Create a context for an operation on a redacted URL.
    pub fn new(operation: &'static str, url: impl Into<String>) -> Self {
        Self {
            operation,
            url: url.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Add a field.
    pub fn field(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.fields.insert(key, value.into());
        self
    }

    fn rendered_fields(&self) -> String {
        self.fields
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Logger interface.
pub trait Logger: Send + Sync {
    /// Record a message at `level`.
    fn log(&self, level: LogLevel, message: &str, context: &CallbackLogContext);

    /// Check if a log level is enabled. Callers skip building a context
    /// when it is not.
    fn is_enabled(&self, level: LogLevel) -> bool;
}

/// Logger forwarding to the `tracing` ecosystem.
///
/// Level filtering is left to the installed subscriber.
#[derive(Debug, Default)]
pub struct TracingLogger;

macro_rules! emit {
    ($macro:ident, $message:expr, $context:expr) => {
        tracing::$macro!(
            operation = $context.operation,
            url = %$context.url,
            fields = %$context.rendered_fields(),
            "{}",
            $message
        )
    };
}

impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, message: &str, context: &CallbackLogContext) {
        match level {
            LogLevel::Debug => emit!(debug, message, context),
            LogLevel::Info => emit!(info, message, context),
            LogLevel::Warn => emit!(warn, message, context),
            LogLevel::Error => emit!(error, message, context),
        }
    }

    fn is_enabled(&self, level: LogLevel) -> bool {
        match level {
            LogLevel::Debug => tracing::enabled!(tracing::Level::DEBUG),
            LogLevel::Info => tracing::enabled!(tracing::Level::INFO),
            LogLevel::Warn => tracing::enabled!(tracing::Level::WARN),
            LogLevel::Error => tracing::enabled!(tracing::Level::ERROR),
        }
    }
}

/// Log entry captured by [`InMemoryLogger`].
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub context: CallbackLogContext,
}

/// In-memory logger for testing.
pub struct InMemoryLogger {
    entries: Mutex<Vec<LogEntry>>,
    min_level: LogLevel,
}

impl InMemoryLogger {
    /// Create new in-memory logger capturing every level.
    pub fn new() -> Self {
        Self::with_level(LogLevel::Debug)
    }

    /// Create in-memory logger with minimum level.
    pub fn with_level(min_level: LogLevel) -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            min_level,
        }
    }

    /// Get all log entries.
    pub fn get_entries(&self) -> Vec<LogEntry> {
        self.entries.lock().unwrap().clone()
    }

    /// Get entries by level.
    pub fn get_entries_by_level(&self, level: LogLevel) -> Vec<LogEntry> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.level == level)
            .cloned()
            .collect()
    }
}

impl Default for InMemoryLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for InMemoryLogger {
    fn log(&self, level: LogLevel, message: &str, context: &CallbackLogContext) {
        if self.is_enabled(level) {
            self.entries.lock().unwrap().push(LogEntry {
                level,
                message: message.to_string(),
                context: context.clone(),
            });
        }
    }

    fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }
}
