//! Telemetry
//!
//! Observability components for callback handling.
//!
//! Logging is structured around a [`Logger`] trait so the deep-link handler
//! can be pointed at `tracing` or at an in-memory capture in tests.

pub mod logging;

pub use logging::{CallbackLogContext, InMemoryLogger, LogEntry, LogLevel, Logger, TracingLogger};
