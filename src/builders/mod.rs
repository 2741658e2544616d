//! Builders
//!
//! Fluent builder patterns for callback parser configuration.

pub mod config;

pub use config::{callback_parser_config, CallbackParserConfigBuilder};
