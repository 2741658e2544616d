//! Auth Callback Integration Module
//!
//! Classification and token extraction for OAuth implicit-flow callbacks
//! delivered to a client as deep links.
//!
//! # Features
//!
//! - Cheap triage of incoming URLs ([`is_auth_callback_url`])
//! - Access/refresh token extraction from the fragment, falling back to the
//!   query string ([`parse_callback_url`])
//! - Configurable parameter names and lookup order
//! - Log-safe URL redaction
//! - A deep-link handler that hands extracted tokens to a session service
//!
//! # Example
//!
//! ```rust
//! use auth_callback::{is_auth_callback_url, parse_callback_url};
//!
//! let url = "client://auth/callback#access_token=abc123&refresh_token=xyz789";
//!
//! assert!(is_auth_callback_url(url));
//! let tokens = parse_callback_url(url).expect("callback carries both tokens");
//! assert_eq!(tokens.access_token(), "abc123");
//! assert_eq!(tokens.refresh_token(), "xyz789");
//!
//! assert!(parse_callback_url("client://callback#refresh_token=onlyone").is_none());
//! ```
//!
//! # Architecture
//!
//! - `types`: token pair, provenance and configuration types
//! - `error`: error hierarchy for configuration, extraction and handoff
//! - `core`: parameter decoding, parser, classifier and redaction
//! - `builders`: fluent builder for parser configuration
//! - `flows`: deep-link handling on top of the parser
//! - `telemetry`: structured logging

use std::sync::OnceLock;

pub mod builders;
pub mod core;
pub mod error;
pub mod flows;
pub mod telemetry;
pub mod types;

// Re-export builders
pub use builders::{callback_parser_config, CallbackParserConfigBuilder};

// Re-export errors
pub use error::{
    AuthCallbackError, AuthCallbackResult, ConfigurationError, ExtractionError, HandoffError,
};

// Re-export types
pub use types::{
    CallbackParserConfig, ExtractedTokens, TokenLookup, TokenPair, TokenSource,
    DEFAULT_ACCESS_TOKEN_PARAM, DEFAULT_CALLBACK_MARKER, DEFAULT_REFRESH_TOKEN_PARAM,
};

// Re-export core components
pub use crate::core::{redact_callback_url, CallbackParser, QueryParams, UrlComponents};

// Re-export flows
pub use flows::{DeepLinkHandler, DeepLinkOutcome, MockTokenHandoff, TokenHandoff};

// Re-export telemetry
pub use telemetry::{
    CallbackLogContext, InMemoryLogger, LogEntry, LogLevel, Logger, TracingLogger,
};

fn default_parser() -> &'static CallbackParser {
    static PARSER: OnceLock<CallbackParser> = OnceLock::new();
    PARSER.get_or_init(CallbackParser::default)
}

/// Extract the token pair from a callback URL using the default parameter
/// names and fragment-then-query lookup.
///
/// Returns `None` unless both `access_token` and `refresh_token` resolve to
/// non-empty values. Never panics, whatever the input.
pub fn parse_callback_url(url: &str) -> Option<TokenPair> {
    default_parser().parse(url)
}

/// Check if a URL contains `auth/callback`, `access_token` or
/// `refresh_token`.
pub fn is_auth_callback_url(url: &str) -> bool {
    default_parser().is_callback(url)
}
