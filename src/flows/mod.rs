//! Callback Flows
//!
//! Deep-link handling built on the callback parser.
//!
//! - **Deep link flow**: classify an incoming URL, extract its token pair and
//!   hand the pair to the application's session service.

pub mod deep_link;

pub use deep_link::{DeepLinkHandler, DeepLinkOutcome, MockTokenHandoff, TokenHandoff};
