//! Callback Core Components
//!
//! URL decoding, token extraction, classification and redaction.

pub mod classifier;
pub mod params;
pub mod parser;
pub mod redact;

pub use params::*;
pub use parser::*;
pub use redact::*;
