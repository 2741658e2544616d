//! Callback Types
//!
//! Core type definitions for callback extraction.

pub mod callback;
pub mod config;
pub mod token;

pub use callback::*;
pub use config::*;
pub use token::*;
