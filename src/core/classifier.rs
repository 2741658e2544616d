//! Callback Classification
//!
//! Cheap substring triage deciding whether a deep link should be parsed.

use crate::core::parser::CallbackParser;

impl CallbackParser {
    /// Check if a URL looks like an auth callback.
    ///
    /// True when the raw string contains the callback marker or either token
    /// parameter name anywhere. This is not a structural check: a `true`
    /// result does not imply [`CallbackParser::parse`] will succeed.
    pub fn is_callback(&self, url: &str) -> bool {
        let config = self.config();

        [
            config.callback_marker.as_str(),
            config.access_token_param.as_str(),
            config.refresh_token_param.as_str(),
        ]
        .iter()
        .any(|marker| !marker.is_empty() && url.contains(marker))
    }
}
