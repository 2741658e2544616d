//! Configuration Types
//!
//! Callback parser configuration types.

use serde::{Deserialize, Serialize};

/// Default callback path marker.
pub const DEFAULT_CALLBACK_MARKER: &str = "auth/callback";
/// Default access token parameter name.
pub const DEFAULT_ACCESS_TOKEN_PARAM: &str = "access_token";
/// Default refresh token parameter name.
pub const DEFAULT_REFRESH_TOKEN_PARAM: &str = "refresh_token";

/// Which URL components are searched for tokens, and in what order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenLookup {
    /// Fragment first; the query fills only tokens the fragment lacks.
    #[default]
    FragmentThenQuery,
    /// Fragment only (strict implicit-flow posture).
    FragmentOnly,
    /// Query only.
    QueryOnly,
}

impl TokenLookup {
    /// Check if the fragment is searched.
    pub fn uses_fragment(&self) -> bool {
        matches!(self, Self::FragmentThenQuery | Self::FragmentOnly)
    }

    /// Check if the query is searched.
    pub fn uses_query(&self) -> bool {
        matches!(self, Self::FragmentThenQuery | Self::QueryOnly)
    }
}

/// Callback parser configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CallbackParserConfig {
    /// Literal substring identifying a callback path.
    pub callback_marker: String,
    /// Parameter carrying the access token.
    pub access_token_param: String,
    /// Parameter carrying the refresh token.
    pub refresh_token_param: String,
    /// Component lookup order.
    pub lookup: TokenLookup,
}

impl Default for CallbackParserConfig {
    fn default() -> Self {
        Self {
            callback_marker: DEFAULT_CALLBACK_MARKER.to_string(),
            access_token_param: DEFAULT_ACCESS_TOKEN_PARAM.to_string(),
            refresh_token_param: DEFAULT_REFRESH_TOKEN_PARAM.to_string(),
            lookup: TokenLookup::default(),
        }
    }
}
