//! Callback Types
//!
//! Types describing where callback tokens were found.

use super::TokenPair;

/// URL component a token was read from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenSource {
    /// Portion after the first `#`.
    Fragment,
    /// Portion after the first `?`, up to the next `#`.
    Query,
}

impl TokenSource {
    /// Get the component name as used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fragment => "fragment",
            Self::Query => "query",
        }
    }
}

impl std::fmt::Display for TokenSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Successful extraction result with provenance for each token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractedTokens {
    /// The extracted token pair.
    pub tokens: TokenPair,
    /// Where the access token came from.
    pub access_token_source: TokenSource,
    /// Where the refresh token came from.
    pub refresh_token_source: TokenSource,
}
