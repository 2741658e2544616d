//! Token Types
//!
//! The token pair carried by an implicit-flow callback.

use secrecy::{ExposeSecret, SecretString};

/// Access/refresh token bundle extracted from a callback URL.
///
/// Both values are always non-empty. A pair is never partially populated:
/// [`TokenPair::new`] refuses to build one unless both tokens are present.
#[derive(Clone)]
pub struct TokenPair {
    access_token: SecretString,
    refresh_token: SecretString,
}

impl TokenPair {
    /// Create a token pair, or `None` if either value is empty.
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Option<Self> {
        let access_token = access_token.into();
        let refresh_token = refresh_token.into();

        if access_token.is_empty() || refresh_token.is_empty() {
            return None;
        }

        Some(Self {
            access_token: SecretString::new(access_token),
            refresh_token: SecretString::new(refresh_token),
        })
    }

    /// Get the access token value.
    pub fn access_token(&self) -> &str {
        self.access_token.expose_secret()
    }

    /// Get the refresh token value.
    pub fn refresh_token(&self) -> &str {
        self.refresh_token.expose_secret()
    }
}

impl PartialEq for TokenPair {
    fn eq(&self, other: &Self) -> bool {
        self.access_token() == other.access_token() && self.refresh_token() == other.refresh_token()
    }
}

impl Eq for TokenPair {}

impl std::fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenPair")
            .field("access_token", &"[REDACTED]")
            .field("refresh_token", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_pair_new() {
        let pair = TokenPair::new("abc123", "xyz789").unwrap();
        assert_eq!(pair.access_token(), "abc123");
        assert_eq!(pair.refresh_token(), "xyz789");
    }

    #[test]
    fn test_token_pair_rejects_empty_values() {
        assert!(TokenPair::new("", "xyz789").is_none());
        assert!(TokenPair::new("abc123", "").is_none());
        assert!(TokenPair::new("", "").is_none());
    }

    #[test]
    fn test_token_pair_debug_is_redacted() {
        let pair = TokenPair::new("super-secret-access", "super-secret-refresh").unwrap();
        let debug = format!("{:?}", pair);

        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("super-secret-access"));
        assert!(!debug.contains("super-secret-refresh"));
    }
}
