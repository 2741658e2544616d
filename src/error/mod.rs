//! Callback Error Types
//!
//! Error hierarchy for callback extraction and token handoff.

use thiserror::Error;

/// Root error type for the callback integration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthCallbackError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Handoff error: {0}")]
    Handoff(#[from] HandoffError),
}

impl AuthCallbackError {
    /// Get error code for telemetry.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "CALLBACK_CONFIG",
            Self::Extraction(_) => "CALLBACK_EXTRACTION",
            Self::Handoff(_) => "CALLBACK_HANDOFF",
        }
    }

    /// Check if error is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Handoff(e) => e.is_retryable(),
            _ => false,
        }
    }
}

/// Configuration error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

/// Token extraction error.
///
/// All variants collapse to `None` in [`crate::parse_callback_url`]; they
/// exist for callers that want to know why a deep link was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("Callback URL is empty")]
    EmptyInput,

    #[error("Callback URL has no fragment or query to search")]
    NoParameters,

    #[error("Access token not found")]
    MissingAccessToken,

    #[error("Refresh token not found")]
    MissingRefreshToken,

    #[error("Neither access token nor refresh token found")]
    MissingTokens,
}

impl ExtractionError {
    /// Get a short reason label for logs.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::NoParameters => "no_parameters",
            Self::MissingAccessToken => "missing_access_token",
            Self::MissingRefreshToken => "missing_refresh_token",
            Self::MissingTokens => "missing_tokens",
        }
    }
}

/// Error reported by the session-establishment collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HandoffError {
    #[error("Session exchange rejected: {message}")]
    Rejected { message: String },

    #[error("Session service unavailable: {message}")]
    Unavailable { message: String },
}

impl HandoffError {
    /// Check if error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}

/// Result type for callback operations.
pub type AuthCallbackResult<T> = Result<T, AuthCallbackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let error: AuthCallbackError = ExtractionError::EmptyInput.into();
        assert_eq!(error.error_code(), "CALLBACK_EXTRACTION");

        let error: AuthCallbackError = ConfigurationError::MissingField {
            field: "callback_marker".to_string(),
        }
        .into();
        assert_eq!(error.error_code(), "CALLBACK_CONFIG");
    }

    #[test]
    fn test_error_is_retryable() {
        assert!(AuthCallbackError::Handoff(HandoffError::Unavailable {
            message: "timeout".to_string()
        })
        .is_retryable());
        assert!(!AuthCallbackError::Handoff(HandoffError::Rejected {
            message: "invalid grant".to_string()
        })
        .is_retryable());
        assert!(!AuthCallbackError::Extraction(ExtractionError::MissingTokens).is_retryable());
    }

    #[test]
    fn test_extraction_error_display() {
        let error = AuthCallbackError::from(ExtractionError::MissingRefreshToken);
        assert_eq!(
            error.to_string(),
            "Extraction error: Refresh token not found"
        );
        assert_eq!(
            ExtractionError::MissingRefreshToken.reason(),
            "missing_refresh_token"
        );
    }
}
