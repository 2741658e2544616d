//! Configuration Builder
//!
//! Fluent builder for callback parser configuration.

use crate::core::CallbackParser;
use crate::error::{AuthCallbackError, ConfigurationError};
use crate::types::{
    CallbackParserConfig, TokenLookup, DEFAULT_ACCESS_TOKEN_PARAM, DEFAULT_CALLBACK_MARKER,
    DEFAULT_REFRESH_TOKEN_PARAM,
};

/// Callback parser configuration builder.
#[derive(Default)]
pub struct CallbackParserConfigBuilder {
    callback_marker: Option<String>,
    access_token_param: Option<String>,
    refresh_token_param: Option<String>,
    lookup: TokenLookup,
}

impl CallbackParserConfigBuilder {
    /// Create new configuration builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the callback path marker.
    pub fn callback_marker(mut self, marker: impl Into<String>) -> Self {
        self.callback_marker = Some(marker.into());
        self
    }

    /// Set the access token parameter name.
    pub fn access_token_param(mut self, name: impl Into<String>) -> Self {
        self.access_token_param = Some(name.into());
        self
    }

    /// Set the refresh token parameter name.
    pub fn refresh_token_param(mut self, name: impl Into<String>) -> Self {
        self.refresh_token_param = Some(name.into());
        self
    }

    /// Set the component lookup order.
    pub fn lookup(mut self, lookup: TokenLookup) -> Self {
        self.lookup = lookup;
        self
    }

    /// Only accept tokens carried in the fragment.
    pub fn fragment_only(self) -> Self {
        self.lookup(TokenLookup::FragmentOnly)
    }

    /// Start from an existing configuration.
    pub fn from_config(mut self, config: CallbackParserConfig) -> Self {
        self.callback_marker = Some(config.callback_marker);
        self.access_token_param = Some(config.access_token_param);
        self.refresh_token_param = Some(config.refresh_token_param);
        self.lookup = config.lookup;
        self
    }

    /// Build the callback parser configuration.
    pub fn build(self) -> Result<CallbackParserConfig, AuthCallbackError> {
        let callback_marker = non_empty(
            "callback_marker",
            self.callback_marker
                .unwrap_or_else(|| DEFAULT_CALLBACK_MARKER.to_string()),
        )?;
        let access_token_param = non_empty(
            "access_token_param",
            self.access_token_param
                .unwrap_or_else(|| DEFAULT_ACCESS_TOKEN_PARAM.to_string()),
        )?;
        let refresh_token_param = non_empty(
            "refresh_token_param",
            self.refresh_token_param
                .unwrap_or_else(|| DEFAULT_REFRESH_TOKEN_PARAM.to_string()),
        )?;

        if access_token_param == refresh_token_param {
            return Err(AuthCallbackError::Configuration(
                ConfigurationError::InvalidConfig {
                    message: format!(
                        "access and refresh tokens cannot share the parameter '{}'",
                        access_token_param
                    ),
                },
            ));
        }

        Ok(CallbackParserConfig {
            callback_marker,
            access_token_param,
            refresh_token_param,
            lookup: self.lookup,
        })
    }

    /// Build a parser from the configuration.
    pub fn build_parser(self) -> Result<CallbackParser, AuthCallbackError> {
        self.build().map(CallbackParser::new)
    }
}

fn non_empty(field: &str, value: String) -> Result<String, AuthCallbackError> {
    if value.is_empty() {
        return Err(AuthCallbackError::Configuration(
            ConfigurationError::MissingField {
                field: field.to_string(),
            },
        ));
    }
    Ok(value)
}

/// Create a new callback parser configuration builder.
pub fn callback_parser_config() -> CallbackParserConfigBuilder {
    CallbackParserConfigBuilder::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = CallbackParserConfigBuilder::new().build().unwrap();
        assert_eq!(config, CallbackParserConfig::default());
    }

    #[test]
    fn test_builder_custom() {
        let config = callback_parser_config()
            .callback_marker("oauth/return")
            .access_token_param("at")
            .refresh_token_param("rt")
            .fragment_only()
            .build()
            .unwrap();

        assert_eq!(config.callback_marker, "oauth/return");
        assert_eq!(config.access_token_param, "at");
        assert_eq!(config.refresh_token_param, "rt");
        assert_eq!(config.lookup, TokenLookup::FragmentOnly);
    }

    #[test]
    fn test_builder_rejects_empty_param() {
        let result = callback_parser_config().access_token_param("").build();

        assert_eq!(
            result,
            Err(AuthCallbackError::Configuration(
                ConfigurationError::MissingField {
                    field: "access_token_param".to_string()
                }
            ))
        );
    }

    #[test]
    fn test_builder_rejects_shared_param_name() {
        let result = callback_parser_config()
            .access_token_param("token")
            .refresh_token_param("token")
            .build();

        assert!(matches!(
            result,
            Err(AuthCallbackError::Configuration(
                ConfigurationError::InvalidConfig { .. }
            ))
        ));
    }

    #[test]
    fn test_builder_from_config() {
        let base = CallbackParserConfig {
            lookup: TokenLookup::QueryOnly,
            ..Default::default()
        };

        let parser = callback_parser_config()
            .from_config(base)
            .build_parser()
            .unwrap();

        assert_eq!(parser.config().lookup, TokenLookup::QueryOnly);
        assert!(parser
            .parse("client://callback?access_token=abc&refresh_token=def")
            .is_some());
    }
}
