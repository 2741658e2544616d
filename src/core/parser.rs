//! Callback URL Parser
//!
//! Token pair extraction from implicit-flow redirect URLs.

use crate::core::params::{QueryParams, UrlComponents};
use crate::error::ExtractionError;
use crate::types::{CallbackParserConfig, ExtractedTokens, TokenPair, TokenSource};

/// Callback URL parser.
///
/// Stateless apart from its configuration; safe to share across threads.
#[derive(Clone, Debug, Default)]
pub struct CallbackParser {
    config: CallbackParserConfig,
}

impl CallbackParser {
    /// Create a parser with the given configuration.
    pub fn new(config: CallbackParserConfig) -> Self {
        Self { config }
    }

    /// Get the parser configuration.
    pub fn config(&self) -> &CallbackParserConfig {
        &self.config
    }

    /// Extract the token pair from a callback URL.
    ///
    /// Returns `None` whenever both tokens cannot be resolved to non-empty
    /// values. Never panics on malformed input.
    pub fn parse(&self, url: &str) -> Option<TokenPair> {
        self.extract(url).ok().map(|extracted| extracted.tokens)
    }

    /// Extract the token pair, reporting where each token came from or why
    /// extraction failed.
    ///
    /// The fragment is searched first. Tokens it does not supply are then
    /// looked up in the query; a fragment value is never overwritten.
    pub fn extract(&self, url: &str) -> Result<ExtractedTokens, ExtractionError> {
        if url.is_empty() {
            return Err(ExtractionError::EmptyInput);
        }

        let components = UrlComponents::split(url);
        let lookup = self.config.lookup;

        let fragment = components.fragment().filter(|_| lookup.uses_fragment());
        let query = components.query().filter(|_| lookup.uses_query());
        if fragment.is_none() && query.is_none() {
            return Err(ExtractionError::NoParameters);
        }

        let mut access: Option<(String, TokenSource)> = None;
        let mut refresh: Option<(String, TokenSource)> = None;

        if let Some(fragment) = fragment {
            self.fill_missing(fragment, TokenSource::Fragment, &mut access, &mut refresh);
        }

        if access.is_none() || refresh.is_none() {
            if let Some(query) = query {
                self.fill_missing(query, TokenSource::Query, &mut access, &mut refresh);
            }
        }

        match (access, refresh) {
            (Some((access_token, access_source)), Some((refresh_token, refresh_source))) => {
                let tokens = TokenPair::new(access_token, refresh_token)
                    .ok_or(ExtractionError::MissingTokens)?;
                Ok(ExtractedTokens {
                    tokens,
                    access_token_source: access_source,
                    refresh_token_source: refresh_source,
                })
            }
            (Some(_), None) => Err(ExtractionError::MissingRefreshToken),
            (None, Some(_)) => Err(ExtractionError::MissingAccessToken),
            (None, None) => Err(ExtractionError::MissingTokens),
        }
    }

    fn fill_missing(
        &self,
        raw: &str,
        source: TokenSource,
        access: &mut Option<(String, TokenSource)>,
        refresh: &mut Option<(String, TokenSource)>,
    ) {
        let params = QueryParams::parse(raw);

        if access.is_none() {
            *access = params
                .get_non_empty(&self.config.access_token_param)
                .map(|value| (value, source));
        }
        if refresh.is_none() {
            *refresh = params
                .get_non_empty(&self.config.refresh_token_param)
                .map(|value| (value, source));
        }
    }
}
