//! Deep Link Flow
//!
//! Triage, extraction and handoff of OS-delivered deep links.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::core::CallbackParser;
use crate::error::{ExtractionError, HandoffError};
use crate::telemetry::{CallbackLogContext, LogLevel, Logger, TracingLogger};
use crate::types::{TokenPair, TokenSource};

/// Session-establishment collaborator (for dependency injection).
///
/// Implemented by the application's authentication service. Any retry
/// policy belongs to the implementation.
#[async_trait]
pub trait TokenHandoff: Send + Sync {
    /// Exchange the token pair for an authenticated session.
    async fn establish_session(&self, tokens: TokenPair) -> Result<(), HandoffError>;
}

/// Result of handling a single deep-link event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeepLinkOutcome {
    /// The URL is not an auth callback.
    Ignored,
    /// The URL looked like a callback but did not carry a usable token pair.
    Rejected(ExtractionError),
    /// Tokens were handed off and the session was established.
    SessionEstablished {
        access_token_source: TokenSource,
        refresh_token_source: TokenSource,
    },
    /// Tokens were extracted but the handoff failed.
    HandoffFailed(HandoffError),
}

impl DeepLinkOutcome {
    /// Check if a session was established.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::SessionEstablished { .. })
    }
}

/// Deep-link handler.
///
/// Classifies each URL once and parses it at most once.
pub struct DeepLinkHandler<H: TokenHandoff> {
    parser: CallbackParser,
    handoff: Arc<H>,
    logger: Arc<dyn Logger>,
}

impl<H: TokenHandoff> DeepLinkHandler<H> {
    /// Create new deep-link handler logging through `tracing`.
    pub fn new(parser: CallbackParser, handoff: Arc<H>) -> Self {
        Self {
            parser,
            handoff,
            logger: Arc::new(TracingLogger),
        }
    }

    /// Replace the logger.
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    /// Handle a deep-link URL.
    pub async fn handle(&self, url: &str) -> DeepLinkOutcome {
        if !self.parser.is_callback(url) {
            if self.logger.is_enabled(LogLevel::Debug) {
                self.logger.log(
                    LogLevel::Debug,
                    "Ignoring non-callback deep link",
                    &self.log_context(url),
                );
            }
            return DeepLinkOutcome::Ignored;
        }

        let context = self.log_context(url);

        let extracted = match self.parser.extract(url) {
            Ok(extracted) => extracted,
            Err(error) => {
                self.logger.log(
                    LogLevel::Warn,
                    "Callback deep link carried no usable token pair",
                    &context.field("reason", error.reason()),
                );
                return DeepLinkOutcome::Rejected(error);
            }
        };

        let access_token_source = extracted.access_token_source;
        let refresh_token_source = extracted.refresh_token_source;
        let context = context
            .field("access_token_source", access_token_source.as_str())
            .field("refresh_token_source", refresh_token_source.as_str());

        match self.handoff.establish_session(extracted.tokens).await {
            Ok(()) => {
                self.logger
                    .log(LogLevel::Info, "Session established from callback", &context);
                DeepLinkOutcome::SessionEstablished {
                    access_token_source,
                    refresh_token_source,
                }
            }
            Err(error) => {
                self.logger.log(
                    LogLevel::Error,
                    "Session handoff failed",
                    &context.field("retryable", error.is_retryable().to_string()),
                );
                DeepLinkOutcome::HandoffFailed(error)
            }
        }
    }

    fn log_context(&self, url: &str) -> CallbackLogContext {
        CallbackLogContext::new("handle_deep_link", self.parser.redact(url))
    }
}

/// Mock token handoff for testing.
#[derive(Default)]
pub struct MockTokenHandoff {
    received: Mutex<Vec<TokenPair>>,
    next_error: Mutex<Option<HandoffError>>,
}

impl MockTokenHandoff {
    /// Create new mock handoff.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the next handoff with the given error.
    pub fn set_next_error(&self, error: HandoffError) -> &Self {
        *self.next_error.lock().unwrap() = Some(error);
        self
    }

    /// Get every token pair received so far.
    pub fn get_received(&self) -> Vec<TokenPair> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl TokenHandoff for MockTokenHandoff {
    async fn establish_session(&self, tokens: TokenPair) -> Result<(), HandoffError> {
        self.received.lock().unwrap().push(tokens);

        match self.next_error.lock().unwrap().take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}
