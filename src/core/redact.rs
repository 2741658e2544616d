//! URL Redaction
//!
//! Log-safe rendering of callback URLs.

use std::ops::Range;
use url::form_urlencoded;

use crate::core::params::UrlComponents;
use crate::core::parser::CallbackParser;
use crate::types::CallbackParserConfig;

const REDACTED: &str = "[REDACTED]";

/// Replace the values of the configured token parameters with `[REDACTED]`.
///
/// The URL is split into fragment and query exactly as the parser splits
/// it, and each token value is masked up to the next `&` or the end of its
/// component. Whatever the parser could return as a token is therefore
/// never left in the output. All other text is left untouched.
pub fn redact_callback_url(url: &str, config: &CallbackParserConfig) -> String {
    let components = UrlComponents::split(url);

    let mut masked = Vec::new();
    for span in [components.fragment_span(), components.query_span()]
        .into_iter()
        .flatten()
    {
        collect_token_values(url, span, config, &mut masked);
    }
    masked.sort_by_key(|span| span.start);

    let mut redacted = String::with_capacity(url.len());
    let mut cursor = 0;
    for span in masked {
        if span.start < cursor {
            // Overlaps a value already masked (fragment and query can share text).
            cursor = cursor.max(span.end);
            continue;
        }
        redacted.push_str(&url[cursor..span.start]);
        redacted.push_str(REDACTED);
        cursor = span.end;
    }
    redacted.push_str(&url[cursor..]);

    redacted
}

/// Push the byte ranges of non-empty token values found in one component.
fn collect_token_values(
    url: &str,
    span: Range<usize>,
    config: &CallbackParserConfig,
    masked: &mut Vec<Range<usize>>,
) {
    let mut start = span.start;
    if url[start..span.end].starts_with('?') {
        start += 1;
    }

    let mut pair_start = start;
    for pair in url[start..span.end].split('&') {
        let pair_end = pair_start + pair.len();

        if let Some(equals) = pair.find('=') {
            let is_token = form_urlencoded::parse(pair.as_bytes())
                .next()
                .map_or(false, |(key, _)| {
                    key == config.access_token_param || key == config.refresh_token_param
                });

            let value_start = pair_start + equals + 1;
            if is_token && value_start < pair_end {
                masked.push(value_start..pair_end);
            }
        }

        pair_start = pair_end + 1;
    }
}

impl CallbackParser {
    /// Render a URL with token values masked, using this parser's parameter names.
    pub fn redact(&self, url: &str) -> String {
        redact_callback_url(url, self.config())
    }
}
