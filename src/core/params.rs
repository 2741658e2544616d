//! Parameter Decoding
//!
//! Minimal `key=value&key=value` decoding for URL components.

use std::ops::Range;
use url::form_urlencoded;

/// Split a raw URL into its fragment and query components.
///
/// The fragment is everything after the first `#`. The query is everything
/// after the first `?`, cut at the first `#` that follows it. Neither
/// component is required to be well formed, and when the first `?` sits
/// inside the fragment the two components overlap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UrlComponents<'a> {
    url: &'a str,
    fragment: Option<Range<usize>>,
    query: Option<Range<usize>>,
}

impl<'a> UrlComponents<'a> {
    /// Split a URL string.
    pub fn split(url: &'a str) -> Self {
        let fragment = url.find('#').map(|index| index + 1..url.len());

        let query = url.find('?').map(|index| {
            let start = index + 1;
            let end = url[start..]
                .find('#')
                .map_or(url.len(), |offset| start + offset);
            start..end
        });

        Self {
            url,
            fragment,
            query,
        }
    }

    /// Raw fragment, if the URL contains `#`.
    pub fn fragment(&self) -> Option<&'a str> {
        self.fragment.clone().map(|span| &self.url[span])
    }

    /// Raw query, if the URL contains `?`.
    pub fn query(&self) -> Option<&'a str> {
        self.query.clone().map(|span| &self.url[span])
    }

    /// Byte range of the fragment within the URL.
    pub fn fragment_span(&self) -> Option<Range<usize>> {
        self.fragment.clone()
    }

    /// Byte range of the query within the URL.
    pub fn query_span(&self) -> Option<Range<usize>> {
        self.query.clone()
    }
}

/// Decoded view over a form-urlencoded parameter string.
pub struct QueryParams<'a> {
    raw: &'a str,
}

impl<'a> QueryParams<'a> {
    /// Wrap a raw parameter string. A single leading `?` is ignored.
    pub fn parse(raw: &'a str) -> Self {
        Self {
            raw: raw.strip_prefix('?').unwrap_or(raw),
        }
    }

    /// Get the decoded value of the first occurrence of `name`.
    pub fn get(&self, name: &str) -> Option<String> {
        form_urlencoded::parse(self.raw.as_bytes())
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }

    /// Get the decoded value of `name`, treating an empty value as absent.
    pub fn get_non_empty(&self, name: &str) -> Option<String> {
        self.get(name).filter(|value| !value.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_fragment_and_query() {
        let components = UrlComponents::split("app://cb?a=1&b=2#c=3");
        assert_eq!(components.query(), Some("a=1&b=2"));
        assert_eq!(components.fragment(), Some("c=3"));
        assert_eq!(components.query_span(), Some(9..16));
        assert_eq!(components.fragment_span(), Some(17..20));
    }

    #[test]
    fn test_split_without_components() {
        for url in ["app://home", ""] {
            let components = UrlComponents::split(url);
            assert_eq!(components.fragment(), None);
            assert_eq!(components.query(), None);
        }
    }

    #[test]
    fn test_split_question_mark_inside_fragment() {
        let components = UrlComponents::split("app://cb#x=1?y=2");
        assert_eq!(components.fragment(), Some("x=1?y=2"));
        assert_eq!(components.query(), Some("y=2"));
    }

    #[test]
    fn test_get_decodes_values() {
        let params = QueryParams::parse("token=a%2Bb%20c&other=d+e");
        assert_eq!(params.get("token"), Some("a+b c".to_string()));
        assert_eq!(params.get("other"), Some("d e".to_string()));
        assert_eq!(params.get("missing"), None);
    }

    #[test]
    fn test_get_first_occurrence_wins() {
        let params = QueryParams::parse("token=first&token=second");
        assert_eq!(params.get("token"), Some("first".to_string()));
    }

    #[test]
    fn test_leading_question_mark_is_ignored() {
        let params = QueryParams::parse("?token=abc");
        assert_eq!(params.get("token"), Some("abc".to_string()));
    }

    #[test]
    fn test_empty_value_is_absent() {
        let params = QueryParams::parse("token=&flag");
        assert_eq!(params.get("token"), Some(String::new()));
        assert_eq!(params.get_non_empty("token"), None);
        assert_eq!(params.get_non_empty("flag"), None);
    }

    #[test]
    fn test_unicode_values() {
        let params = QueryParams::parse("token=%E2%9C%93%20caf%C3%A9");
        assert_eq!(params.get("token"), Some("✓ café".to_string()));
    }
}
