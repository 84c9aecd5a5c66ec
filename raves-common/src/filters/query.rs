//! Query string handling for the applied genre filter
//!
//! `QueryParams` keeps pairs in URL order and mirrors how a browser's
//! `URLSearchParams` edits them, so parameters this crate does not own (the
//! search text, paging) pass through every filter change untouched.

use crate::error::FilterError;
use crate::genre::GenreToken;
use tracing::warn;

/// Query parameter carrying the applied genre filter.
pub const WITH_GENRES: &str = "with_genres";

/// Ordered key/value pairs of a URL query string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Parse a raw query string, with or without the leading `?`.
    ///
    /// Never fails: input that cannot be decoded yields an empty set of params.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        if raw.is_empty() {
            return Self::default();
        }
        match serde_urlencoded::from_str::<Vec<(String, String)>>(raw) {
            Ok(pairs) => Self { pairs },
            Err(e) => {
                warn!("Ignoring malformed query string {:?}: {}", raw, e);
                Self::default()
            }
        }
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Replace the first `key` in place and drop any later duplicates, or
    /// append when the key is missing.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.pairs.iter().position(|(k, _)| k == key) {
            Some(first) => {
                self.pairs[first].1 = value;
                let mut index = 0;
                self.pairs.retain(|(k, _)| {
                    let keep = index <= first || k != key;
                    index += 1;
                    keep
                });
            }
            None => self.pairs.push((key.to_string(), value)),
        }
    }

    /// Remove every pair named `key`.
    pub fn delete(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Serialize as `application/x-www-form-urlencoded`, without a leading `?`.
    pub fn to_query_string(&self) -> Result<String, FilterError> {
        Ok(serde_urlencoded::to_string(&self.pairs)?)
    }

    /// The genre filter currently applied by this query, if any.
    pub fn applied_genres(&self) -> Option<AppliedSelection> {
        self.get(WITH_GENRES).map(AppliedSelection::parse)
    }
}

/// Genre tokens exactly as encoded in `with_genres`, in URL order and with
/// any duplicates kept.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppliedSelection {
    tokens: Vec<GenreToken>,
}

impl AppliedSelection {
    pub fn parse(value: &str) -> Self {
        Self {
            tokens: value.split(',').map(GenreToken::parse).collect(),
        }
    }

    pub fn tokens(&self) -> &[GenreToken] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strips_question_mark() {
        let params = QueryParams::parse("?q=alien&with_genres=27%2C878");
        assert_eq!(params.get("q"), Some("alien"));
        assert_eq!(params.get(WITH_GENRES), Some("27,878"));
    }

    #[test]
    fn test_parse_empty() {
        assert!(QueryParams::parse("").is_empty());
        assert!(QueryParams::parse("?").is_empty());
    }

    #[test]
    fn test_parse_accepts_unencoded_commas() {
        let params = QueryParams::parse("with_genres=3,7,9");
        assert_eq!(params.get(WITH_GENRES), Some("3,7,9"));
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut params = QueryParams::parse("with_genres=1&q=heat&with_genres=2");
        params.set(WITH_GENRES, "5");
        assert_eq!(
            params.pairs(),
            &[
                ("with_genres".to_string(), "5".to_string()),
                ("q".to_string(), "heat".to_string()),
            ]
        );
    }

    #[test]
    fn test_set_appends_when_missing() {
        let mut params = QueryParams::parse("q=heat");
        params.set(WITH_GENRES, "80,18");
        assert_eq!(
            params.to_query_string().unwrap(),
            "q=heat&with_genres=80%2C18"
        );
    }

    #[test]
    fn test_delete_removes_all() {
        let mut params = QueryParams::parse("with_genres=1&q=heat&with_genres=2");
        params.delete(WITH_GENRES);
        assert_eq!(params.to_query_string().unwrap(), "q=heat");
    }

    #[test]
    fn test_query_string_encodes_spaces() {
        let params = QueryParams::from_pairs([("q", "the thing")]);
        assert_eq!(params.to_query_string().unwrap(), "q=the+thing");
    }

    #[test]
    fn test_applied_genres_absent() {
        assert_eq!(QueryParams::parse("q=heat").applied_genres(), None);
    }

    #[test]
    fn test_applied_genres_keeps_order_and_duplicates() {
        let applied = QueryParams::parse("with_genres=9,3,9").applied_genres().unwrap();
        assert_eq!(
            applied.tokens(),
            &[GenreToken::Id(9), GenreToken::Id(3), GenreToken::Id(9)]
        );
    }

    #[test]
    fn test_applied_genres_empty_value_reads_as_zero() {
        let applied = QueryParams::parse("with_genres=").applied_genres().unwrap();
        assert_eq!(applied.tokens(), &[GenreToken::Id(0)]);
    }

    #[test]
    fn test_applied_genres_invalid_tokens() {
        let applied = QueryParams::parse("with_genres=12,drama").applied_genres().unwrap();
        assert_eq!(applied.tokens(), &[GenreToken::Id(12), GenreToken::Invalid]);
    }
}
