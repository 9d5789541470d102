//! Query-string construction for API requests.

use std::fmt;

/// A single query-parameter value.
///
/// Sequence values are rendered comma-joined (`ids=1,2,3`); this is the
/// convention the Pluggy API expects for list-valued parameters.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum QueryValue {
    /// String value.
    Str(String),
    /// Integer value.
    Int(i64),
    /// Boolean flag.
    Bool(bool),
    /// Sequence of strings, comma-joined.
    StrList(Vec<String>),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(value) => f.write_str(value),
            Self::Int(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::StrList(values) => f.write_str(&values.join(",")),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(values: Vec<String>) -> Self {
        Self::StrList(values)
    }
}

/// An ordered set of query parameters.
///
/// Entries render in insertion order. An empty set renders as the empty
/// string, never as a bare `?`.
#[derive(Debug, Clone, Default)]
pub(crate) struct QueryParams {
    entries: Vec<(String, QueryValue)>,
}

impl QueryParams {
    /// Create an empty parameter set.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append a parameter.
    pub(crate) fn push(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        self.entries.push((key.into(), value.into()));
    }

    /// Append a parameter, builder style.
    #[must_use]
    pub(crate) fn with(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.push(key, value);
        self
    }

    /// Whether no parameters have been set.
    #[must_use]
    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as `?k1=v1&k2=v2`, or the empty string when no entries exist.
    #[must_use]
    pub(crate) fn to_query_string(&self) -> String {
        if self.entries.is_empty() {
            return String::new();
        }
        let joined = self
            .entries
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&");
        format!("?{joined}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_params_render_nothing() {
        let params = QueryParams::new();
        assert!(params.is_empty());
        assert_eq!(params.to_query_string(), "");
    }

    #[test]
    fn single_param() {
        let params = QueryParams::new().with("itemId", "abc-123");
        assert_eq!(params.to_query_string(), "?itemId=abc-123");
    }

    #[test]
    fn params_keep_insertion_order() {
        let params = QueryParams::new()
            .with("accountId", "acc-1")
            .with("from", "2024-01-01")
            .with("to", "2024-02-01")
            .with("page", 3u32);
        assert_eq!(
            params.to_query_string(),
            "?accountId=acc-1&from=2024-01-01&to=2024-02-01&page=3"
        );
    }

    #[test]
    fn list_values_are_comma_joined() {
        let params = QueryParams::new()
            .with("countries", vec!["BR".to_string(), "US".to_string()])
            .with("sandbox", true);
        assert_eq!(params.to_query_string(), "?countries=BR,US&sandbox=true");
    }

    #[test]
    fn each_key_appears_once_per_push() {
        let params = QueryParams::new().with("a", 1i64).with("b", 2i64);
        let query = params.to_query_string();
        assert!(query.starts_with('?'));
        assert_eq!(query.matches("a=").count(), 1);
        assert_eq!(query.matches("b=").count(), 1);
        assert_eq!(query.matches('&').count(), 1);
    }
}
