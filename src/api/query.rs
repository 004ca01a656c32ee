//! Canonical query-string encoding for list reads.
//!
//! Keys are ordered (BTreeMap) so the same filters always produce the same
//! string; array values serialize as repeated keys.

use std::collections::BTreeMap;

use url::form_urlencoded::Serializer;

/// One filter value: a scalar or an array (repeated key on the wire).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Single(String),
    Many(Vec<String>),
}

/// Ordered filter mapping for list-read requests.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryParams {
    params: BTreeMap<String, QueryValue>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params
            .insert(key.into(), QueryValue::Single(value.into()));
        self
    }

    pub fn with_many<I, S>(mut self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.params.insert(
            key.into(),
            QueryValue::Many(values.into_iter().map(Into::into).collect()),
        );
        self
    }

    pub fn with_page(self, page: u64) -> Self {
        self.with("page", page.to_string())
    }

    pub fn with_page_size(self, size: u32) -> Self {
        self.with("page_size", size.to_string())
    }

    pub fn with_search(self, term: impl Into<String>) -> Self {
        self.with("search", term)
    }

    pub fn with_order_by(self, column: impl Into<String>, descending: bool) -> Self {
        self.with("order_by", column)
            .with("order", if descending { "desc" } else { "asc" })
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Produce the canonical encoded string (no leading `?`).
    pub fn encode(&self) -> String {
        let mut serializer = Serializer::new(String::new());
        for (key, value) in &self.params {
            match value {
                QueryValue::Single(v) => {
                    serializer.append_pair(key, v);
                }
                QueryValue::Many(values) => {
                    for v in values {
                        serializer.append_pair(key, v);
                    }
                }
            }
        }
        serializer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_encode_in_stable_order() {
        let a = QueryParams::new().with("b", "2").with("a", "1");
        let b = QueryParams::new().with("a", "1").with("b", "2");
        assert_eq!(a.encode(), b.encode());
        assert_eq!(a.encode(), "a=1&b=2");
    }

    #[test]
    fn arrays_repeat_the_key() {
        let params = QueryParams::new().with_many("id", ["m1", "m2", "m3"]);
        assert_eq!(params.encode(), "id=m1&id=m2&id=m3");
    }

    #[test]
    fn values_are_percent_encoded() {
        let params = QueryParams::new().with_search("o'brien & co");
        assert_eq!(params.encode(), "search=o%27brien+%26+co");
    }

    #[test]
    fn paging_helpers() {
        let params = QueryParams::new()
            .with_page(2)
            .with_page_size(25)
            .with_order_by("lastname", false);
        assert_eq!(
            params.encode(),
            "order=asc&order_by=lastname&page=2&page_size=25"
        );
    }
}
