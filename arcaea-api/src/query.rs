//! URL query-string builder for GET endpoints.
//!
//! Every endpoint takes its parameters in the query string, and most of them
//! are optional. [`QueryBuilder`] collects `(name, value)` pairs in insertion
//! order, silently dropping absent or empty values, and renders either an
//! empty string or a `?a=x&b=y` suffix with values percent-encoded (UTF-8).
//!
//! Repeated names are kept as-is, in order — the builder never de-duplicates.

/// Ordered collection of optional query parameters.
///
/// ```
/// use arcaea_api::query::QueryBuilder;
///
/// let q = QueryBuilder::new()
///     .push("songname", Some("fracture"))
///     .push("difficulty", Some("2"))
///     .push("overflow", None::<&str>);
/// assert_eq!(q.build(), "?songname=fracture&difficulty=2");
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    pairs: Vec<(String, String)>,
}

impl QueryBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter if `value` is present and non-empty, otherwise do
    /// nothing. Returns `self` so calls chain.
    pub fn push<V: AsRef<str>>(mut self, name: &str, value: Option<V>) -> Self {
        if let Some(value) = value {
            let value = value.as_ref();
            if !value.is_empty() {
                self.pairs.push((name.to_owned(), value.to_owned()));
            }
        }
        self
    }

    /// Render the query suffix: `""` when no parameters were pushed, else a
    /// string starting with `?` with `&`-joined `name=value` pairs in
    /// insertion order. Values are percent-encoded.
    pub fn build(&self) -> String {
        if self.pairs.is_empty() {
            return String::new();
        }
        let mut out = String::from("?");
        for (i, (name, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                out.push('&');
            }
            out.push_str(&urlencoding::encode(name));
            out.push('=');
            out.push_str(&urlencoding::encode(value));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_builder_yields_empty_string() {
        assert_eq!(QueryBuilder::new().build(), "");
    }

    #[test]
    fn absent_and_empty_values_are_omitted() {
        let q = QueryBuilder::new()
            .push("start", None::<&str>)
            .push("blank", Some(""))
            .push("end", Some("12"));
        assert_eq!(q.build(), "?end=12");
    }

    #[test]
    fn insertion_order_is_preserved() {
        let q = QueryBuilder::new()
            .push("songname", Some("fre"))
            .push("difficulty", Some("2"));
        assert_eq!(q.build(), "?songname=fre&difficulty=2");
    }

    #[test]
    fn build_is_idempotent() {
        let q = QueryBuilder::new()
            .push("user", Some("Nagiha"))
            .push("recent", Some("7"));
        assert_eq!(q.build(), q.build());
    }

    #[test]
    fn repeated_names_are_all_kept() {
        let q = QueryBuilder::new()
            .push("id", Some("1"))
            .push("id", Some("2"));
        assert_eq!(q.build(), "?id=1&id=2");
    }

    #[test]
    fn values_are_percent_encoded_and_recoverable() {
        let raw = "a b&c=d?e#f";
        let q = QueryBuilder::new().push("songname", Some(raw)).build();
        let encoded = q
            .strip_prefix("?songname=")
            .expect("single-parameter query");
        assert!(!encoded.contains(' '));
        assert!(!encoded.contains('&'));
        assert_eq!(urlencoding::decode(encoded).unwrap(), raw);
    }

    #[test]
    fn non_ascii_values_use_utf8_bytes() {
        let q = QueryBuilder::new().push("songname", Some("テンペスト")).build();
        let encoded = q.strip_prefix("?songname=").unwrap();
        assert!(encoded.chars().all(|c| c.is_ascii()));
        assert_eq!(urlencoding::decode(encoded).unwrap(), "テンペスト");
    }
}
