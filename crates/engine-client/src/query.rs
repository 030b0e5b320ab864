//! Query parameter serialization.
//!
//! A [`Query`] is an insertion-ordered mapping of parameter name to an
//! optional [`QueryValue`]. Unset values are dropped, booleans become
//! `true`/`false`, numbers use plain decimal formatting and string lists are
//! comma-joined under their original key.

use url::Url;
use url::form_urlencoded;

/// A single query parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Str(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    List(Vec<String>),
}

impl QueryValue {
    /// The value as it appears on the wire, before percent-encoding.
    pub fn to_query_string(&self) -> String {
        match self {
            Self::Str(s) => s.clone(),
            Self::Int(n) => n.to_string(),
            Self::UInt(n) => n.to_string(),
            Self::Float(n) => n.to_string(),
            Self::Bool(b) => b.to_string(),
            Self::List(items) => items.join(","),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for QueryValue {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for QueryValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        Self::UInt(value.into())
    }
}

impl From<u64> for QueryValue {
    fn from(value: u64) -> Self {
        Self::UInt(value)
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<&[String]> for QueryValue {
    fn from(value: &[String]) -> Self {
        Self::List(value.to_vec())
    }
}

impl From<&[&str]> for QueryValue {
    fn from(value: &[&str]) -> Self {
        Self::List(value.iter().map(|s| (*s).to_owned()).collect())
    }
}

/// Insertion-ordered query parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    params: Vec<(String, Option<QueryValue>)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`, replacing an earlier value in place.
    #[must_use]
    pub fn set(self, name: &str, value: impl Into<QueryValue>) -> Self {
        self.set_opt(name, Some(value))
    }

    /// Set `name` to an optional value; `None` is recorded but never emitted.
    #[must_use]
    pub fn set_opt<V: Into<QueryValue>>(mut self, name: &str, value: Option<V>) -> Self {
        let value = value.map(Into::into);
        match self.params.iter_mut().find(|(key, _)| key == name) {
            Some(slot) => slot.1 = value,
            None => self.params.push((name.to_owned(), value)),
        }
        self
    }

    /// Emitted `(name, value)` pairs, unset entries dropped, not yet encoded.
    pub fn pairs(&self) -> Vec<(String, String)> {
        self.params
            .iter()
            .filter_map(|(key, value)| {
                value
                    .as_ref()
                    .map(|v| (key.clone(), v.to_query_string()))
            })
            .collect()
    }

    /// True when no pair would be emitted.
    pub fn is_empty(&self) -> bool {
        self.params.iter().all(|(_, value)| value.is_none())
    }

    /// Percent-encoded `a=1&b=2` form, without a leading `?`.
    ///
    /// Commas stay literal so list values read `keys=a,b` on the wire.
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs())
            .finish()
            .replace("%2C", ",")
    }

    /// Append after any query already on `url`.
    pub(crate) fn append_to(&self, url: &mut Url) {
        if self.is_empty() {
            return;
        }
        let encoded = self.to_query_string();
        let combined = match url.query() {
            Some(existing) if !existing.is_empty() => format!("{existing}&{encoded}"),
            _ => encoded,
        };
        url.set_query(Some(&combined));
    }
}

/// Conversion of a per-endpoint option struct into query parameters.
pub trait ToQuery {
    fn to_query(&self) -> Query;
}

impl ToQuery for Query {
    fn to_query(&self) -> Query {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_values_are_dropped() {
        let with_unset = Query::new()
            .set_opt::<&str>("a", None)
            .set("b", "x");
        let without = Query::new().set("b", "x");
        assert_eq!(with_unset.pairs(), without.pairs());
        assert_eq!(with_unset.to_query_string(), "b=x");
    }

    #[test]
    fn booleans_and_numbers_are_stringified() {
        let q = Query::new()
            .set("enabled", false)
            .set("visible", true)
            .set("pageIndex", 1_u32)
            .set("offset", 0_i64)
            .set("ratio", 0.25_f64);
        assert_eq!(
            q.to_query_string(),
            "enabled=false&visible=true&pageIndex=1&offset=0&ratio=0.25"
        );
    }

    #[test]
    fn false_and_zero_are_not_treated_as_absent() {
        let q = Query::new().set("enabled", false).set("pageIndex", 0_u32);
        assert!(!q.is_empty());
        assert_eq!(q.pairs().len(), 2);
    }

    #[test]
    fn arrays_are_comma_joined() {
        let q = Query::new().set("fullKeys", vec!["score".to_string(), "level".to_string()]);
        assert_eq!(
            q.pairs(),
            vec![("fullKeys".to_string(), "score,level".to_string())]
        );

        assert_eq!(q.to_query_string(), "fullKeys=score,level");

        let single = Query::new().set("fullKeys", &["score"][..]);
        assert_eq!(single.to_query_string(), "fullKeys=score");
    }

    #[test]
    fn empty_string_is_still_emitted() {
        let q = Query::new().set("search", "");
        assert_eq!(q.to_query_string(), "search=");
    }

    #[test]
    fn serialization_is_deterministic() {
        let q = Query::new()
            .set("b", "two words")
            .set("a", vec!["x".to_string(), "y".to_string()])
            .set("c", true);
        assert_eq!(q.to_query_string(), q.to_query_string());
        assert_eq!(q.to_query_string(), "b=two+words&a=x,y&c=true");
    }

    #[test]
    fn setting_a_key_twice_replaces_in_place() {
        let q = Query::new().set("a", 1_u32).set("b", 2_u32).set("a", 3_u32);
        assert_eq!(q.to_query_string(), "a=3&b=2");

        let cleared = q.set_opt::<u32>("a", None);
        assert_eq!(cleared.to_query_string(), "b=2");
    }

    #[test]
    fn append_skips_empty_queries() {
        let mut url = Url::parse("http://mock-api/accounts").unwrap();
        Query::new().set_opt::<bool>("enabled", None).append_to(&mut url);
        assert_eq!(url.as_str(), "http://mock-api/accounts");

        Query::new().set("pageIndex", 2_u32).append_to(&mut url);
        assert_eq!(url.as_str(), "http://mock-api/accounts?pageIndex=2");
    }

    #[test]
    fn append_keeps_commas_and_existing_pairs() {
        let mut url = Url::parse("http://mock-api/accounts/acc1/metrics?v=2").unwrap();
        Query::new()
            .set("fullKeys", vec!["score".to_string(), "level".to_string()])
            .set("note", "a&b c")
            .append_to(&mut url);
        assert_eq!(url.query(), Some("v=2&fullKeys=score,level&note=a%26b+c"));
    }
}
