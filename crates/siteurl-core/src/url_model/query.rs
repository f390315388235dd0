//! Query-parameter algebra.
//!
//! Parameters are kept in insertion order: parsed parameters keep the
//! position of their first occurrence, setting an existing key replaces its
//! value in place, and new keys are appended. Encoding uses
//! `application/x-www-form-urlencoded` (spaces become `+`).

use url::form_urlencoded;

/// Ordered key/value query parameters with unique keys (last write wins).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a query string (without the leading `?`).
    ///
    /// Pairs with an empty key are dropped; a repeated key keeps its first
    /// position and its last value. Invalid percent-escapes decode lossily.
    pub fn parse(query: &str) -> Self {
        let mut params = Self::new();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            if key.is_empty() {
                continue;
            }
            params.set(&key, &value);
        }
        params
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Sets `key` to `value`, replacing in place or appending.
    pub fn set(&mut self, key: &str, value: &str) {
        match self.pairs.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value.to_string(),
            None => self.pairs.push((key.to_string(), value.to_string())),
        }
    }

    /// Removes `key`. Returns whether it was present.
    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.pairs.len();
        self.pairs.retain(|(k, _)| k != key);
        self.pairs.len() != before
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Encodes the parameters in order. Empty parameters encode as `""`.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.pairs {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}

/// Adds/overwrites `to_add` and then removes the keys named in `to_remove`.
///
/// The URL is split on its first `?`. Removal runs after addition, so a key
/// in both lists is removed. A `#fragment` following the query is set aside
/// and appended again after the rebuilt query. A `#` before the first `?`
/// (hash routes such as `/#/list?page=1`) is part of the base.
///
/// # Examples
///
/// - `modify("http://d/contact/?go=there&test=you", &[("test", "me")], &[])`
///   → `"http://d/contact/?go=there&test=me"`
/// - `modify("http://d/contact/?go=there&test=you", &[], &["test"])`
///   → `"http://d/contact/?go=there"`
pub fn modify(url: &str, to_add: &[(&str, &str)], to_remove: &[&str]) -> String {
    // Only a `#` after the `?` is a fragment; one before it stays in `base`.
    let (base, query, fragment) = match url.split_once('?') {
        Some((base, rest)) => match rest.split_once('#') {
            Some((query, fragment)) => (base, query, Some(fragment)),
            None => (base, rest, None),
        },
        None => (url, "", None),
    };
    let mut params = QueryParams::parse(query);

    for (key, value) in to_add {
        params.set(key, value);
    }
    for key in to_remove {
        params.remove(key);
    }

    let query = params.to_query_string();
    let mut out = String::with_capacity(url.len() + query.len());
    out.push_str(base);
    if !query.is_empty() {
        out.push('?');
        out.push_str(&query);
    }
    if let Some(fragment) = fragment {
        out.push('#');
        out.push_str(fragment);
    }
    out
}
