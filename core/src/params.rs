//! Request parameters and their canonical form.

use std::fmt::Debug;

/// ParameterSet is a single-valued mapping from parameter name to value.
///
/// Keys are unique. The set remembers insertion order so that the query
/// string it renders is stable, but the canonical form used for signing
/// is always sorted by key.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParameterSet {
    pairs: Vec<(String, String)>,
}

impl ParameterSet {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw (percent encoded) query string.
    ///
    /// Repeated keys collapse to their first value.
    pub fn from_query(query: &str) -> Self {
        form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    /// Set `key` to `value` and return the set, for chaining.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set `key` to `value`, replacing any previous value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.pairs.push((key, value)),
        }
    }

    /// Set `key` to `value` only if the key is absent.
    pub fn insert_if_absent(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        if !self.contains(&key) {
            self.pairs.push((key, value.into()));
        }
    }

    /// Set `key` to `value` unless `value` is empty.
    pub fn insert_non_empty(&mut self, key: impl Into<String>, value: impl AsRef<str>) {
        let value = value.as_ref();
        if !value.is_empty() {
            self.insert(key, value);
        }
    }

    /// Remove `key`, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let idx = self.pairs.iter().position(|(k, _)| k == key)?;
        Some(self.pairs.remove(idx).1)
    }

    /// Get the value of `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Check whether `key` is present.
    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Number of parameters.
    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over `(key, value)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Canonical form of every parameter.
    ///
    /// ```shell
    /// [(yxz, foo), (feg, bar), (abc, baz)] => "abcbazfegbaryxzfoo"
    /// ```
    pub fn canonical_string(&self) -> String {
        self.canonical_string_with_filter(|_| true)
    }

    /// Canonical form of the parameters whose key passes `filter`.
    ///
    /// Pairs are sorted by key, compared byte-wise, and concatenated as
    /// `key + value` with no separator and no escaping.
    pub fn canonical_string_with_filter(&self, filter: impl Fn(&str) -> bool) -> String {
        let mut pairs: Vec<&(String, String)> =
            self.pairs.iter().filter(|(k, _)| filter(k.as_str())).collect();
        // Keys are unique, stability does not matter.
        pairs.sort_unstable_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));

        let size = pairs.iter().map(|(k, v)| k.len() + v.len()).sum();
        let mut s = String::with_capacity(size);
        for (k, v) in pairs {
            s.push_str(k);
            s.push_str(v);
        }

        s
    }

    /// Render as an `application/x-www-form-urlencoded` query string.
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }
}

impl<K, V> FromIterator<(K, V)> for ParameterSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = ParameterSet::new();
        set.extend(iter);
        set
    }
}

impl<K, V> Extend<(K, V)> for ParameterSet
where
    K: Into<String>,
    V: Into<String>,
{
    /// Extend keeps the first value seen for a key, matching how a
    /// multi-valued query collapses into a single-valued set.
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert_if_absent(k, v);
        }
    }
}
