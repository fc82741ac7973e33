use std::collections::HashMap;

use http::HeaderMap;

/// ParameterSet is an ordered list of `(name, value)` pairs carried by a request:
/// headers, query parameters or both.
///
/// Names are kept verbatim. Lookups by name are ASCII case-insensitive. Duplicated
/// names are kept as-is, nothing is merged or dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet {
    pairs: Vec<(String, String)>,
}

impl ParameterSet {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a parameter set from http headers.
    ///
    /// Header values are decoded as UTF-8. Values that are not valid UTF-8 can't
    /// take part in a signature and are skipped.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        headers
            .iter()
            .filter_map(|(k, v)| {
                let v = std::str::from_utf8(v.as_bytes()).ok()?;
                Some((k.as_str().to_string(), v.to_string()))
            })
            .collect()
    }

    /// Build a parameter set from an url query string like `a=b&sph-c=d`.
    ///
    /// Both names and values are form-urlencoded decoded. A leading `?` is ignored.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    /// Build a parameter set from a request parameter map where every name can
    /// carry several values.
    ///
    /// Only the first value of each name is used; names without values are skipped.
    pub fn from_multi_map<K, V>(map: &HashMap<K, Vec<V>>) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        map.iter()
            .filter_map(|(k, vs)| {
                let v = vs.first()?;
                Some((k.as_ref().to_string(), v.as_ref().to_string()))
            })
            .collect()
    }

    /// Push a new pair at the end.
    #[inline]
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((name.into(), value.into()));
    }

    /// Builder style [`ParameterSet::push`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(name, value);
        self
    }

    /// Get the first value whose name matches `name` case-insensitively.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over all pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of pairs.
    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if no pair is present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Collect pairs whose name starts with `prefix`, compared case-insensitively.
    pub fn to_vec_with_prefix(&self, prefix: &str) -> Vec<(&str, &str)> {
        self.iter()
            .filter(|(k, _)| {
                k.get(..prefix.len())
                    .is_some_and(|p| p.eq_ignore_ascii_case(prefix))
            })
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParameterSet {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for ParameterSet {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        self.pairs
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

impl IntoIterator for ParameterSet {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}
