//! Named path parameters bound during a trie search.

use std::collections::HashMap;

/// Values bound to named parameters (`:name` segments) of a matched route.
///
/// `Router::dispatch` inserts the params into the request extensions before
/// the handler runs, so handlers read them with
/// `request.extensions().get::<RouteParams>()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    inner: HashMap<String, String>,
}

impl RouteParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value bound to `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner.get(name).map(String::as_str)
    }

    /// Bind `value` to `name`. An existing binding is overwritten.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.inner.insert(name.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for RouteParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}
