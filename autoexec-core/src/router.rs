//! Lookup abstraction for handler tables.
//!
//! A table maps a name to a handler. Dispatch only ever asks one question of
//! it, "what is registered under this exact name", so the trait is a single
//! lookup. Tables are never iterated to decide what runs.

/// Result of a table lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteResult<'a, V> {
    /// The name is registered.
    Matched(&'a V),
    /// No entry under the name.
    NotFound,
}

impl<'a, V> RouteResult<'a, V> {
    /// Returns true if the name was matched.
    pub fn is_matched(&self) -> bool {
        matches!(self, RouteResult::Matched(_))
    }

    /// Returns the matched value, if any.
    pub fn matched(self) -> Option<&'a V> {
        match self {
            RouteResult::Matched(v) => Some(v),
            RouteResult::NotFound => None,
        }
    }
}

impl<'a, V> From<Option<&'a V>> for RouteResult<'a, V> {
    fn from(value: Option<&'a V>) -> Self {
        match value {
            Some(v) => RouteResult::Matched(v),
            None => RouteResult::NotFound,
        }
    }
}

/// A name → value lookup.
pub trait Router<V>: Send + Sync {
    /// Look up a value by exact name.
    fn route(&self, name: &str) -> RouteResult<'_, V>;

    /// Check if a name is registered.
    fn contains(&self, name: &str) -> bool {
        self.route(name).is_matched()
    }
}
