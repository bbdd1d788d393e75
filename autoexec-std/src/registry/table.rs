//! HashMap-backed handler table for one namespace.

use autoexec_core::{RouteResult, Router, SharedHandler};
use std::{collections::HashMap, fmt};

/// Name → handler map for a single namespace.
///
/// Inserting under an existing name replaces the previous handler.
#[derive(Clone, Default)]
pub struct HandlerTable {
    map: HashMap<String, SharedHandler>,
}

impl HandlerTable {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `handler` under `name`, returning the handler it displaced.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        handler: SharedHandler,
    ) -> Option<SharedHandler> {
        self.map.insert(name.into(), handler)
    }

    /// The handler registered under `name`.
    pub fn get(&self, name: &str) -> Option<SharedHandler> {
        self.map.get(name).cloned()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.map.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Router<SharedHandler> for HandlerTable {
    fn route(&self, name: &str) -> RouteResult<'_, SharedHandler> {
        self.map.get(name).into()
    }
}

impl fmt::Debug for HandlerTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autoexec_core::shared;
    use std::sync::Arc;

    #[test]
    fn test_basic_routing() {
        let mut table = HandlerTable::new();
        let common = shared(|| ());
        table.insert("common", common.clone());

        match table.route("common") {
            RouteResult::Matched(h) => assert!(Arc::ptr_eq(h, &common)),
            RouteResult::NotFound => panic!("expected a match"),
        }
        assert!(!table.route("unknown").is_matched());
        assert!(table.contains("common"));
    }

    #[test]
    fn test_insert_overwrites() {
        let mut table = HandlerTable::new();
        let first = shared(|| ());
        let second = shared(|| ());

        assert!(table.insert("key", first.clone()).is_none());
        let displaced = table.insert("key", second.clone()).unwrap();

        assert!(Arc::ptr_eq(&displaced, &first));
        assert!(Arc::ptr_eq(&table.get("key").unwrap(), &second));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_names_sorted_and_debug() {
        let mut table = HandlerTable::new();
        table.insert("users", shared(|| ()));
        table.insert("common", shared(|| ()));
        assert_eq!(table.names(), vec!["common", "users"]);
        assert_eq!(format!("{table:?}"), r#"{"common", "users"}"#);
    }
}
