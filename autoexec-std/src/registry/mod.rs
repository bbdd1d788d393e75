//! # Registry
//!
//! Holds the page table, the behavior table and the ordered ignore rules.
//!
//! A registry is constructed explicitly, filled during a registration phase,
//! and then handed to a [`Dispatcher`](crate::routing::Dispatcher) by shared
//! reference. Dispatch never mutates it.
//!
//! # Example
//!
//! ```rust
//! use autoexec_std::registry::Registry;
//! use autoexec_core::{DispatchContext, IgnoreRule};
//!
//! let mut registry = Registry::new();
//! registry.register_behavior("common", || println!("every page"));
//! registry.register_page("user-dashboard", || println!("dashboard page"));
//! registry.register_ignore(IgnoreRule::pattern(r"^widget-[0-9]+$").unwrap());
//!
//! let report = registry
//!     .run(&DispatchContext::from_markup("user-dashboard", "dashboard widget-1"))
//!     .unwrap();
//! assert_eq!(report.invoked().len(), 2);
//! ```

mod table;

#[cfg(feature = "inventory")]
mod collect;

pub use table::HandlerTable;

#[cfg(feature = "inventory")]
pub use collect::HandlerRegistration;

use crate::{diagnostics, routing::Dispatcher};
use autoexec_core::{
    DispatchContext, DispatchError, DispatchReport, Element, Handler, IgnoreRule, Namespace,
    RegistryError, SharedHandler, shared,
};
use std::fmt;

/// Page and behavior handlers plus behavior ignore rules.
#[derive(Clone, Default)]
pub struct Registry {
    page: HandlerTable,
    behavior: HandlerTable,
    ignore: Vec<IgnoreRule>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The table backing `namespace`.
    pub fn table(&self, namespace: Namespace) -> &HandlerTable {
        match namespace {
            Namespace::Page => &self.page,
            Namespace::Behavior => &self.behavior,
        }
    }

    fn table_mut(&mut self, namespace: Namespace) -> &mut HandlerTable {
        match namespace {
            Namespace::Page => &mut self.page,
            Namespace::Behavior => &mut self.behavior,
        }
    }

    /// Store `handler` under `(namespace, id)`, replacing any previous entry.
    pub fn set<H: Handler>(&mut self, namespace: Namespace, id: impl Into<String>, handler: H) {
        self.set_shared(namespace, id, shared(handler));
    }

    /// Like [`set`](Self::set) for a handler that is already shared.
    pub fn set_shared(
        &mut self,
        namespace: Namespace,
        id: impl Into<String>,
        handler: SharedHandler,
    ) {
        let id = id.into();
        diagnostics::registered(namespace, &id);
        self.table_mut(namespace).insert(id, handler);
    }

    /// Register every `(id, handler)` pair in order, one at a time.
    pub fn set_bulk<I, K>(&mut self, namespace: Namespace, entries: I)
    where
        I: IntoIterator<Item = (K, SharedHandler)>,
        K: Into<String>,
    {
        for (id, handler) in entries {
            self.set_shared(namespace, id, handler);
        }
    }

    /// The handler under `(namespace, id)`, if any.
    pub fn get(&self, namespace: Namespace, id: &str) -> Option<SharedHandler> {
        self.table(namespace).get(id)
    }

    /// Register under a namespace given by name (`"page"` or `"behavior"`).
    pub fn register<H: Handler>(
        &mut self,
        namespace: &str,
        id: impl Into<String>,
        handler: H,
    ) -> Result<(), RegistryError> {
        let namespace: Namespace = namespace.parse()?;
        self.set(namespace, id, handler);
        Ok(())
    }

    /// Read under a namespace given by name (`"page"` or `"behavior"`).
    pub fn lookup(
        &self,
        namespace: &str,
        id: &str,
    ) -> Result<Option<SharedHandler>, RegistryError> {
        let namespace: Namespace = namespace.parse()?;
        Ok(self.get(namespace, id))
    }

    /// Register a page handler.
    pub fn register_page<H: Handler>(&mut self, id: impl Into<String>, handler: H) {
        self.set(Namespace::Page, id, handler);
    }

    /// Register several page handlers.
    pub fn register_pages<I, K>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, SharedHandler)>,
        K: Into<String>,
    {
        self.set_bulk(Namespace::Page, entries);
    }

    /// The page handler registered under `id`.
    pub fn page(&self, id: &str) -> Option<SharedHandler> {
        self.get(Namespace::Page, id)
    }

    /// Register a behavior handler.
    pub fn register_behavior<H: Handler>(&mut self, id: impl Into<String>, handler: H) {
        self.set(Namespace::Behavior, id, handler);
    }

    /// Register several behavior handlers.
    pub fn register_behaviors<I, K>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, SharedHandler)>,
        K: Into<String>,
    {
        self.set_bulk(Namespace::Behavior, entries);
    }

    /// The behavior handler registered under `id`.
    pub fn behavior(&self, id: &str) -> Option<SharedHandler> {
        self.get(Namespace::Behavior, id)
    }

    /// Append an ignore rule. Duplicates are kept.
    pub fn register_ignore(&mut self, rule: impl Into<IgnoreRule>) {
        let rule = rule.into();
        diagnostics::ignore_registered(&rule);
        self.ignore.push(rule);
    }

    /// Ignore rules in registration order.
    pub fn ignore_rules(&self) -> &[IgnoreRule] {
        &self.ignore
    }

    /// The first rule excluding `token`, if any.
    pub fn is_ignored(&self, token: &str) -> Option<&IgnoreRule> {
        self.ignore.iter().find(|rule| rule.matches(token))
    }

    /// Run one dispatch pass over this registry.
    pub fn run(&self, context: &DispatchContext) -> Result<DispatchReport, DispatchError> {
        Dispatcher::new(self).run(context)
    }

    /// Run one dispatch pass driven by a root element.
    pub fn run_element<E: Element + ?Sized>(
        &self,
        element: &E,
    ) -> Result<DispatchReport, DispatchError> {
        Dispatcher::new(self).run_element(element)
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("page", &self.page)
            .field("behavior", &self.behavior)
            .field("ignore", &self.ignore)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_set_then_get_returns_same_handler() {
        let mut registry = Registry::new();
        let h = shared(|| ());
        registry.set_shared(Namespace::Behavior, "dashboard", h.clone());

        let got = registry.get(Namespace::Behavior, "dashboard").unwrap();
        assert!(Arc::ptr_eq(&got, &h));
        assert!(registry.get(Namespace::Page, "dashboard").is_none());
    }

    #[test]
    fn test_last_write_wins() {
        let mut registry = Registry::new();
        let old = shared(|| ());
        let new = shared(|| ());
        registry.set_shared(Namespace::Page, "page-1", old.clone());
        registry.set_shared(Namespace::Page, "page-1", new.clone());

        let got = registry.page("page-1").unwrap();
        assert!(Arc::ptr_eq(&got, &new));
        assert!(!Arc::ptr_eq(&got, &old));
        assert_eq!(registry.table(Namespace::Page).len(), 1);
    }

    #[test]
    fn test_string_namespace() {
        let mut registry = Registry::new();
        registry.register("behavior", "users", || ()).unwrap();
        assert!(registry.lookup("behavior", "users").unwrap().is_some());
        assert!(registry.lookup("page", "users").unwrap().is_none());

        let err = registry.register("widget", "users", || ()).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidNamespace(ref ns) if ns == "widget"));
        assert!(registry.lookup("pages", "users").is_err());
    }

    #[test]
    fn test_ignore_rules_keep_order_and_duplicates() {
        let mut registry = Registry::new();
        registry.register_ignore("users");
        registry.register_ignore(IgnoreRule::pattern("^widget-[0-9]+$").unwrap());
        registry.register_ignore("users");

        assert_eq!(registry.ignore_rules().len(), 3);
        assert!(matches!(registry.is_ignored("users"), Some(IgnoreRule::Exact(_))));
        assert!(matches!(
            registry.is_ignored("widget-7"),
            Some(IgnoreRule::Pattern(_))
        ));
        assert!(registry.is_ignored("widget-a").is_none());
    }

    #[test]
    fn test_debug_lists_names() {
        let mut registry = Registry::new();
        registry.register_page("page-1", || ());
        registry.register_behavior("common", || ());
        let dbg = format!("{registry:?}");
        assert!(dbg.contains("\"page-1\""));
        assert!(dbg.contains("\"common\""));
    }
}
