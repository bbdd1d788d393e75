//! Sequential dispatcher over a [`Registry`].

use crate::{diagnostics, registry::Registry};
use autoexec_core::{
    COMMON_BEHAVIOR, Decision, DispatchContext, DispatchError, DispatchReport, Element, Namespace,
    RouteResult, Router,
};
use std::iter;

/// Runs the handlers a context selects, in candidate order.
///
/// The dispatcher holds no state of its own. Running it twice runs every
/// matching handler twice.
///
/// # Example
///
/// ```rust
/// use autoexec_std::{registry::Registry, routing::Dispatcher};
/// use autoexec_core::DispatchContext;
///
/// let mut registry = Registry::new();
/// registry.register_behavior("common", || ());
///
/// let report = Dispatcher::new(&registry)
///     .run(&DispatchContext::from_markup("", ""))
///     .unwrap();
/// assert_eq!(report.invoked().len(), 1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Dispatcher<'r> {
    registry: &'r Registry,
}

impl<'r> Dispatcher<'r> {
    /// Create a dispatcher reading from `registry`.
    pub fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    /// Run one pass.
    ///
    /// A failing handler aborts the pass: no later behavior and no page
    /// handler runs, and the error is returned. Panics are not caught.
    pub fn run(&self, context: &DispatchContext) -> Result<DispatchReport, DispatchError> {
        let _run = diagnostics::enter_run(self.registry);
        let mut report = DispatchReport::new();

        let candidates = iter::once(COMMON_BEHAVIOR)
            .chain(context.behavior_tokens.iter().map(String::as_str));

        for token in candidates {
            if token.is_empty() {
                report.push(Namespace::Behavior, token, Decision::SkippedEmpty);
                continue;
            }

            if let Some(rule) = self.registry.is_ignored(token) {
                diagnostics::ignored(token, rule);
                report.push(Namespace::Behavior, token, Decision::Ignored);
                continue;
            }

            self.invoke(Namespace::Behavior, token, &mut report)?;
        }

        // only one id, so no loop
        if !context.page_id.is_empty() {
            self.invoke(Namespace::Page, &context.page_id, &mut report)?;
        }

        Ok(report)
    }

    /// Run one pass driven by a root element.
    pub fn run_element<E: Element + ?Sized>(
        &self,
        element: &E,
    ) -> Result<DispatchReport, DispatchError> {
        self.run(&DispatchContext::from_element(element))
    }

    fn invoke(
        &self,
        phase: Namespace,
        name: &str,
        report: &mut DispatchReport,
    ) -> Result<(), DispatchError> {
        match self.registry.table(phase).route(name) {
            RouteResult::Matched(handler) => {
                diagnostics::decision(phase, name, Decision::Run);
                handler.call().map_err(|source| DispatchError::Handler {
                    phase,
                    name: name.to_string(),
                    source,
                })?;
                report.push(phase, name, Decision::Run);
            }
            RouteResult::NotFound => {
                diagnostics::decision(phase, name, Decision::NotRegistered);
                report.push(phase, name, Decision::NotRegistered);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::CallLog;
    use autoexec_core::IgnoreRule;

    #[test]
    fn test_common_runs_with_no_tokens() {
        let log = CallLog::new();
        let mut registry = Registry::new();
        registry.register_behavior("common", log.handler("common"));

        let report = Dispatcher::new(&registry)
            .run(&DispatchContext::default())
            .unwrap();

        assert_eq!(log.calls(), vec!["common"]);
        assert_eq!(report.len(), 1);
    }

    #[test]
    fn test_common_attempted_even_when_unregistered() {
        let registry = Registry::new();
        let report = Dispatcher::new(&registry)
            .run(&DispatchContext::default())
            .unwrap();

        assert_eq!(
            report.decision_for(Namespace::Behavior, "common"),
            Some(Decision::NotRegistered)
        );
    }

    #[test]
    fn test_empty_tokens_only_skip() {
        let log = CallLog::new();
        let mut registry = Registry::new();
        registry.register_behavior("", log.handler("empty"));
        registry.register_ignore(IgnoreRule::predicate("everything", |_| true));

        let report = Dispatcher::new(&registry)
            .run(&DispatchContext::from_markup("", "  "))
            .unwrap();

        assert!(log.is_empty());
        let skipped = report
            .entries()
            .iter()
            .filter(|e| e.decision == Decision::SkippedEmpty)
            .count();
        assert_eq!(skipped, 2);
        // "common" is the only non-empty candidate, and the catch-all rule hides it
        assert_eq!(report.ignored(), vec!["common"]);
    }

    #[test]
    fn test_ignore_rules_skip_page_phase() {
        let log = CallLog::new();
        let mut registry = Registry::new();
        registry.register_page("users", log.handler("page:users"));
        registry.register_ignore("users");

        Dispatcher::new(&registry)
            .run(&DispatchContext::new("users", ["users"]))
            .unwrap();

        assert_eq!(log.calls(), vec!["page:users"]);
    }

    #[test]
    fn test_failure_aborts_pass() {
        let log = CallLog::new();
        let mut registry = Registry::new();
        registry.register_behavior("common", log.handler("common"));
        registry.register_behavior("broken", log.failing("broken"));
        registry.register_behavior("after", log.handler("after"));
        registry.register_page("home", log.handler("home"));

        let err = Dispatcher::new(&registry)
            .run(&DispatchContext::new("home", ["broken", "after"]))
            .unwrap_err();

        assert_eq!(err.handler_name(), "broken");
        assert_eq!(err.phase(), Namespace::Behavior);
        assert_eq!(log.calls(), vec!["common", "broken"]);
    }
}
