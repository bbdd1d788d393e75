//! Per-pass record of what the dispatcher decided for each candidate.

use crate::namespace::Namespace;

/// What happened to one candidate name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// A handler was found and invoked successfully.
    Run,
    /// An ignore rule matched; no lookup happened.
    Ignored,
    /// No handler is registered under the name.
    NotRegistered,
    /// The token was empty; no lookup happened.
    SkippedEmpty,
}

impl Decision {
    /// Lowercase label used in diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Decision::Run => "run",
            Decision::Ignored => "ignored",
            Decision::NotRegistered => "not registered",
            Decision::SkippedEmpty => "skipped",
        }
    }
}

/// One decision in a [`DispatchReport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchEntry {
    /// Which table the name was resolved against.
    pub phase: Namespace,
    /// The candidate name as it appeared in the context.
    pub name: String,
    /// The outcome.
    pub decision: Decision,
}

/// Ordered decisions of one successful dispatch pass.
///
/// Entries follow candidate order: `"common"`, then the behavior tokens in
/// markup order, then the page identifier (if non-empty).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchReport {
    entries: Vec<DispatchEntry>,
}

impl DispatchReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a decision.
    pub fn push(&mut self, phase: Namespace, name: impl Into<String>, decision: Decision) {
        self.entries.push(DispatchEntry {
            phase,
            name: name.into(),
            decision,
        });
    }

    /// All entries in order.
    pub fn entries(&self) -> &[DispatchEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries were recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(phase, name)` of every invoked handler, in invocation order.
    pub fn invoked(&self) -> Vec<(Namespace, &str)> {
        self.with_decision(Decision::Run)
    }

    /// Names excluded by an ignore rule.
    pub fn ignored(&self) -> Vec<&str> {
        self.with_decision(Decision::Ignored)
            .into_iter()
            .map(|(_, name)| name)
            .collect()
    }

    /// `(phase, name)` of every candidate without a handler.
    pub fn not_registered(&self) -> Vec<(Namespace, &str)> {
        self.with_decision(Decision::NotRegistered)
    }

    /// The first decision recorded for `name` in `phase`.
    pub fn decision_for(&self, phase: Namespace, name: &str) -> Option<Decision> {
        self.entries
            .iter()
            .find(|e| e.phase == phase && e.name == name)
            .map(|e| e.decision)
    }

    fn with_decision(&self, decision: Decision) -> Vec<(Namespace, &str)> {
        self.entries
            .iter()
            .filter(|e| e.decision == decision)
            .map(|e| (e.phase, e.name.as_str()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a DispatchReport {
    type Item = &'a DispatchEntry;
    type IntoIter = std::slice::Iter<'a, DispatchEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
