//! Testing utilities for autoexec.
//!
//! This module provides handlers that make dispatch order and failure paths
//! easy to assert on.
//!
//! # Features
//!
//! - [`CallLog`]: A shared, ordered record of handler invocations
//! - [`RecordingHandler`]: A handler that appends its label to a [`CallLog`]
//! - [`FailingHandler`]: A handler that records itself, then fails
//! - [`CountingHandler`]: A handler that counts invocations

use autoexec_core::{BoxError, Handler};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Call Log
// ============================================================================

/// An ordered record of handler invocations, shared between clones.
///
/// # Example
///
/// ```rust
/// use autoexec_std::{registry::Registry, testing::CallLog};
/// use autoexec_core::DispatchContext;
///
/// let log = CallLog::new();
/// let mut registry = Registry::new();
/// registry.register_behavior("common", log.handler("common"));
/// registry.register_page("home", log.handler("home"));
///
/// registry.run(&DispatchContext::new("home", Vec::<String>::new())).unwrap();
/// assert_eq!(log.calls(), vec!["common", "home"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<String>>>,
}

impl CallLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a label.
    pub fn record(&self, label: impl Into<String>) {
        self.calls.lock().unwrap().push(label.into());
    }

    /// A handler recording `label` into this log.
    pub fn handler(&self, label: impl Into<String>) -> RecordingHandler {
        RecordingHandler {
            label: label.into(),
            log: self.clone(),
        }
    }

    /// A handler recording `label` into this log and then failing.
    pub fn failing(&self, label: impl Into<String>) -> FailingHandler {
        FailingHandler {
            label: label.into(),
            log: self.clone(),
        }
    }

    /// Get a copy of the recorded labels.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Get the number of recorded calls.
    pub fn len(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all recorded calls.
    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}

// ============================================================================
// Recording Handler
// ============================================================================

/// A handler that appends its label to a [`CallLog`].
#[derive(Debug, Clone)]
pub struct RecordingHandler {
    label: String,
    log: CallLog,
}

impl Handler for RecordingHandler {
    fn call(&self) -> Result<(), BoxError> {
        self.log.record(self.label.clone());
        Ok(())
    }
}

// ============================================================================
// Failing Handler
// ============================================================================

/// A handler that records its label, then returns an error.
#[derive(Debug, Clone)]
pub struct FailingHandler {
    label: String,
    log: CallLog,
}

impl Handler for FailingHandler {
    fn call(&self) -> Result<(), BoxError> {
        self.log.record(self.label.clone());
        Err(format!("{} failed", self.label).into())
    }
}

// ============================================================================
// Counting Handler
// ============================================================================

/// A handler that counts invocations.
#[derive(Debug, Clone, Default)]
pub struct CountingHandler {
    count: Arc<AtomicUsize>,
}

impl CountingHandler {
    /// Create a new counting handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the invocation count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl Handler for CountingHandler {
    fn call(&self) -> Result<(), BoxError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
