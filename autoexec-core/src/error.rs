//! Error types for autoexec.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`AutoExecError`] - Top-level error type
//! - [`RegistryError`] - Errors raised while registering handlers or rules
//! - [`DispatchError`] - Errors that abort a dispatch pass
//!
//! A candidate with no registered handler is *not* an error. It is recorded
//! as [`Decision::NotRegistered`](crate::Decision::NotRegistered) in the
//! dispatch report.

use crate::namespace::Namespace;
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all autoexec operations.
#[derive(Error, Debug)]
pub enum AutoExecError {
    /// An error occurred while registering.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// An error occurred during dispatch.
    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),
}

/// Errors that can occur while populating the registry.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The namespace is neither `page` nor `behavior`.
    #[error("invalid namespace: {0:?} (expected \"page\" or \"behavior\")")]
    InvalidNamespace(String),

    /// An ignore pattern failed to compile.
    #[error("invalid ignore pattern")]
    InvalidPattern(#[from] regex::Error),
}

/// Errors that abort a dispatch pass.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// A registered handler failed. Candidates after it were not attempted.
    #[error("{phase} handler {name:?} failed")]
    Handler {
        /// Namespace of the failing handler.
        phase: Namespace,
        /// Name the handler was registered under.
        name: String,
        /// The error returned by the handler.
        #[source]
        source: BoxError,
    },
}

impl DispatchError {
    /// Name of the handler that failed.
    pub fn handler_name(&self) -> &str {
        match self {
            DispatchError::Handler { name, .. } => name,
        }
    }

    /// Namespace of the handler that failed.
    pub fn phase(&self) -> Namespace {
        match self {
            DispatchError::Handler { phase, .. } => *phase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_invalid_namespace_display() {
        let err = RegistryError::InvalidNamespace("widget".to_string());
        assert_eq!(
            err.to_string(),
            "invalid namespace: \"widget\" (expected \"page\" or \"behavior\")"
        );
    }

    #[test]
    fn test_handler_error_keeps_source() {
        let err = DispatchError::Handler {
            phase: Namespace::Behavior,
            name: "dashboard".to_string(),
            source: "boom".into(),
        };
        assert_eq!(err.to_string(), "behavior handler \"dashboard\" failed");
        assert_eq!(err.source().map(|s| s.to_string()), Some("boom".to_string()));
        assert_eq!(err.handler_name(), "dashboard");
        assert_eq!(err.phase(), Namespace::Behavior);

        let top: AutoExecError = err.into();
        assert!(matches!(top, AutoExecError::Dispatch(_)));
    }
}
