//! # autoexec-core
//!
//! Core types for autoexec, a markup-driven dispatch registry.
//!
//! This crate has minimal dependencies and holds the vocabulary shared by the
//! registry, the dispatcher and any host integration:
//!
//! - [`Namespace`]: the two disjoint handler tables, `page` and `behavior`
//! - [`Handler`]: a zero-argument initialization routine
//! - [`IgnoreRule`]: exact, pattern or predicate exclusion of behavior tokens
//! - [`DispatchContext`] / [`Element`]: what one pass reads from the document
//! - [`DispatchReport`]: what one pass decided for each candidate
//!
//! # Dispatch Model
//!
//! A document root carries an identifier and a class list. The identifier
//! selects at most one *page* handler; each class token selects a *behavior*
//! handler. A pass runs the behavior `"common"` first, then the class tokens
//! in markup order, then the page handler.
//!
//! # Error Types
//!
//! - [`AutoExecError`] - Top-level error type
//! - [`RegistryError`] - Invalid namespace or ignore pattern
//! - [`DispatchError`] - A handler failed and the pass was aborted

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod context;
mod error;
mod handler;
mod ignore;
mod namespace;
mod report;
mod router;

// Re-exports
pub use context::{DispatchContext, Element, StaticElement};
pub use error::{AutoExecError, BoxError, DispatchError, RegistryError};
pub use handler::{Handler, IntoOutcome, SharedHandler, shared};
pub use ignore::IgnoreRule;
pub use namespace::Namespace;
pub use report::{Decision, DispatchEntry, DispatchReport};
pub use router::{RouteResult, Router};

/// Behavior name attempted first on every pass.
pub const COMMON_BEHAVIOR: &str = "common";
