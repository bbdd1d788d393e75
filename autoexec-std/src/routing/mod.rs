//! # Dispatch
//!
//! Resolves one [`DispatchContext`](autoexec_core::DispatchContext) against a
//! [`Registry`](crate::registry::Registry) and invokes the matching handlers.
//!
//! Candidate order is fixed by the context, never by the registry:
//!
//! 1. the behavior `"common"`
//! 2. each behavior token in markup order
//! 3. the page identifier, if non-empty

pub mod dispatch;

pub use dispatch::Dispatcher;
