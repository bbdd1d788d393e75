//! # autoexec-std
//!
//! Standard implementations for autoexec.
//!
//! This crate provides:
//! - **Registry**: [`Registry`](registry::Registry) with its page and behavior tables and ignore rules
//! - **Dispatch**: [`Dispatcher`](routing::Dispatcher), the sequential pass over a context
//! - **Diagnostics**: the process-wide debug flag and `tracing` output
//! - **Testing**: handlers that record and fail on demand

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core types
pub use autoexec_core;

// Modules
pub mod diagnostics;
pub mod registry;
pub mod routing;
pub mod testing;

#[cfg(feature = "inventory")]
pub use inventory;
