//! # autoexec - Markup-Driven Page and Behavior Dispatch
//!
//! `autoexec` runs initialization code selected by a document's root element
//! instead of by per-page bootstrap scripts. Give the root a unique identifier
//! and one class per reusable module, register a handler for each, and run a
//! single dispatch pass once the document is ready.
//!
//! ## Quick Start
//!
//! ```rust
//! use autoexec::{DispatchContext, IgnoreRule, Registry};
//!
//! let mut registry = Registry::new();
//! registry.register_behavior("common", || println!("runs on every page"));
//! registry.register_behavior("dashboard", || println!("dashboard widgets"));
//! registry.register_page("user-dashboard", || println!("this page only"));
//! registry.register_ignore(IgnoreRule::pattern(r"^widget-[0-9]+$").unwrap());
//!
//! // <body id="user-dashboard" class="dashboard widget-1">
//! let report = registry
//!     .run(&DispatchContext::from_markup("user-dashboard", "dashboard widget-1"))
//!     .unwrap();
//! assert_eq!(report.invoked().len(), 3);
//! ```
//!
//! ## Diagnostics
//!
//! With the `tracing` feature (on by default), `autoexec::set_debug(true)`
//! reports every registration and dispatch decision under the `autoexec`
//! target.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use autoexec_core::{
    // Errors
    AutoExecError,
    BoxError,
    COMMON_BEHAVIOR,
    // Report
    Decision,
    // Context
    DispatchContext,
    DispatchEntry,
    DispatchError,
    DispatchReport,
    Element,
    // Handler
    Handler,
    IgnoreRule,
    IntoOutcome,
    Namespace,
    RegistryError,
    RouteResult,
    Router,
    SharedHandler,
    StaticElement,
    shared,
};

pub use autoexec_std::{
    diagnostics::{debug_enabled, set_debug},
    registry::{HandlerTable, Registry},
    routing::Dispatcher,
};

#[cfg(feature = "inventory")]
pub use autoexec_std::registry::HandlerRegistration;

/// Testing utilities.
pub mod testing {
    pub use autoexec_std::testing::{CallLog, CountingHandler, FailingHandler, RecordingHandler};
}

/// Prelude module - common imports for autoexec.
///
/// # Usage
///
/// ```rust
/// use autoexec::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        BoxError, Decision, DispatchContext, DispatchError, Dispatcher, Element, Handler,
        IgnoreRule, Namespace, Registry, RegistryError, shared,
    };
}

#[cfg(feature = "macros")]
pub use autoexec_macros::{behavior, page};

#[cfg(feature = "inventory")]
pub use inventory;
