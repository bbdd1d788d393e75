//! Debug diagnostics side channel.
//!
//! Every registration and every dispatch decision is reported here. Output is
//! gated twice: the `tracing` feature must be enabled at compile time, and
//! the process-wide debug flag must be set at runtime. Nothing in this module
//! influences what a dispatch pass does.
//!
//! Events use the target `autoexec`, so a subscriber filter such as
//! `autoexec=debug` selects them.

use crate::registry::Registry;
use autoexec_core::{Decision, IgnoreRule, Namespace};
use std::sync::atomic::{AtomicBool, Ordering};

static DEBUG: AtomicBool = AtomicBool::new(false);

/// Turn diagnostics on or off for the whole process. Off by default.
pub fn set_debug(enabled: bool) {
    DEBUG.store(enabled, Ordering::Relaxed);
}

/// Whether diagnostics are currently on.
pub fn debug_enabled() -> bool {
    DEBUG.load(Ordering::Relaxed)
}

/// Keeps the per-run span entered until dropped.
pub(crate) struct RunGuard {
    #[cfg(feature = "tracing")]
    _span: Option<tracing::span::EnteredSpan>,
}

pub(crate) fn enter_run(registry: &Registry) -> RunGuard {
    #[cfg(feature = "tracing")]
    {
        if !debug_enabled() {
            return RunGuard { _span: None };
        }
        let span = tracing::info_span!(target: "autoexec", "autoexec", phase = "running").entered();
        tracing::info!(
            target: "autoexec",
            pages = ?registry.table(Namespace::Page).names(),
            behaviors = ?registry.table(Namespace::Behavior).names(),
            ignore = ?registry.ignore_rules(),
            "registry"
        );
        RunGuard { _span: Some(span) }
    }
    #[cfg(not(feature = "tracing"))]
    {
        let _ = registry;
        RunGuard {}
    }
}

pub(crate) fn registered(namespace: Namespace, name: &str) {
    #[cfg(feature = "tracing")]
    {
        if debug_enabled() {
            tracing::debug!(target: "autoexec", %namespace, name, "(register)");
        }
    }
    #[cfg(not(feature = "tracing"))]
    {
        let _ = (namespace, name);
    }
}

pub(crate) fn ignore_registered(rule: &IgnoreRule) {
    #[cfg(feature = "tracing")]
    {
        if debug_enabled() {
            tracing::debug!(target: "autoexec", %rule, "ignore (register)");
        }
    }
    #[cfg(not(feature = "tracing"))]
    {
        let _ = rule;
    }
}

pub(crate) fn ignored(token: &str, rule: &IgnoreRule) {
    #[cfg(feature = "tracing")]
    {
        if debug_enabled() {
            tracing::warn!(target: "autoexec", behavior = token, %rule, "(ignored)");
        }
    }
    #[cfg(not(feature = "tracing"))]
    {
        let _ = (token, rule);
    }
}

pub(crate) fn decision(phase: Namespace, name: &str, decision: Decision) {
    #[cfg(feature = "tracing")]
    {
        if !debug_enabled() {
            return;
        }
        match decision {
            Decision::Run => {
                tracing::debug!(target: "autoexec", %phase, name, "({})", decision.as_str())
            }
            _ => tracing::warn!(target: "autoexec", %phase, name, "({})", decision.as_str()),
        }
    }
    #[cfg(not(feature = "tracing"))]
    {
        let _ = (phase, name, decision);
    }
}
