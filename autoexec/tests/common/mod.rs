#![allow(dead_code)]

use autoexec::{IgnoreRule, Registry, shared, testing::CallLog};

// ============================================================================
// Site Fixture
// ============================================================================

/// Pages registered by [`site_registry`].
pub const PAGES: [&str; 3] = ["user-dashboard", "page-1", "page-2"];

/// Behaviors registered by [`site_registry`].
pub const BEHAVIORS: [&str; 7] = [
    "common",
    "users",
    "dashboard",
    "widget-1",
    "widget-2",
    "widget-a",
    "widget-b",
];

/// A registry laid out like a small site: ignores `users` and numbered
/// widgets, and records every invocation as `page:<id>` or `behavior:<name>`.
pub fn site_registry(log: &CallLog) -> Registry {
    let mut registry = Registry::new();

    registry.register_ignore("users");
    registry.register_ignore(IgnoreRule::pattern(r"^widget-[0-9]+$").unwrap());

    registry.register_page("user-dashboard", log.handler("page:user-dashboard"));
    registry.register_pages([
        ("page-1", shared(log.handler("page:page-1"))),
        ("page-2", shared(log.handler("page:page-2"))),
    ]);

    registry.register_behavior("common", log.handler("behavior:common"));
    registry.register_behavior("users", log.handler("behavior:users"));
    registry.register_behavior("dashboard", log.handler("behavior:dashboard"));
    registry.register_behaviors(
        ["widget-1", "widget-2", "widget-a", "widget-b"]
            .into_iter()
            .map(|name| (name, shared(log.handler(format!("behavior:{name}"))))),
    );

    registry
}
