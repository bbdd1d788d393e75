//! Ignore rules for behavior tokens.
//!
//! A rule suppresses a behavior token for the current pass, whether or not a
//! handler is registered under it. Rules never apply to the page identifier.

use crate::error::RegistryError;
use regex::Regex;
use std::{fmt, sync::Arc};

/// A predicate deciding whether a behavior token is excluded.
#[derive(Clone)]
pub enum IgnoreRule {
    /// Matches a token equal to the string.
    Exact(String),
    /// Matches a token the regular expression finds a match in.
    Pattern(Regex),
    /// Matches a token the closure accepts. The label is used in logs.
    Predicate {
        /// Display label for diagnostics.
        label: String,
        /// The predicate itself.
        test: Arc<dyn Fn(&str) -> bool + Send + Sync>,
    },
}

impl IgnoreRule {
    /// An exact-match rule.
    pub fn exact(value: impl Into<String>) -> Self {
        IgnoreRule::Exact(value.into())
    }

    /// Compile `pattern` into a pattern rule.
    pub fn pattern(pattern: &str) -> Result<Self, RegistryError> {
        Ok(IgnoreRule::Pattern(Regex::new(pattern)?))
    }

    /// A rule backed by an arbitrary predicate.
    pub fn predicate<F>(label: impl Into<String>, test: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        IgnoreRule::Predicate {
            label: label.into(),
            test: Arc::new(test),
        }
    }

    /// Whether this rule excludes `token`.
    pub fn matches(&self, token: &str) -> bool {
        match self {
            IgnoreRule::Exact(value) => value == token,
            IgnoreRule::Pattern(re) => re.is_match(token),
            IgnoreRule::Predicate { test, .. } => test(token),
        }
    }
}

impl fmt::Display for IgnoreRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IgnoreRule::Exact(value) => write!(f, "{value:?}"),
            IgnoreRule::Pattern(re) => write!(f, "/{}/", re.as_str()),
            IgnoreRule::Predicate { label, .. } => write!(f, "<{label}>"),
        }
    }
}

impl fmt::Debug for IgnoreRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IgnoreRule::Exact(value) => f.debug_tuple("Exact").field(value).finish(),
            IgnoreRule::Pattern(re) => f.debug_tuple("Pattern").field(&re.as_str()).finish(),
            IgnoreRule::Predicate { label, .. } => {
                f.debug_struct("Predicate").field("label", label).finish_non_exhaustive()
            }
        }
    }
}

impl From<&str> for IgnoreRule {
    fn from(value: &str) -> Self {
        IgnoreRule::Exact(value.to_string())
    }
}

impl From<String> for IgnoreRule {
    fn from(value: String) -> Self {
        IgnoreRule::Exact(value)
    }
}

impl From<Regex> for IgnoreRule {
    fn from(value: Regex) -> Self {
        IgnoreRule::Pattern(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_requires_equality() {
        let rule = IgnoreRule::from("users");
        assert!(rule.matches("users"));
        assert!(!rule.matches("users-list"));
        assert!(!rule.matches("Users"));
        assert!(!rule.matches(""));
    }

    #[test]
    fn test_pattern_uses_regex_semantics() {
        let rule = IgnoreRule::pattern(r"^widget-[0-9]+$").unwrap();
        assert!(rule.matches("widget-1"));
        assert!(rule.matches("widget-42"));
        assert!(!rule.matches("widget-a"));
        assert!(!rule.matches("my-widget-1x"));

        // unanchored patterns match anywhere, like RegExp.test
        let rule = IgnoreRule::pattern("tmp").unwrap();
        assert!(rule.matches("is-tmp-class"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = IgnoreRule::pattern("widget-[").unwrap_err();
        assert!(matches!(err, RegistryError::InvalidPattern(_)));
    }

    #[test]
    fn test_predicate_and_display() {
        let rule = IgnoreRule::predicate("js-prefixed", |t| t.starts_with("js-"));
        assert!(rule.matches("js-toggle"));
        assert!(!rule.matches("toggle"));
        assert_eq!(rule.to_string(), "<js-prefixed>");

        assert_eq!(IgnoreRule::exact("users").to_string(), "\"users\"");
        assert_eq!(IgnoreRule::pattern("^a$").unwrap().to_string(), "/^a$/");
    }
}
