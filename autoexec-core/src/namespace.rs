//! The two disjoint handler namespaces.

use crate::error::RegistryError;
use std::{fmt, str::FromStr};

/// Which handler table a name belongs to.
///
/// Page names and behavior names never collide: `"dashboard"` may be both a
/// page and a behavior, each with its own handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Namespace {
    /// Handlers keyed by the root element's identifier. At most one runs per pass.
    Page,
    /// Handlers keyed by class-list tokens. Any number may run per pass.
    Behavior,
}

impl Namespace {
    /// The lowercase name used in logs and the string API.
    pub const fn as_str(self) -> &'static str {
        match self {
            Namespace::Page => "page",
            Namespace::Behavior => "behavior",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Namespace {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "page" => Ok(Namespace::Page),
            "behavior" => Ok(Namespace::Behavior),
            other => Err(RegistryError::InvalidNamespace(other.to_string())),
        }
    }
}

impl TryFrom<&str> for Namespace {
    type Error = RegistryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
