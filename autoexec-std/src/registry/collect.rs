//! Link-time handler collection via `inventory`.
//!
//! Functions annotated with `#[page]` or `#[behavior]` submit a
//! [`HandlerRegistration`]; [`Registry::collect_registered`] copies them into
//! a registry. Collection order across crates is unspecified, so two
//! annotated functions with the same name in one namespace leave either one
//! registered.

use super::Registry;
use autoexec_core::{BoxError, Namespace};

/// A statically submitted handler.
pub struct HandlerRegistration {
    /// Target namespace.
    pub namespace: Namespace,
    /// Name to register under.
    pub name: &'static str,
    /// The handler.
    pub handler: fn() -> Result<(), BoxError>,
}

impl HandlerRegistration {
    /// Create a registration. Usable in `inventory::submit!`.
    pub const fn new(
        namespace: Namespace,
        name: &'static str,
        handler: fn() -> Result<(), BoxError>,
    ) -> Self {
        Self {
            namespace,
            name,
            handler,
        }
    }
}

inventory::collect!(HandlerRegistration);

impl Registry {
    /// Register every submitted [`HandlerRegistration`].
    pub fn collect_registered(&mut self) {
        for registration in inventory::iter::<HandlerRegistration> {
            self.set(registration.namespace, registration.name, registration.handler);
        }
    }

    /// A new registry holding every submitted [`HandlerRegistration`].
    pub fn from_registered() -> Self {
        let mut registry = Self::new();
        registry.collect_registered();
        registry
    }
}
