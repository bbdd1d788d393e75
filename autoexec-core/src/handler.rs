//! # Handler
//!
//! An initialization routine registered under a page or behavior name.
//!
//! Handlers take no arguments. Whatever they need (the document, shared
//! state, a logger) is captured by the closure or held by the implementing
//! struct. The dispatcher only cares whether the call succeeded.
//!
//! # Usage Patterns
//!
//! 1. **Plain closure**: `|| println!("ready")`
//! 2. **Fallible closure**: `|| -> Result<(), MyError> { ... }`
//! 3. **Struct implementation**: `impl Handler for MyWidget`

use crate::error::BoxError;
use std::{fmt, sync::Arc};

/// A shared, type-erased handler as stored in the registry.
///
/// Reads hand out clones of the `Arc`, so two reads of the same entry are
/// `Arc::ptr_eq`.
pub type SharedHandler = Arc<dyn Handler>;

/// A zero-argument initialization routine.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as an autoexec handler",
    label = "missing `Handler` implementation",
    note = "Use a closure `|| ...` returning `()` or `Result<(), E>`, or implement `Handler` directly."
)]
pub trait Handler: Send + Sync + 'static {
    /// Runs the handler.
    fn call(&self) -> Result<(), BoxError>;
}

impl fmt::Debug for dyn Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Handler")
    }
}

impl<F, R> Handler for F
where
    F: Fn() -> R + Send + Sync + 'static,
    R: IntoOutcome,
{
    fn call(&self) -> Result<(), BoxError> {
        (self)().into_outcome()
    }
}

/// Conversion from a handler's return value into success or failure.
///
/// # Default Implementations
///
/// - `()` → success
/// - `Result<T, E>` → delegates to `T`, or fails with `E`
/// - `Option<T>` → `None` is success
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid handler return type",
    label = "missing `IntoOutcome` implementation",
    note = "Handlers should return `()` or `Result<(), E>`."
)]
pub trait IntoOutcome {
    /// Convert the output into `Ok(())` or the handler's error.
    fn into_outcome(self) -> Result<(), BoxError>;
}

impl IntoOutcome for () {
    fn into_outcome(self) -> Result<(), BoxError> {
        Ok(())
    }
}

impl<T, E> IntoOutcome for Result<T, E>
where
    T: IntoOutcome,
    E: Into<BoxError>,
{
    fn into_outcome(self) -> Result<(), BoxError> {
        match self {
            Ok(t) => t.into_outcome(),
            Err(e) => Err(e.into()),
        }
    }
}

impl<T: IntoOutcome> IntoOutcome for Option<T> {
    fn into_outcome(self) -> Result<(), BoxError> {
        match self {
            Some(t) => t.into_outcome(),
            None => Ok(()),
        }
    }
}

/// Wrap a handler for storage in the registry.
pub fn shared<H: Handler>(handler: H) -> SharedHandler {
    Arc::new(handler)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_unit_closure_succeeds() {
        let hits = Arc::new(AtomicUsize::new(0));
        let h = {
            let hits = hits.clone();
            move || {
                hits.fetch_add(1, Ordering::SeqCst);
            }
        };
        assert!(Handler::call(&h).is_ok());
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_result_closure_propagates_error() {
        let h = || -> Result<(), std::io::Error> {
            Err(std::io::Error::other("missing #sidebar"))
        };
        let err = Handler::call(&h).unwrap_err();
        assert_eq!(err.to_string(), "missing #sidebar");
    }

    #[test]
    fn test_boxed_error_and_option() {
        let h = || -> Result<Option<()>, BoxError> { Ok(None) };
        assert!(Handler::call(&h).is_ok());

        let h = || -> Result<(), BoxError> { Err("nope".into()) };
        assert!(Handler::call(&h).is_err());
    }

    struct Widget;

    impl Handler for Widget {
        fn call(&self) -> Result<(), BoxError> {
            Ok(())
        }
    }

    #[test]
    fn test_struct_handler_is_shareable() {
        let a = shared(Widget);
        let b = a.clone();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(b.call().is_ok());
    }

    #[test]
    fn test_shared_handler_debug() {
        let h: Option<SharedHandler> = Some(shared(Widget));
        assert_eq!(format!("{h:?}"), "Some(Handler)");

        let missing: Result<Option<SharedHandler>, &str> = Err("bad namespace");
        assert_eq!(missing.unwrap_err(), "bad namespace");
    }
}
