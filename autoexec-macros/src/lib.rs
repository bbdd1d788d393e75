//! Attribute macros for link-time handler registration.
//!
//! `#[page]` and `#[behavior]` leave the annotated function in place and
//! submit it to the `inventory` collection that
//! `Registry::collect_registered` reads.
//!
//! ```rust,ignore
//! #[autoexec::behavior("dashboard")]
//! fn dashboard() {
//!     // ...
//! }
//!
//! #[autoexec::page("user-dashboard")]
//! fn user_dashboard() -> Result<(), MyError> {
//!     // ...
//! }
//!
//! let registry = autoexec::Registry::from_registered();
//! ```

use proc_macro::TokenStream;
use syn::{ItemFn, parse_macro_input};

mod register;

use register::{RegisterArgs, Target, generate_registration};

/// Register a function as the page handler for an identifier.
///
/// The identifier defaults to the function name.
#[proc_macro_attribute]
pub fn page(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as RegisterArgs);
    let input = parse_macro_input!(item as ItemFn);
    generate_registration(Target::Page, args, input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Register a function as the behavior handler for a class token.
///
/// The token defaults to the function name.
#[proc_macro_attribute]
pub fn behavior(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as RegisterArgs);
    let input = parse_macro_input!(item as ItemFn);
    generate_registration(Target::Behavior, args, input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
