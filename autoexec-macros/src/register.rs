//! Code generation shared by `#[page]` and `#[behavior]`.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{
    Ident, ItemFn, LitStr, Token,
    parse::{Parse, ParseStream},
};

/// Which namespace the generated registration targets.
#[derive(Clone, Copy)]
pub(crate) enum Target {
    Page,
    Behavior,
}

impl Target {
    fn variant(self) -> Ident {
        match self {
            Target::Page => format_ident!("Page"),
            Target::Behavior => format_ident!("Behavior"),
        }
    }

    fn prefix(self) -> &'static str {
        match self {
            Target::Page => "page",
            Target::Behavior => "behavior",
        }
    }
}

/// Arguments: nothing, a bare string literal, or `name = "..."`.
pub(crate) struct RegisterArgs {
    pub name: Option<LitStr>,
}

impl Parse for RegisterArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.is_empty() {
            return Ok(RegisterArgs { name: None });
        }

        let name = if input.peek(LitStr) {
            input.parse::<LitStr>()?
        } else {
            let ident: Ident = input.parse()?;
            if ident != "name" {
                return Err(syn::Error::new(
                    ident.span(),
                    format!("unknown attribute: {}", ident),
                ));
            }
            input.parse::<Token![=]>()?;
            input.parse::<LitStr>()?
        };

        if input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
        }
        if !input.is_empty() {
            return Err(input.error("expected a single name"));
        }

        Ok(RegisterArgs { name: Some(name) })
    }
}

pub(crate) fn generate_registration(
    target: Target,
    args: RegisterArgs,
    input: ItemFn,
) -> syn::Result<TokenStream> {
    let sig = &input.sig;

    if let Some(asyncness) = &sig.asyncness {
        return Err(syn::Error::new_spanned(
            asyncness,
            "autoexec handlers run synchronously and cannot be async",
        ));
    }
    if !sig.inputs.is_empty() {
        return Err(syn::Error::new_spanned(
            &sig.inputs,
            "autoexec handlers take no arguments",
        ));
    }
    if !sig.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &sig.generics,
            "autoexec handlers cannot be generic",
        ));
    }

    let fn_name = &sig.ident;
    let name = args
        .name
        .unwrap_or_else(|| LitStr::new(&fn_name.to_string(), fn_name.span()));
    if name.value().is_empty() {
        return Err(syn::Error::new_spanned(&name, "handler name cannot be empty"));
    }

    let variant = target.variant();
    let wrapper = format_ident!("__autoexec_{}_{}", target.prefix(), fn_name);

    Ok(quote! {
        #input

        #[doc(hidden)]
        #[allow(non_snake_case)]
        fn #wrapper() -> ::core::result::Result<(), ::autoexec::BoxError> {
            ::autoexec::IntoOutcome::into_outcome(#fn_name())
        }

        ::autoexec::inventory::submit! {
            ::autoexec::HandlerRegistration::new(
                ::autoexec::Namespace::#variant,
                #name,
                #wrapper,
            )
        }
    })
}
