//! Implementation of the `#[curried]` and `#[curry_n(n)]` attributes.
//!
//! Both attributes replace a `fn` item with a zero-argument function of the
//! same name that returns a `currying::Curried` wrapper around the original
//! body. The body keeps its name as an item nested in the wrapper, so
//! recursive calls inside it still reach the uncurried function.
//!
//! # Generated Code Structure
//!
//! For
//!
//! ```text
//! #[curried]
//! fn add(x: i64, y: i64, #[default(0)] z: i64) -> i64 { x + y + z }
//! ```
//!
//! the macro generates:
//!
//! ```text
//! fn add() -> ::currying::Curried<
//!     ::currying::Function<i64, impl Fn(BoundArguments<i64>) -> Result<i64, BindError>>,
//!     i64,
//! > {
//!     fn add(x: i64, y: i64, z: i64) -> i64 { x + y + z }
//!     let __currying_function = ::currying::Function::new(
//!         ::currying::Signature::new().required("x").required("y").optional("z", 0),
//!         |__currying_bound: ::currying::BoundArguments<i64>| -> Result<i64, BindError> {
//!             let ([__currying_argument_0, __currying_argument_1, __currying_argument_2], _) =
//!                 __currying_bound.split::<3>()?;
//!             Ok(add(__currying_argument_0, __currying_argument_1, __currying_argument_2))
//!         },
//!     );
//!     let __currying_arity = ::currying::Function::arity(&__currying_function);
//!     ::currying::Curried::new(__currying_arity, __currying_function)
//! }
//! ```
//!
//! `#[curry_n(n)]` differs only in the arity: `::currying::Arity::Finite(n)`.
//! A `#[keywords]` parameter switches the binding to `split_all`, and the
//! collected map is converted into the declared `HashMap` type.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Ident, ItemFn, LitInt, ReturnType};

use crate::parameters::{CurriedSignature, ParameterKind, read_signature};

pub enum Threshold {
    Inferred,
    Explicit(usize),
}

pub fn curried_impl(attribute: TokenStream, item: TokenStream) -> TokenStream {
    let attribute: TokenStream2 = attribute.into();
    let expanded = if attribute.is_empty() {
        syn::parse2::<ItemFn>(item.into())
            .and_then(|function| generate_curried_function(&Threshold::Inferred, function))
    } else {
        Err(syn::Error::new_spanned(
            attribute,
            "#[curried] takes no arguments; use #[curry_n(n)] for an explicit threshold",
        ))
    };

    TokenStream::from(expanded.unwrap_or_else(syn::Error::into_compile_error))
}

pub fn curry_n_impl(attribute: TokenStream, item: TokenStream) -> TokenStream {
    let expanded = parse_threshold(attribute.into()).and_then(|threshold| {
        let function = syn::parse2::<ItemFn>(item.into())?;
        generate_curried_function(&Threshold::Explicit(threshold), function)
    });

    TokenStream::from(expanded.unwrap_or_else(syn::Error::into_compile_error))
}

pub fn parse_threshold(tokens: TokenStream2) -> syn::Result<usize> {
    let literal: LitInt = syn::parse2(tokens).map_err(|error| {
        syn::Error::new(
            error.span(),
            "#[curry_n] expects an integer literal threshold, e.g. #[curry_n(2)]",
        )
    })?;
    literal.base10_parse::<usize>()
}

pub fn generate_curried_function(
    threshold: &Threshold,
    function: ItemFn,
) -> syn::Result<TokenStream2> {
    let signature = read_signature(&function.sig)?;

    let ItemFn {
        attrs,
        vis: visibility,
        sig,
        block,
    } = function;
    let name = &sig.ident;
    let output = match &sig.output {
        ReturnType::Default => quote! { () },
        ReturnType::Type(_, output) => quote! { #output },
    };
    let value_type = &signature.value_type;

    let declarations = signature
        .parameters
        .iter()
        .map(|parameter| &parameter.declaration);
    let signature_builder = generate_signature_builder(&signature);
    let binding_closure = generate_binding_closure(&signature, name, &output);

    let arity = match threshold {
        Threshold::Inferred => quote! {
            ::currying::Function::arity(&__currying_function)
        },
        Threshold::Explicit(count) => quote! {
            ::currying::Arity::Finite(#count)
        },
    };

    Ok(quote! {
        #(#attrs)*
        #visibility fn #name() -> ::currying::Curried<
            ::currying::Function<
                #value_type,
                impl ::core::ops::Fn(::currying::BoundArguments<#value_type>)
                    -> ::core::result::Result<#output, ::currying::BindError>,
            >,
            #value_type,
        > {
            fn #name(#(#declarations),*) -> #output #block

            let __currying_function = ::currying::Function::new(
                #signature_builder,
                #binding_closure,
            );
            let __currying_arity = #arity;
            ::currying::Curried::new(__currying_arity, __currying_function)
        }
    })
}

fn generate_signature_builder(signature: &CurriedSignature) -> TokenStream2 {
    let calls = signature.parameters.iter().map(|parameter| {
        let name = &parameter.name;
        match &parameter.kind {
            ParameterKind::Required => quote! { .required(#name) },
            ParameterKind::Defaulted(default) => quote! { .optional(#name, #default) },
            ParameterKind::Variadic => quote! { .variadic(#name) },
            ParameterKind::Keywords => quote! { .keywords(#name) },
        }
    });

    quote! { ::currying::Signature::new() #(#calls)* }
}

fn generate_binding_closure(
    signature: &CurriedSignature,
    body: &Ident,
    output: &TokenStream2,
) -> TokenStream2 {
    let value_type = &signature.value_type;
    let fixed_count = signature.fixed().count();
    let argument_identifiers: Vec<_> = (0..fixed_count)
        .map(|index| format_ident!("__currying_argument_{}", index))
        .collect();

    let (rest_pattern, rest_argument) = if signature.is_variadic() {
        (quote! { __currying_rest }, Some(quote! { __currying_rest }))
    } else {
        (quote! { _ }, None)
    };
    let keywords_argument = signature.accepts_keywords().then(|| {
        quote! {
            ::core::iter::Iterator::collect(
                ::core::iter::IntoIterator::into_iter(__currying_extra)
            )
        }
    });
    let call_arguments = argument_identifiers
        .iter()
        .map(|identifier| quote! { #identifier })
        .chain(rest_argument)
        .chain(keywords_argument);

    let binding = if signature.accepts_keywords() {
        quote! {
            let ([#(#argument_identifiers),*], #rest_pattern, __currying_extra) =
                __currying_bound.split_all::<#fixed_count>()?;
        }
    } else {
        quote! {
            let ([#(#argument_identifiers),*], #rest_pattern) =
                __currying_bound.split::<#fixed_count>()?;
        }
    };

    quote! {
        |__currying_bound: ::currying::BoundArguments<#value_type>|
            -> ::core::result::Result<#output, ::currying::BindError> {
            #binding
            ::core::result::Result::Ok(#body(#(#call_arguments),*))
        }
    }
}
