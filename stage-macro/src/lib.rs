/*
 * Copyright (c) 2024. Govcraft
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */
#![forbid(unsafe_code)]

//! Stage Macro Library
//!
//! Procedural macros for the Stage actor crates.
//!
//! # Message Macro
//!
//! The [`stage_message`] macro prepares a type to travel between actors:
//!
//! ```ignore
//! #[stage_message]
//! pub struct Add {
//!     pub amount: i64,
//! }
//! ```
//!
//! # Actor Macro
//!
//! The [`stage_actor`] macro prepares a type to be held as actor state:
//!
//! ```ignore
//! #[stage_actor]
//! pub struct Storage {
//!     total: i64,
//! }
//! ```
//!
//! # Main Entry Point
//!
//! ```ignore
//! use stage_reactive::prelude::*;
//!
//! #[stage_main]
//! async fn main() {
//!     let stage = Stage::new();
//!     // ...
//! }
//! ```

use proc_macro::TokenStream;

use quote::quote;
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::{parse_macro_input, DeriveInput, Expr, ExprLit, Ident, ItemFn, Lit, MetaNameValue, Token};

fn has_derive(input: &DeriveInput, trait_name: &str) -> bool {
    input.attrs.iter().any(|attr| {
        if attr.path().is_ident("derive") {
            let mut found = false;
            let _ = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident(trait_name) {
                    found = true;
                }
                Ok(())
            });
            found
        } else {
            false
        }
    })
}

/// The traits in `wanted` that `input` does not already derive.
fn missing_derives(input: &DeriveInput, wanted: &[&str]) -> Vec<syn::Ident> {
    wanted
        .iter()
        .filter(|name| !has_derive(input, name))
        .map(|name| quote::format_ident!("{}", name))
        .collect()
}

/// Configuration options parsed from `#[stage_actor(...)]` attributes.
#[derive(Default)]
struct ActorConfig {
    /// Skip deriving Default (user will implement it manually).
    no_default: bool,
}

impl ActorConfig {
    /// Parse configuration from attribute tokens.
    fn parse(attr: TokenStream) -> syn::Result<Self> {
        let mut config = Self::default();

        let options = Punctuated::<Ident, Token![,]>::parse_terminated.parse(attr)?;
        for option in &options {
            if option == "no_default" {
                config.no_default = true;
            } else {
                return Err(syn::Error::new_spanned(
                    option,
                    "unknown stage_actor option, expected `no_default`",
                ));
            }
        }

        Ok(config)
    }
}

/// Runtime settings parsed from `#[stage_main(...)]` attributes.
#[derive(Default)]
struct MainConfig {
    current_thread: bool,
    worker_threads: Option<usize>,
}

impl MainConfig {
    /// Parse `flavor = "..."` and `worker_threads = N` from attribute tokens.
    fn parse(attr: TokenStream) -> syn::Result<Self> {
        let mut config = Self::default();

        let options = Punctuated::<MetaNameValue, Token![,]>::parse_terminated.parse(attr)?;
        for option in &options {
            let Expr::Lit(ExprLit { lit, .. }) = &option.value else {
                return Err(syn::Error::new_spanned(&option.value, "expected a literal"));
            };
            if option.path.is_ident("flavor") {
                let Lit::Str(flavor) = lit else {
                    return Err(syn::Error::new_spanned(lit, "flavor must be a string"));
                };
                config.current_thread = match flavor.value().as_str() {
                    "current_thread" => true,
                    "multi_thread" => false,
                    _ => {
                        return Err(syn::Error::new_spanned(
                            flavor,
                            "flavor must be \"current_thread\" or \"multi_thread\"",
                        ))
                    }
                };
            } else if option.path.is_ident("worker_threads") {
                let Lit::Int(threads) = lit else {
                    return Err(syn::Error::new_spanned(lit, "worker_threads must be an integer"));
                };
                config.worker_threads = Some(threads.base10_parse()?);
            } else {
                return Err(syn::Error::new_spanned(
                    &option.path,
                    "unknown stage_main option, expected `flavor` or `worker_threads`",
                ));
            }
        }

        Ok(config)
    }
}

/// Derives what a type needs to be sent between actors.
///
/// Expands to `#[derive(Clone, Debug)]` (only the traits not already present) and a
/// compile-time assertion that the type is `Send + Sync + 'static`, which together
/// make it a `StageMessage`.
#[proc_macro_attribute]
pub fn stage_message(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);

    let name = &input.ident;
    let generics = &input.generics;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let traits = missing_derives(&input, &["Clone", "Debug"]);
    let derives = if traits.is_empty() {
        quote!()
    } else {
        quote!(#[derive(#(#traits),*)])
    };
    let assert_ident = quote::format_ident!("_AssertStageMessage_{}", name);

    let expanded = quote! {
        #derives
        #input

        #[doc(hidden)]
        #[allow(dead_code, non_camel_case_types, non_snake_case, clippy::needless_lifetimes)]
        const _: () = {
            fn #assert_ident #impl_generics () #where_clause {
                fn assert_bounds<T: Send + Sync + 'static>() {}
                assert_bounds::<#name #ty_generics>();
            }
        };
    };

    TokenStream::from(expanded)
}

/// Derives what a type needs to be held as an actor's state.
///
/// Expands to `#[derive(Default, Clone, Debug)]` (only the traits not already
/// present) and a compile-time assertion that the type is `Send + Sync + 'static`.
/// Dispatch clones the state for every invocation, hence `Clone`.
///
/// # Options
///
/// `#[stage_actor(no_default)]` skips deriving `Default`, for state types whose
/// fields have no sensible default.
#[proc_macro_attribute]
pub fn stage_actor(attr: TokenStream, item: TokenStream) -> TokenStream {
    let config = match ActorConfig::parse(attr) {
        Ok(config) => config,
        Err(error) => return error.to_compile_error().into(),
    };

    let input = parse_macro_input!(item as DeriveInput);

    let name = &input.ident;
    let generics = &input.generics;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let wanted: &[&str] = if config.no_default {
        &["Clone", "Debug"]
    } else {
        &["Default", "Clone", "Debug"]
    };
    let traits = missing_derives(&input, wanted);
    let derives = if traits.is_empty() {
        quote!()
    } else {
        quote!(#[derive(#(#traits),*)])
    };
    let assert_ident = quote::format_ident!("_AssertStageActor_{}", name);

    let expanded = quote! {
        #derives
        #input

        #[doc(hidden)]
        #[allow(dead_code, non_camel_case_types, non_snake_case, clippy::needless_lifetimes)]
        const _: () = {
            fn #assert_ident #impl_generics () #where_clause {
                fn assert_bounds<T: Send + Sync + 'static>() {}
                assert_bounds::<#name #ty_generics>();
            }
        };
    };

    TokenStream::from(expanded)
}

/// Entry point macro for Stage applications.
///
/// Builds a Tokio runtime and blocks on the body of `async fn main`.
///
/// - `flavor`: `"multi_thread"` (default) or `"current_thread"`
/// - `worker_threads`: number of worker threads for the multi-threaded runtime
///
/// ```ignore
/// #[stage_main(flavor = "current_thread")]
/// async fn main() { }
/// ```
#[proc_macro_attribute]
pub fn stage_main(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);

    let attrs = &input.attrs;
    let vis = &input.vis;
    let sig = &input.sig;
    let body = &input.block;

    if sig.asyncness.is_none() {
        return syn::Error::new_spanned(
            sig.fn_token,
            "the async keyword is missing from the function declaration",
        )
        .to_compile_error()
        .into();
    }

    if sig.ident != "main" {
        return syn::Error::new_spanned(
            &sig.ident,
            "stage_main can only be applied to the main function",
        )
        .to_compile_error()
        .into();
    }

    let config = match MainConfig::parse(attr) {
        Ok(config) => config,
        Err(error) => return error.to_compile_error().into(),
    };

    let runtime_builder = if config.current_thread {
        quote! {
            ::stage_reactive::prelude::tokio::runtime::Builder::new_current_thread()
        }
    } else if let Some(threads) = config.worker_threads {
        quote! {
            ::stage_reactive::prelude::tokio::runtime::Builder::new_multi_thread()
                .worker_threads(#threads)
        }
    } else {
        quote! {
            ::stage_reactive::prelude::tokio::runtime::Builder::new_multi_thread()
        }
    };

    let fn_name = &sig.ident;
    let fn_inputs = &sig.inputs;
    let fn_output = &sig.output;

    let expanded = quote! {
        #(#attrs)*
        #vis fn #fn_name(#fn_inputs) #fn_output {
            #runtime_builder
                .enable_all()
                .build()
                .expect("Failed to build Stage runtime")
                .block_on(async #body)
        }
    };

    TokenStream::from(expanded)
}
