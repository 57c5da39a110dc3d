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

use proc_macro::TokenStream;

use quote::quote;
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::{parse_macro_input, Ident, ItemFn, Token};

/// Returns `true` for `current_thread`, `false` for no arguments, and an error for
/// anything else.
fn wants_current_thread(attr: TokenStream) -> syn::Result<bool> {
    let options = Punctuated::<Ident, Token![,]>::parse_terminated.parse(attr)?;
    let mut current_thread = false;
    for option in &options {
        if option == "current_thread" {
            current_thread = true;
        } else {
            return Err(syn::Error::new_spanned(
                option,
                "unknown stage_test option, expected `current_thread`",
            ));
        }
    }
    Ok(current_thread)
}

/// Runs an `async fn` test on a freshly built Tokio runtime.
///
/// The test runs inside an `info` span named after it, and any panic, including one
/// raised on a spawned task, is logged through `tracing` and then re-raised from the
/// test thread with its location.
///
/// By default a multi-threaded runtime is used; `#[stage_test(current_thread)]`
/// selects a single-threaded one.
#[proc_macro_attribute]
pub fn stage_test(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    let vis = &input.vis;
    let sig = &input.sig;
    let body = &input.block;
    let attrs = &input.attrs;
    let name = &sig.ident;
    let inputs = &sig.inputs;
    let output = &sig.output;

    if sig.asyncness.is_none() {
        return syn::Error::new_spanned(
            sig.fn_token,
            "the async keyword is missing from the function declaration",
        )
        .to_compile_error()
        .into();
    }

    let current_thread = match wants_current_thread(attr) {
        Ok(current_thread) => current_thread,
        Err(error) => return error.to_compile_error().into(),
    };

    let runtime_builder = if current_thread {
        quote!(::stage_test::__private::tokio::runtime::Builder::new_current_thread())
    } else {
        quote!(::stage_test::__private::tokio::runtime::Builder::new_multi_thread())
    };

    let async_name = syn::Ident::new(&format!("__{}_async", name), name.span());

    let output = quote! {
        #[test]
        #(#attrs)*
        #vis fn #name() {
            use std::sync::atomic::{AtomicBool, Ordering};
            use std::sync::Arc;
            use std::panic;
            use ::stage_test::__private::parking_lot::Mutex;

            #[derive(Default)]
            struct PanicInfo {
                occurred: AtomicBool,
                message: Mutex<Option<String>>,
                location: Mutex<Option<String>>,
            }

            let panic_info = Arc::new(PanicInfo::default());
            let panic_info_clone = Arc::clone(&panic_info);

            let orig_hook = panic::take_hook();
            panic::set_hook(Box::new(move |info| {
                let message = info
                    .payload()
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| info.payload().downcast_ref::<String>().cloned());
                panic_info_clone.occurred.store(true, Ordering::SeqCst);
                *panic_info_clone.message.lock() = message.clone();
                *panic_info_clone.location.lock() = info
                    .location()
                    .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()));

                let cleaned_message = message
                    .unwrap_or_else(|| "No error message".to_string())
                    .trim()
                    .replace('\n', " ");
                ::stage_test::__private::tracing::error!("Panic: {}", cleaned_message);
                orig_hook(info);
            }));

            let runtime = #runtime_builder
                .enable_all()
                .build()
                .expect("Failed to build test runtime");

            let result = runtime.block_on(async {
                let test_span = ::stage_test::__private::tracing::info_span!(
                    "stage_test",
                    name = stringify!(#name)
                );
                let _enter = test_span.enter();

                #async_name().await
            });

            if panic_info.occurred.load(Ordering::SeqCst) {
                let message = panic_info.message.lock().clone();
                let location = panic_info.location.lock().clone();
                let location_str = location.unwrap_or_else(|| "unknown location".to_string());
                let cleaned_message = message
                    .unwrap_or_else(|| "No error message".to_string())
                    .trim()
                    .replace('\n', " ");
                panic!("Panic at {}: {}", location_str, cleaned_message);
            }

            result.unwrap()
        }

        async fn #async_name(#inputs) #output #body
    };

    output.into()
}
