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
#![forbid(missing_docs)]

//! # Stage Reactive
//!
//! An in-process actor model built on Tokio. A [`Stage`](prelude::Stage) is a
//! registry of named actors. Each actor owns a piece of state and a single handler
//! that turns a message into a response and the actor's next state.
//!
//! ## Key Concepts
//!
//! - **Stage**: one isolated namespace of actors; `register` adds an actor and
//!   returns its send capability, `shutdown` removes it.
//! - **Send capabilities (`StageSender`)**: bound to the name of the actor they were
//!   issued for; `send` invokes the target's handler directly and returns its
//!   response, or `None` if nothing is registered under that name.
//! - **Handlers**: closures or types implementing `Handler<S>`; they receive a
//!   `MessageContext` (message, sender, own capability) and the current state.
//! - **State commits**: a handler's next state is committed only after it
//!   completes. Sends that are not awaited one after another race, and the last
//!   one to finish wins.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stage_reactive::prelude::*;
//!
//! #[stage_main]
//! async fn main() -> anyhow::Result<()> {
//!     let stage = Stage::new();
//!     let (_, send) = stage
//!         .register("Counter", 0_u32, |_: MessageContext, count: u32| {
//!             Reply::ready(count + 1, count + 1)
//!         })
//!         .expect("Counter is not registered yet");
//!     let count = send.send_as::<u32>("Counter", "tick").await?;
//!     assert_eq!(count, Some(1));
//!     Ok(())
//! }
//! ```

/// Logging setup shared by applications built on the Stage crates.
pub(crate) mod common;

pub use common::init_tracing;

/// A prelude module for conveniently importing the most commonly used items.
///
/// ## Macros (from `stage-macro`)
/// *   [`stage_macro::stage_message`]: attribute for message types.
/// *   [`stage_macro::stage_actor`]: attribute for actor state types.
/// *   [`stage_macro::stage_main`]: attribute for the application entry point.
///
/// ## Core Types (from `stage-core`)
/// *   `Stage`, `StageSender`, `MessageContext`, `Payload`, `Reply`, `Handler`,
///     `StageError`, `StageConfig` and the message and state traits.
///
/// ## External Crates
/// *   [`async_trait::async_trait`](https://docs.rs/async-trait/latest/async_trait/attr.async_trait.html)
///     for implementing `Handler` on your own types.
/// *   [`tokio`], used by [`stage_macro::stage_main`].
pub mod prelude {
    pub use stage_macro::*;

    pub use ::async_trait::async_trait;
    pub use ::tokio;

    pub use stage_core::prelude::*;

    pub use crate::common::init_tracing;
}
