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
//! Stage Core Library
//!
//! A minimal in-process actor model. A [`Stage`](prelude::Stage) is a registry of
//! named actors; each actor owns a piece of state and a single handler that turns
//! an incoming message into a response and the actor's next state. Actors talk to
//! each other only through [`StageSender`](prelude::StageSender) capabilities, which
//! invoke the target's handler directly and commit the resulting state when it
//! completes.

/// Common utilities and structures: the stage, replies, configuration.
pub(crate) mod common;

pub(crate) mod actor;
pub(crate) mod message;
/// Trait definitions used by the Stage crates.
pub(crate) mod traits;

/// Prelude module for convenient imports.
///
/// This module re-exports the stage, its send capability, the handler contract and
/// the configuration types, as well as the `async_trait` crate.
pub mod prelude {
    pub use async_trait;

    pub use crate::actor::Handler;
    pub use crate::common::{
        ActorName, BehaviorConfig, DefaultsConfig, LimitsConfig, PathsConfig, Reply, Stage,
        StageConfig, TracingConfig, CONFIG,
    };
    pub use crate::message::{MessageContext, Payload, StageError, StageSender};
    pub use crate::traits::{ActorState, StageMessage};
}
