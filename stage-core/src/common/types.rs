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

//! Defines common internal type aliases and supporting structures used within `stage-core`.

use std::sync::Arc;

use dashmap::DashMap;
use futures::future::BoxFuture;

use crate::actor::ActorRecord;
use crate::message::{MessageContext, Payload, StageSender};
use crate::traits::ActorState;

/// The name an actor is registered under.
pub type ActorName = String;

/// Crate-internal: the registry, keyed by actor name.
pub(crate) type Registry = DashMap<ActorName, ActorRecord>;

/// Crate-internal: an actor's state with its concrete type erased.
pub(crate) type StateBox = Box<dyn ActorState>;

/// Crate-internal: a pinned, boxed, `Send` future resolving to `anyhow::Result<T>`.
pub(crate) type FutureBox<T> = BoxFuture<'static, anyhow::Result<T>>;

/// Crate-internal: a handler with its state type erased, as stored in an [`ActorRecord`].
pub(crate) type DispatchFn =
    dyn Fn(MessageContext, StateBox) -> FutureBox<ErasedReply> + Send + Sync + 'static;

/// Crate-internal: a [`Reply`](crate::common::Reply) with its state type erased.
pub(crate) struct ErasedReply {
    pub(crate) response: Payload,
    pub(crate) next_state: StateBox,
}

/// Crate-internal: what a single dispatch takes out of the registry before the
/// handler runs.
pub(crate) struct Invocation {
    pub(crate) incarnation: u64,
    pub(crate) state: StateBox,
    pub(crate) dispatch: Arc<DispatchFn>,
    pub(crate) outbox: StageSender,
}
