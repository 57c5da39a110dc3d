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

use std::future::Future;

use async_trait::async_trait;

use crate::common::Reply;
use crate::message::MessageContext;
use crate::traits::ActorState;

/// The behaviour of an actor.
///
/// A handler receives the incoming [`MessageContext`] and a snapshot of the actor's
/// current state, and produces a [`Reply`]: the response for the caller and the
/// state to commit once the invocation completes. Returning an error aborts the
/// send; the error reaches the caller and the state is left as it was.
///
/// Any closure `Fn(MessageContext, S) -> impl Future<Output = anyhow::Result<Reply<S>>>`
/// is a handler.
#[async_trait]
pub trait Handler<S: ActorState>: Send + Sync + 'static {
    /// Handles one message.
    async fn handle(&self, context: MessageContext, state: S) -> anyhow::Result<Reply<S>>;
}

#[async_trait]
impl<S, F, Fut> Handler<S> for F
where
    S: ActorState,
    F: Fn(MessageContext, S) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<Reply<S>>> + Send + 'static,
{
    async fn handle(&self, context: MessageContext, state: S) -> anyhow::Result<Reply<S>> {
        (self)(context, state).await
    }
}
