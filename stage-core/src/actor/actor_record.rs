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

use std::fmt;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use tracing::trace;

use crate::actor::Handler;
use crate::common::{ActorName, DispatchFn, ErasedReply, FutureBox, Invocation, StateBox};
use crate::message::{MessageContext, StageError, StageSender};
use crate::traits::ActorState;

/// One registered actor: its name, current state, behaviour and send capability.
///
/// Only the dispatch routine in [`StageSender`] writes `state`, and only through
/// [`commit`](ActorRecord::commit).
pub(crate) struct ActorRecord {
    pub(crate) name: ActorName,
    pub(crate) incarnation: u64,
    state: StateBox,
    dispatch: Arc<DispatchFn>,
    outbox: StageSender,
}

impl ActorRecord {
    pub(crate) fn new<S, H>(
        name: ActorName,
        incarnation: u64,
        initial_state: S,
        handler: H,
        outbox: StageSender,
    ) -> Self
    where
        S: ActorState,
        H: Handler<S>,
    {
        let handler = Arc::new(handler);
        let dispatch: Arc<DispatchFn> = Arc::new(
            move |context: MessageContext, state: StateBox| -> FutureBox<ErasedReply> {
                let handler = Arc::clone(&handler);
                Box::pin(async move {
                    let state = state.into_any_state().downcast::<S>().map_err(|_| {
                        StageError::StateTypeMismatch {
                            actor: context.recipient().to_string(),
                            expected: std::any::type_name::<S>(),
                        }
                    })?;
                    let reply = handler.handle(context, *state).await?;
                    Ok(ErasedReply {
                        response: reply.response,
                        next_state: Box::new(reply.next_state),
                    })
                })
            },
        );

        ActorRecord {
            name,
            incarnation,
            state: Box::new(initial_state),
            dispatch,
            outbox,
        }
    }

    /// Captures what one handler invocation needs, so the registry entry can be
    /// released before the handler runs.
    pub(crate) fn invocation(&self) -> Invocation {
        Invocation {
            incarnation: self.incarnation,
            state: dyn_clone::clone_box(&*self.state),
            dispatch: Arc::clone(&self.dispatch),
            outbox: self.outbox.clone(),
        }
    }

    /// Stores `next_state` if it was produced by this incarnation of the actor.
    pub(crate) fn commit(&mut self, incarnation: u64, next_state: StateBox) -> bool {
        if incarnation != self.incarnation {
            trace!(
                actor = %self.name,
                current = self.incarnation,
                stale = incarnation,
                "Ignoring commit from a previous incarnation"
            );
            return false;
        }
        self.state = next_state;
        true
    }
}

impl Debug for ActorRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActorRecord")
            .field("name", &self.name)
            .field("incarnation", &self.incarnation)
            .field("state", &self.state)
            .finish()
    }
}
