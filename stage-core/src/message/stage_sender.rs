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
use std::sync::{Arc, Weak};

use static_assertions::assert_impl_all;
use tokio::task::JoinHandle;
use tokio_util::task::TaskTracker;
use tracing::{debug, instrument, trace};

use crate::common::{ActorName, StageInner};
use crate::message::{MessageContext, Payload, StageError};
use crate::traits::StageMessage;

tokio::task_local! {
    /// The stage whose tracker spawned the current `tell` task.
    pub(crate) static TELL_ORIGIN: Weak<StageInner>;
}

/// A send capability: the only way to deliver messages to actors on a
/// [`Stage`](crate::common::Stage).
///
/// Every `StageSender` is bound to the name of the actor it was issued for. Messages
/// dispatched through it reach their target with that name as the sender of record.
/// The sender holds a weak reference to its stage, so it never keeps the registry
/// alive; once the stage is dropped every target is reported as absent.
#[derive(Clone)]
pub struct StageSender {
    name: ActorName,
    stage: Weak<StageInner>,
    tracker: TaskTracker,
}

impl StageSender {
    pub(crate) fn new(name: ActorName, stage: &Arc<StageInner>) -> Self {
        StageSender {
            name,
            stage: Arc::downgrade(stage),
            tracker: stage.tracker.clone(),
        }
    }

    /// The name this capability sends as.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Delivers `message` to `target` and waits for its handler to finish.
    ///
    /// Returns `Ok(None)` without invoking anything when no actor named `target`
    /// is registered. Otherwise the target's handler runs against a snapshot of the
    /// target's current state; when it completes, the returned next state is committed
    /// and the response handed back as `Ok(Some(response))`. A handler error is
    /// returned unchanged and leaves the target's state untouched.
    ///
    /// Sends to the same actor that are not awaited one after the other each see the
    /// state as it was when they were dispatched, and the last one to finish wins.
    pub async fn send(
        &self,
        target: &str,
        message: impl StageMessage,
    ) -> anyhow::Result<Option<Payload>> {
        self.forward(target, Payload::new(message)).await
    }

    /// Like [`send`](Self::send), for a message that is already a [`Payload`].
    #[instrument(skip(self, message), fields(sender = %self.name), level = "trace")]
    pub async fn forward(
        &self,
        target: &str,
        message: Payload,
    ) -> anyhow::Result<Option<Payload>> {
        let invocation = {
            let Some(stage) = self.stage.upgrade() else {
                debug!(target_actor = target, "Stage is gone, treating target as absent");
                return Ok(None);
            };
            let Some(record) = stage.registry.get(target) else {
                debug!(target_actor = target, "No actor registered under this name");
                return Ok(None);
            };
            let invocation = record.invocation();
            invocation
        };

        trace!(
            target_actor = target,
            message_type = message.type_name(),
            incarnation = invocation.incarnation,
            "Dispatching"
        );
        let context = MessageContext::new(
            message,
            self.name.clone(),
            target.to_string(),
            invocation.outbox,
        );
        let reply = match (invocation.dispatch)(context, invocation.state).await {
            Ok(reply) => reply,
            Err(error) => {
                debug!(target_actor = target, %error, "Handler failed, state left unchanged");
                return Err(error);
            }
        };

        let committed = match self.stage.upgrade() {
            Some(stage) => {
                let committed = match stage.registry.get_mut(target) {
                    Some(mut record) => record.commit(invocation.incarnation, reply.next_state),
                    None => false,
                };
                committed
            }
            None => false,
        };
        if !committed {
            trace!(
                target_actor = target,
                incarnation = invocation.incarnation,
                "Actor was shut down mid-invocation, dropping state commit"
            );
        }

        Ok(Some(reply.response))
    }

    /// Like [`send`](Self::send), downcasting the response to `R`.
    ///
    /// # Errors
    ///
    /// Returns [`StageError::UnexpectedResponse`] if the handler answered with
    /// anything other than an `R`, as well as any error the handler raised.
    pub async fn send_as<R: StageMessage>(
        &self,
        target: &str,
        message: impl StageMessage,
    ) -> anyhow::Result<Option<R>> {
        let Some(response) = self.send(target, message).await? else {
            return Ok(None);
        };
        let found = response.type_name();
        match response.take::<R>() {
            Some(value) => Ok(Some(value)),
            None => Err(StageError::UnexpectedResponse {
                target: target.to_string(),
                expected: std::any::type_name::<R>(),
                found,
            }
            .into()),
        }
    }

    /// Sends without waiting: the dispatch runs as its own task.
    ///
    /// The returned handle resolves to whatever [`send`](Self::send) would have
    /// returned. [`Stage::settle`](crate::common::Stage::settle) waits for every
    /// outstanding `tell`, except when called from a handler running inside one of
    /// them, where it returns at once. Must be called from within a Tokio runtime.
    pub fn tell(
        &self,
        target: impl Into<String>,
        message: impl StageMessage,
    ) -> JoinHandle<anyhow::Result<Option<Payload>>> {
        let sender = self.clone();
        let target = target.into();
        let origin = self.stage.clone();
        self.tracker.spawn(TELL_ORIGIN.scope(origin, async move {
            sender.send(&target, message).await
        }))
    }
}

impl Debug for StageSender {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("StageSender")
            .field("name", &self.name)
            .field("stage_alive", &(self.stage.strong_count() > 0))
            .finish()
    }
}

assert_impl_all!(StageSender: Send, Sync, Clone);
