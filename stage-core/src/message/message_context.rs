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

use derive_new::new;
use static_assertions::assert_impl_all;

use crate::message::{Payload, StageSender};
use crate::traits::StageMessage;

/// Everything a handler learns about the message it is processing.
///
/// Besides the message itself, the context carries the name of the sending actor and
/// the recipient's own [`StageSender`], through which the handler may message other
/// actors (itself and its caller included).
#[derive(new, Clone, Debug)]
#[new(visibility = "pub(crate)")]
pub struct MessageContext {
    message: Payload,
    sender: String,
    recipient: String,
    outbox: StageSender,
}

impl MessageContext {
    /// The message being delivered.
    pub fn message(&self) -> &Payload {
        &self.message
    }

    /// The message as a `T`, if it is one.
    pub fn message_as<T: 'static>(&self) -> Option<&T> {
        self.message.downcast_ref::<T>()
    }

    /// Consumes the context, keeping only the message.
    pub fn into_message(self) -> Payload {
        self.message
    }

    /// Name of the actor whose capability issued the send.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Name of the actor handling the message.
    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// The recipient's own send capability.
    pub fn outbox(&self) -> &StageSender {
        &self.outbox
    }

    /// Sends `message` to `target` on behalf of the recipient.
    pub async fn send(
        &self,
        target: &str,
        message: impl StageMessage,
    ) -> anyhow::Result<Option<Payload>> {
        self.outbox.send(target, message).await
    }
}

assert_impl_all!(MessageContext: Send, Sync);
