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

use futures::future::{ready, Ready};

use crate::message::Payload;
use crate::traits::StageMessage;

/// What a handler produces: a response for the caller and the actor's next state.
#[derive(Clone, Debug)]
pub struct Reply<S> {
    /// Handed back to the caller of `send`.
    pub response: Payload,
    /// Committed as the actor's state once the invocation completes.
    pub next_state: S,
}

impl<S> Reply<S> {
    /// Creates a reply from any message and the next state.
    pub fn new(response: impl StageMessage, next_state: S) -> Self {
        Reply {
            response: Payload::new(response),
            next_state,
        }
    }

    /// Creates a reply from an existing payload, for handlers that pass a response through.
    pub fn with_payload(response: Payload, next_state: S) -> Self {
        Reply {
            response,
            next_state,
        }
    }

    /// Creates an immediately resolving handler result.
    ///
    /// Useful for handlers that have nothing to await:
    ///
    /// ```ignore
    /// stage.register("Counter", 0_u32, |_context: MessageContext, state: u32| {
    ///     Reply::ready(true, state + 1)
    /// });
    /// ```
    pub fn ready(response: impl StageMessage, next_state: S) -> Ready<anyhow::Result<Self>> {
        ready(Ok(Reply::new(response, next_state)))
    }
}
