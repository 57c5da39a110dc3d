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
use stage_reactive::prelude::*;

use crate::setup::messages::Relay;

/// Forwards `Relay::content` to `Relay::target` and answers with the target's
/// response, unchanged. Its own state never changes.
pub async fn relay(context: MessageContext, state: ()) -> anyhow::Result<Reply<()>> {
    let Some(Relay { target, content }) = context.message_as::<Relay>().cloned() else {
        return Ok(Reply::new(false, state));
    };
    match context.send(&target, content).await? {
        Some(response) => Ok(Reply::with_payload(response, state)),
        None => Ok(Reply::new(false, state)),
    }
}

/// Answers `(sender, content)` for a `String` message.
pub async fn reporter(context: MessageContext, state: ()) -> anyhow::Result<Reply<()>> {
    let content = context.message_as::<String>().cloned().unwrap_or_default();
    Ok(Reply::new((context.sender().to_string(), content), state))
}
