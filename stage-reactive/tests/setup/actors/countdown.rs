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

use crate::setup::messages::{Countdown, Peek};

/// On `Countdown(n)` with `n > 0`, sends itself `Countdown(n - 1)` and waits for the
/// answer. Answers with the number of invocations in the chain and counts itself
/// in its state. `Peek` answers the state.
pub async fn countdown(context: MessageContext, handled: u32) -> anyhow::Result<Reply<u32>> {
    if context.message_as::<Peek>().is_some() {
        return Ok(Reply::new(handled, handled));
    }
    let Some(Countdown(remaining)) = context.message_as::<Countdown>().cloned() else {
        return Ok(Reply::new(0_u32, handled));
    };

    let mut chain = 1_u32;
    if remaining > 0 {
        let myself = context.recipient().to_string();
        let nested = context.send(&myself, Countdown(remaining - 1)).await?;
        chain += nested
            .and_then(|payload| payload.take::<u32>())
            .unwrap_or(0);
    }
    Ok(Reply::new(chain, handled + 1))
}
