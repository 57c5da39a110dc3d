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

/// State for an actor that counts the messages it has handled.
#[stage_actor]
pub struct Tally {
    /// The number of messages handled so far.
    pub count: usize,
}

/// Counts every message and answers with the new count.
pub async fn tally(_context: MessageContext, state: Tally) -> anyhow::Result<Reply<Tally>> {
    let next = Tally {
        count: state.count + 1,
    };
    Ok(Reply::new(next.count, next))
}
