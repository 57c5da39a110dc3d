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
use anyhow::anyhow;
use stage_reactive::prelude::*;

use crate::setup::messages::StorageRequest;

/// Keeps a running total: `Add(k)` answers `true` and adds `k`, `Peek` answers the
/// total, `Explode` fails, anything else answers `false`.
pub async fn storage(context: MessageContext, total: i64) -> anyhow::Result<Reply<i64>> {
    match context.message_as::<StorageRequest>() {
        Some(StorageRequest::Add(amount)) => Ok(Reply::new(true, total + amount)),
        Some(StorageRequest::Peek) => Ok(Reply::new(total, total)),
        Some(StorageRequest::Explode) => Err(anyhow!("storage exploded at {total}")),
        None => Ok(Reply::new(false, total)),
    }
}
