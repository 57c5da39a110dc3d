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

//! Two actors: `Counter` turns named commands into deltas and forwards them to
//! `Storage`, which keeps a running total.
//!
//! Counter forwards with `tell`, so it does not wait for Storage. The runtime is
//! single-threaded and Storage never suspends, so each forwarded `add` finishes
//! before the next one starts, and the total comes out as 3.

use std::collections::HashMap;

use anyhow::anyhow;
use stage_reactive::prelude::*;

#[stage_message]
enum StorageRequest {
    Add(i64),
    Peek,
}

#[stage_actor(no_default)]
struct Counter {
    deltas: HashMap<String, i64>,
}

impl Default for Counter {
    fn default() -> Self {
        let deltas = [("INCREMENT", 1), ("DECREMENT", -1)]
            .into_iter()
            .map(|(name, delta)| (name.to_string(), delta))
            .collect();
        Counter { deltas }
    }
}

async fn counter(context: MessageContext, state: Counter) -> anyhow::Result<Reply<Counter>> {
    let delta = context
        .message_as::<&'static str>()
        .and_then(|command| state.deltas.get(*command))
        .copied()
        .unwrap_or(0);
    context.outbox().tell("Storage", StorageRequest::Add(delta));
    Ok(Reply::new(true, state))
}

async fn storage(context: MessageContext, total: i64) -> anyhow::Result<Reply<i64>> {
    Ok(match context.message_as::<StorageRequest>() {
        Some(StorageRequest::Add(amount)) => Reply::new(true, total + amount),
        Some(StorageRequest::Peek) => Reply::new(total, total),
        None => Reply::new(false, total),
    })
}

#[stage_main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = StageConfig::default();
    let _guard = init_tracing(&config)?;

    let stage = Stage::with_config(config);
    let (_, send) = stage
        .register("Counter", Counter::default(), counter)
        .ok_or_else(|| anyhow!("Counter is already registered"))?;
    stage
        .register("Storage", 0_i64, storage)
        .ok_or_else(|| anyhow!("Storage is already registered"))?;

    send.send("Counter", "INCREMENT").await?;
    send.send("Counter", "INCREMENT").await?;
    send.send("Counter", "INCREMENT").await?;
    stage.settle().await;

    let result = send.send_as::<i64>("Storage", StorageRequest::Peek).await?;
    println!("This should be 3 :: {}", result.unwrap_or_default());
    Ok(())
}
