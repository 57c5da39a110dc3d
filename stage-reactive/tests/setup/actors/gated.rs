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
use std::sync::Arc;

use stage_reactive::prelude::*;
use tokio::sync::{Barrier, Notify};

use crate::setup::messages::StorageRequest;

/// A storage actor whose `Add` waits at a barrier before answering, so that a
/// test can hold several invocations in flight at once.
pub struct GatedAdder {
    pub barrier: Arc<Barrier>,
}

#[async_trait]
impl Handler<i64> for GatedAdder {
    async fn handle(&self, context: MessageContext, total: i64) -> anyhow::Result<Reply<i64>> {
        match context.message_as::<StorageRequest>().cloned() {
            Some(StorageRequest::Add(amount)) => {
                self.barrier.wait().await;
                Ok(Reply::new(true, total + amount))
            }
            _ => Ok(Reply::new(total, total)),
        }
    }
}

/// An actor that signals `entered` when a message arrives, then parks until
/// `release` is notified. Answers `"finished"` and adds one to its state.
pub struct Parked {
    pub entered: Arc<Notify>,
    pub release: Arc<Notify>,
}

impl Parked {
    pub fn new() -> Self {
        Parked {
            entered: Arc::new(Notify::new()),
            release: Arc::new(Notify::new()),
        }
    }

    pub fn handles(&self) -> (Arc<Notify>, Arc<Notify>) {
        (Arc::clone(&self.entered), Arc::clone(&self.release))
    }
}

#[async_trait]
impl Handler<i64> for Parked {
    async fn handle(&self, _context: MessageContext, total: i64) -> anyhow::Result<Reply<i64>> {
        self.entered.notify_one();
        self.release.notified().await;
        Ok(Reply::new("finished", total + 1))
    }
}
