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

use std::sync::atomic::AtomicU64;

use tokio_util::task::TaskTracker;

use crate::common::{Registry, StageConfig};

/// Internal state structure for a [`Stage`](crate::common::Stage).
///
/// Owned through an `Arc` by the stage handle; send capabilities only ever hold a
/// `Weak` to it.
#[derive(Debug)]
pub(crate) struct StageInner {
    /// Registered actors, keyed by name.
    pub(crate) registry: Registry,

    /// Source of incarnation numbers; each registration takes the next one.
    pub(crate) incarnations: AtomicU64,

    /// Tracks fire-and-forget sends issued through this stage's capabilities.
    pub(crate) tracker: TaskTracker,

    /// Configuration the stage was created with.
    pub(crate) config: StageConfig,
}

impl StageInner {
    pub(crate) fn new(config: StageConfig) -> Self {
        Self {
            registry: Registry::with_capacity(config.limits.initial_capacity),
            incarnations: AtomicU64::new(0),
            tracker: TaskTracker::new(),
            config,
        }
    }
}
