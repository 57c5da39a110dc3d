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
use std::sync::atomic::Ordering;
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use static_assertions::assert_impl_all;
use tracing::{debug, instrument, trace};

use crate::actor::{ActorRecord, Handler};
use crate::common::{ActorName, StageConfig, StageInner, CONFIG};
use crate::message::{StageSender, TELL_ORIGIN};
use crate::traits::ActorState;

/// A registry of named actors: one isolated namespace.
///
/// Actors are added with [`register`](Stage::register), which hands back the send
/// capability bound to the new actor's name, and removed with
/// [`shutdown`](Stage::shutdown). Two stages never share actors, even under
/// identical names.
///
/// `Stage` is a cheap handle; clones refer to the same registry. Dropping the last
/// clone discards every actor, after which all outstanding [`StageSender`]s report
/// their targets as absent.
#[derive(Clone)]
pub struct Stage(pub(crate) Arc<StageInner>);

impl Stage {
    /// Creates an empty stage configured from the XDG configuration file.
    pub fn new() -> Self {
        Self::with_config(CONFIG.clone())
    }

    /// Creates an empty stage with the given configuration.
    pub fn with_config(config: StageConfig) -> Self {
        trace!(stage = %config.defaults.stage_name, "Creating stage");
        Stage(Arc::new(StageInner::new(config)))
    }

    /// Registers a new actor under `name` with the given initial state and handler.
    ///
    /// Returns the registered name together with a [`StageSender`] bound to it, or
    /// `None` if an actor with that name already exists. A rejected registration
    /// leaves the existing actor untouched and never invokes `handler`.
    #[instrument(skip(self, initial_state, handler), fields(stage = %self.name()), level = "debug")]
    pub fn register<S, H>(
        &self,
        name: impl Into<ActorName> + Debug,
        initial_state: S,
        handler: H,
    ) -> Option<(ActorName, StageSender)>
    where
        S: ActorState,
        H: Handler<S>,
    {
        let name = name.into();
        match self.0.registry.entry(name.clone()) {
            Entry::Occupied(_) => {
                debug!(actor = %name, "Name already registered, rejecting");
                None
            }
            Entry::Vacant(slot) => {
                let incarnation = self.0.incarnations.fetch_add(1, Ordering::Relaxed);
                let outbox = StageSender::new(name.clone(), &self.0);
                slot.insert(ActorRecord::new(
                    name.clone(),
                    incarnation,
                    initial_state,
                    handler,
                    outbox.clone(),
                ));
                trace!(actor = %name, incarnation, "Registered");
                Some((name, outbox))
            }
        }
    }

    /// Removes the actor named `name`, if there is one.
    ///
    /// Later sends to `name` find nothing. An invocation already in flight still
    /// completes and returns its response, but its state is not committed.
    #[instrument(skip(self), fields(stage = %self.name()), level = "debug")]
    pub fn shutdown(&self, name: &str) {
        match self.0.registry.remove(name) {
            Some((_, record)) => {
                trace!(actor = %record.name, incarnation = record.incarnation, "Shut down")
            }
            None => trace!(actor = name, "Nothing registered under this name"),
        }
    }

    /// Removes every actor.
    #[instrument(skip(self), fields(stage = %self.name()), level = "debug")]
    pub fn shutdown_all(&self) {
        let count = self.0.registry.len();
        self.0.registry.clear();
        trace!(count, "Shut down all actors");
    }

    /// Waits until every [`tell`](StageSender::tell) issued through this stage's
    /// capabilities has finished.
    ///
    /// A handler running inside one of those tells cannot wait for its own task, so
    /// calling `settle` from there returns immediately without waiting for anything.
    /// Sends made through plain [`send`](StageSender::send) are not tracked.
    pub async fn settle(&self) {
        let own_tell = TELL_ORIGIN
            .try_with(|origin| std::ptr::eq(origin.as_ptr(), Arc::as_ptr(&self.0)))
            .unwrap_or(false);
        if own_tell {
            debug!("settle called from inside a tell on this stage, not waiting");
            return;
        }
        self.0.tracker.close();
        self.0.tracker.wait().await;
        self.0.tracker.reopen();
    }

    /// Returns `true` if an actor is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.0.registry.contains_key(name)
    }

    /// The number of registered actors.
    pub fn actor_count(&self) -> usize {
        self.0.registry.len()
    }

    /// Names of all registered actors, in no particular order.
    pub fn names(&self) -> Vec<ActorName> {
        self.0
            .registry
            .iter()
            .map(|item| item.key().clone())
            .collect()
    }

    /// The stage's name, from its configuration.
    pub fn name(&self) -> &str {
        &self.0.config.defaults.stage_name
    }

    /// The configuration the stage was created with.
    pub fn config(&self) -> &StageConfig {
        &self.0.config
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for Stage {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stage")
            .field("name", &self.name())
            .field("actors", &self.actor_count())
            .finish()
    }
}

assert_impl_all!(Stage: Send, Sync, Clone);
