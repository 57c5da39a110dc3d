//! Defines the actor side of a Stage: the [`Handler`] contract every actor satisfies
//! and the registry record that holds an actor's name, state, behaviour and send
//! capability.

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

pub use handler::Handler;
pub(crate) use actor_record::ActorRecord;

/// Contains the `Handler` trait and its blanket implementation for closures.
mod handler;

/// Contains the `ActorRecord` stored in the registry.
mod actor_record;
