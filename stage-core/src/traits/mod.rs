//! Defines the core traits that establish the contracts of the Stage crates.
//!
//! *   [`StageMessage`]: required for every message and response payload. Ensures values
//!     are `Send`, `Sync`, `Debug`, `Clone`, and support downcasting via `Any`.
//! *   [`ActorState`]: required for every actor state type; the registry keeps state
//!     type-erased behind it.

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

pub use actor_state::ActorState;
pub use stage_message::StageMessage;

/// Defines the [`ActorState`] trait.
mod actor_state;
/// Defines the [`StageMessage`] trait.
mod stage_message;
