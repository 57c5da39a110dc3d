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
#![allow(unused)]

use stage_reactive::prelude::*;

/// Requests understood by the storage actor.
#[stage_message]
pub enum StorageRequest {
    Add(i64),
    Peek,
    /// Makes the handler fail.
    Explode,
}

/// Asks the relay actor to send `content` to `target` and pass back the answer.
#[stage_message]
pub struct Relay {
    pub target: String,
    pub content: String,
}

/// Asks the countdown actor to message itself `n` more times.
#[stage_message]
pub struct Countdown(pub u32);

/// Reads an actor's state without changing it.
#[stage_message]
pub struct Peek;
