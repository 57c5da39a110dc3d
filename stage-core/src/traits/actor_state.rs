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
use std::any::Any;
use std::fmt::Debug;

use dyn_clone::DynClone;

/// Marker trait for values an actor may hold as its state.
///
/// The registry stores state type-erased; dispatch clones a snapshot of it for each
/// handler invocation and downcasts it back to the handler's concrete type.
pub trait ActorState: DynClone + Any + Send + Sync + Debug {
    /// Converts the boxed state into a boxed `Any` for by-value downcasting.
    fn into_any_state(self: Box<Self>) -> Box<dyn Any + Send + Sync>;
}

impl<T> ActorState for T
where
    T: Any + Send + Sync + Debug + DynClone + 'static,
{
    fn into_any_state(self: Box<Self>) -> Box<dyn Any + Send + Sync> {
        self
    }
}

dyn_clone::clone_trait_object!(ActorState);
