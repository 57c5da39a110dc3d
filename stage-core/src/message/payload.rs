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

use crate::traits::StageMessage;

/// A type-erased message or response travelling through a Stage.
///
/// Payloads are produced by [`StageSender::send`](crate::message::StageSender::send)
/// from any [`StageMessage`] and handed back to callers as handler responses. Use
/// [`downcast_ref`](Payload::downcast_ref) or [`take`](Payload::take) to recover the
/// concrete value.
#[derive(Clone, Debug)]
pub struct Payload(Box<dyn StageMessage>);

impl Payload {
    /// Wraps a message.
    pub fn new(message: impl StageMessage) -> Self {
        Payload(Box::new(message))
    }

    /// Returns `true` if the payload holds a `T`.
    pub fn is<T: 'static>(&self) -> bool {
        (*self.0).as_any().is::<T>()
    }

    /// Borrows the payload as a `T`, if that is what it holds.
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        (*self.0).as_any().downcast_ref::<T>()
    }

    /// Consumes the payload, returning the `T` it holds.
    pub fn take<T: 'static>(self) -> Option<T> {
        self.0.into_any().downcast::<T>().ok().map(|boxed| *boxed)
    }

    /// The concrete type name of the wrapped value.
    pub fn type_name(&self) -> &'static str {
        (*self.0).type_name()
    }
}
