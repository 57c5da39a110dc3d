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
/// Represents errors raised by the Stage itself while dispatching.
///
/// The two expected absence conditions, a duplicate registration and an unknown
/// target, are not errors: they are reported as `None`. Failures raised by handlers
/// pass through unmodified as [`anyhow::Error`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageError {
    /// A handler answered with a response of a different type than the caller asked for.
    UnexpectedResponse {
        /// The actor that produced the response.
        target: String,
        /// The type the caller expected.
        expected: &'static str,
        /// The type the handler actually returned.
        found: &'static str,
    },
    /// An actor's stored state could not be downcast to its handler's state type.
    StateTypeMismatch {
        /// The actor whose state was being dispatched.
        actor: String,
        /// The state type the handler was registered with.
        expected: &'static str,
    },
}

impl std::fmt::Display for StageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StageError::UnexpectedResponse {
                target,
                expected,
                found,
            } => write!(
                f,
                "Actor {target} responded with {found} where {expected} was expected"
            ),
            StageError::StateTypeMismatch { actor, expected } => {
                write!(f, "State of actor {actor} is not a {expected}")
            }
        }
    }
}

impl std::error::Error for StageError {}
