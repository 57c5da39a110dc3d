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
pub use config::{
    BehaviorConfig, DefaultsConfig, LimitsConfig, PathsConfig, StageConfig, TracingConfig, CONFIG,
};
pub use reply::Reply;
pub use stage::Stage;
pub(crate) use stage_inner::StageInner;
pub use types::ActorName;
pub(crate) use types::*;

mod types;

mod config;
mod reply;
mod stage;
mod stage_inner;
