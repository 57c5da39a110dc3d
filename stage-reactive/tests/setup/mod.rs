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
#![allow(dead_code)]

use std::sync::Once;

use stage_reactive::prelude::*;

// Declare the submodules.
pub mod actors;
pub mod messages;

// Ensures tracing initialization happens only once across all tests.
static INIT: Once = Once::new();

/// Initializes the global tracing subscriber for tests.
///
/// Logs go to `logs/stage_tests.log.<date>` at `trace` level for the Stage crates
/// (overridable through `RUST_LOG`). `Once` keeps repeated calls from different tests
/// from trying to install a second subscriber.
pub fn initialize_tracing() {
    INIT.call_once(|| {
        let mut config = StageConfig::default();
        config.tracing.level = "info,stage_core=trace,stage_reactive=trace".to_string();
        config.behavior.log_to_file = true;
        config.paths.log_directory = "logs".to_string();
        config.paths.log_file_prefix = "stage_tests.log".to_string();

        match init_tracing(&config) {
            // Leak the guard so the non-blocking writer is not dropped before process exit
            Ok(Some(guard)) => {
                Box::leak(Box::new(guard));
            }
            Ok(None) => {}
            Err(error) => eprintln!("tracing not initialized: {error:#}"),
        }
    });
}

/// A stage with default configuration, independent of any configuration file on
/// the machine running the tests.
pub fn new_stage() -> Stage {
    Stage::with_config(StageConfig::default())
}
