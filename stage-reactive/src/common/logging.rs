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

use anyhow::Context;
use stage_core::prelude::StageConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Installs a global `tracing` subscriber as described by `config`.
///
/// The filter comes from `RUST_LOG` when it is set and from `config.tracing.level`
/// otherwise. Output goes to a daily rolling file under `config.paths` when
/// `behavior.log_to_file` is on, and to stdout when it is off. Nothing is installed
/// when `behavior.enable_tracing` is off.
///
/// Keep the returned guard alive for as long as logs should be flushed.
///
/// # Errors
///
/// Fails if the filter does not parse, the log directory cannot be created, or a
/// global subscriber is already installed.
pub fn init_tracing(config: &StageConfig) -> anyhow::Result<Option<WorkerGuard>> {
    if !config.behavior.enable_tracing {
        return Ok(None);
    }

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.tracing.level)
            .with_context(|| format!("Invalid tracing level {:?}", config.tracing.level))?,
    };

    let (writer, guard) = if config.behavior.log_to_file {
        let directory = config.paths.resolved_log_directory();
        std::fs::create_dir_all(&directory)
            .with_context(|| format!("Could not create log directory {}", directory.display()))?;
        let appender = tracing_appender::rolling::daily(directory, &config.paths.log_file_prefix);
        tracing_appender::non_blocking(appender)
    } else {
        tracing_appender::non_blocking(std::io::stdout())
    };

    let subscriber = FmtSubscriber::builder()
        .compact()
        .with_line_number(true)
        .with_target(true)
        .with_env_filter(filter)
        .with_writer(writer)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("A global tracing subscriber is already installed")?;
    Ok(Some(guard))
}
