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

use std::path::{Path, PathBuf};

use anyhow::Context;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

/// Configuration for the Stage crates.
///
/// Loaded from a TOML file in the XDG configuration directory; every section and
/// key is optional and falls back to its default.
///
/// ```toml
/// [defaults]
/// stage_name = "billing"
///
/// [limits]
/// initial_capacity = 64
///
/// [tracing]
/// level = "debug"
///
/// [paths]
/// log_directory = "/var/log/billing"
/// log_file_prefix = "stage.log"
///
/// [behavior]
/// enable_tracing = true
/// log_to_file = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageConfig {
    /// Default values configuration
    pub defaults: DefaultsConfig,
    /// Limits and capacity configuration
    pub limits: LimitsConfig,
    /// Tracing and logging configuration
    pub tracing: TracingConfig,
    /// Path configuration for log output
    pub paths: PathsConfig,
    /// Behavioral configuration switches
    pub behavior: BehaviorConfig,
}

/// Default configuration values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Name given to stages, shown in spans and `Debug` output
    pub stage_name: String,
}

/// Limits and capacity configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Number of actors the registry allocates room for up front
    pub initial_capacity: usize,
}

/// Tracing and logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TracingConfig {
    /// Filter directive applied when a subscriber is installed, e.g. `info` or `stage_core=trace`
    pub level: String,
}

/// Path configuration for log output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory for log files
    pub log_directory: String,
    /// File name prefix for the daily rolling log
    pub log_file_prefix: String,
}

/// Behavioral configuration switches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Install a subscriber at all
    pub enable_tracing: bool,
    /// Write to the rolling log file instead of stdout
    pub log_to_file: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            stage_name: "stage".to_string(),
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 16,
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            log_directory: "~/.local/share/stage/logs".to_string(),
            log_file_prefix: "stage.log".to_string(),
        }
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            enable_tracing: true,
            log_to_file: false,
        }
    }
}

impl PathsConfig {
    /// The log directory with a leading `~` expanded to `$HOME`.
    pub fn resolved_log_directory(&self) -> PathBuf {
        let relative = self.log_directory.strip_prefix("~/");
        match (relative, std::env::var_os("HOME")) {
            (Some(rest), Some(home)) => PathBuf::from(home).join(rest),
            _ => PathBuf::from(&self.log_directory),
        }
    }
}

impl StageConfig {
    /// Load configuration from XDG-compliant locations
    ///
    /// Looks for `stage/config.toml` under `$XDG_CONFIG_HOME` (usually `~/.config`),
    /// then under each of `$XDG_CONFIG_DIRS`.
    ///
    /// If no configuration file is found, returns the default configuration.
    /// If a configuration file exists but is malformed, logs an error and uses defaults.
    pub fn load() -> Self {
        let xdg_dirs = match xdg::BaseDirectories::with_prefix("stage") {
            Ok(dirs) => dirs,
            Err(e) => {
                error!("Failed to initialize XDG directories: {}", e);
                return Self::default();
            }
        };

        match xdg_dirs.find_config_file("config.toml") {
            Some(path) => Self::load_from(&path).unwrap_or_else(|e| {
                error!("{:#}", e);
                Self::default()
            }),
            None => {
                info!("No configuration file found, using defaults");
                Self::default()
            }
        }
    }

    /// Load configuration from an explicit file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML for this schema.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        info!("Loading configuration from: {}", path.display());
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file {}", path.display()))?;
        let config = toml::from_str::<Self>(&config_str)
            .with_context(|| format!("Failed to parse configuration file {}", path.display()))?;
        info!("Successfully loaded configuration");
        Ok(config)
    }
}

lazy_static! {
    /// Global configuration instance loaded from XDG-compliant locations
    pub static ref CONFIG: StageConfig = StageConfig::load();
}
