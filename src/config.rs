use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use crate::models::MatchingOptions;

/// Runner configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
    pub worker_threads: Option<usize>,
    #[serde(default = "default_max_batch_size")]
    pub max_batch_size: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            parallel_threshold: default_parallel_threshold(),
            worker_threads: None,
            max_batch_size: default_max_batch_size(),
        }
    }
}

impl MatchingSettings {
    pub fn options(&self) -> MatchingOptions {
        MatchingOptions {
            parallel_threshold: self.parallel_threshold,
        }
    }
}

fn default_parallel_threshold() -> usize { MatchingOptions::default().parallel_threshold }
fn default_max_batch_size() -> usize { 10_000 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with ADOPT_)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., ADOPT__MATCHING__PARALLEL_THRESHOLD -> matching.parallel_threshold
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("ADOPT")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
