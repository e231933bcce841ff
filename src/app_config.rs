use anyhow::{anyhow, Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Application configuration module
/// This module handles loading, validating and saving configuration settings.
/// Every field has a default, so an absent or partial file is fine.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Config {
    /// Output naming
    #[serde(default)]
    pub output: OutputConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Output file naming
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OutputConfig {
    // @field: Extension of written files, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,

    // @field: Highest numeric suffix tried when the default path exists
    #[serde(default = "default_collision_limit")]
    pub collision_limit: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            collision_limit: default_collision_limit(),
        }
    }
}

/// Log level for the application
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching log crate filter
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

// Suffixes are zero-padded to three digits
pub const MAX_COLLISION_LIMIT: u32 = 999;

fn default_extension() -> String {
    "srt".to_string()
}

fn default_collision_limit() -> u32 {
    MAX_COLLISION_LIMIT
}

impl Config {
    /// Load configuration from a JSON file, or use defaults when it does not exist
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            debug!("Config file not found at {:?}, using defaults.", path);
            return Ok(Config::default());
        }

        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {:?}", path))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file: {:?}", path))?;

        Ok(config)
    }

    /// Save configuration as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let config_json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write config to file: {:?}", path))
    }

    pub fn validate(&self) -> Result<()> {
        let extension = &self.output.extension;

        if extension.is_empty() {
            return Err(anyhow!("Output extension must not be empty"));
        }

        if extension.contains(['.', '/', '\\']) {
            return Err(anyhow!(
                "Output extension must be given without dots or path separators: {}",
                extension
            ));
        }

        if !(1..=MAX_COLLISION_LIMIT).contains(&self.output.collision_limit) {
            return Err(anyhow!(
                "Collision limit must be between 1 and {}, got {}",
                MAX_COLLISION_LIMIT,
                self.output.collision_limit
            ));
        }

        Ok(())
    }
}
