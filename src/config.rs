// src/config.rs

//! Manages registry configuration: loading, defaults, and validation.

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fs;
use std::time::Duration;
use url::Url;

fn default_data_dir() -> String {
    "data".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_sync_timeout() -> Duration {
    Duration::from_secs(10)
}

fn default_textgen_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_textgen_model() -> String {
    "gemini-2.5-flash".to_string()
}

/// Settings for the outbound sheet synchronization.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SyncConfig {
    /// Endpoint receiving the flattened asset rows. The operator-stored
    /// URL in the `sheet_url_v1` collection takes precedence when set.
    #[serde(default)]
    pub sheet_url: Option<Url>,
    #[serde(with = "humantime_serde", default = "default_sync_timeout")]
    pub timeout: Duration,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            sheet_url: None,
            timeout: default_sync_timeout(),
        }
    }
}

/// Settings for the text-generation collaborator.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TextGenConfig {
    #[serde(default)]
    pub endpoint: Option<Url>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_textgen_model")]
    pub model: String,
    #[serde(with = "humantime_serde", default = "default_textgen_timeout")]
    pub timeout: Duration,
}

impl Default for TextGenConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            model: default_textgen_model(),
            timeout: default_textgen_timeout(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Config {
    /// Directory holding the persisted collections.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub sync: SyncConfig,
    #[serde(default)]
    pub textgen: TextGenConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            sync: SyncConfig::default(),
            textgen: TextGenConfig::default(),
        }
    }
}

impl Config {
    /// Creates a new `Config` instance by reading and parsing a TOML file.
    pub fn from_file(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at '{path}'"))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse TOML from '{path}'"))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the resolved configuration to ensure logical consistency.
    pub fn validate(&self) -> Result<()> {
        if self.data_dir.trim().is_empty() {
            return Err(anyhow!("data_dir cannot be empty"));
        }
        if self.sync.timeout.is_zero() {
            return Err(anyhow!("sync.timeout cannot be zero"));
        }
        if self.textgen.timeout.is_zero() {
            return Err(anyhow!("textgen.timeout cannot be zero"));
        }
        if self.textgen.endpoint.is_some() && self.textgen.model.trim().is_empty() {
            return Err(anyhow!("textgen.model cannot be empty when an endpoint is set"));
        }
        Ok(())
    }
}
