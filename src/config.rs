//! Configuration loading from TOML.
//!
//! The config file is optional. Every key has a default, and per-source
//! sections override the built-in settings of the matching data source.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Config file read when `MONSTERDEX_CONFIG` is not set.
pub const DEFAULT_CONFIG_FILE: &str = "monsterdex.toml";

/// Default per-request timeout for every data source.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent sent by every data source.
pub const DEFAULT_USER_AGENT: &str = "monsterdex/0.1.0";

/// Top-level application configuration.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub output: OutputConfig,
    /// Overrides keyed by data source name.
    #[serde(default)]
    pub sources: HashMap<String, SourceOverrides>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SourceOverrides {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
}

/// Resolved connection settings handed to a data source's initialiser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSettings {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl SourceSettings {
    /// Settings pointing at `base_url` with the default timeout and agent.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Apply config overrides on top of these settings.
    pub fn merged(mut self, overrides: Option<&SourceOverrides>) -> Self {
        if let Some(o) = overrides {
            if let Some(url) = &o.base_url {
                self.base_url = url.clone();
            }
            if let Some(secs) = o.timeout_secs {
                self.timeout = Duration::from_secs(secs);
            }
            if let Some(agent) = &o.user_agent {
                self.user_agent = agent.clone();
            }
        }
        self.base_url = self.base_url.trim_end_matches('/').to_string();
        self
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path}"))?;
        Self::parse(&contents).with_context(|| format!("Failed to parse config file: {path}"))
    }

    /// Parse configuration from TOML text.
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Load from an explicit path, or from the default file if it exists.
    ///
    /// A missing explicit path is an error; a missing default file yields
    /// the built-in defaults.
    pub fn load_or_default(explicit: Option<&str>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::load(DEFAULT_CONFIG_FILE),
            None => Ok(Self::default()),
        }
    }

    /// Overrides for a named source, if configured.
    pub fn source(&self, name: &str) -> Option<&SourceOverrides> {
        self.sources.get(name)
    }
}
