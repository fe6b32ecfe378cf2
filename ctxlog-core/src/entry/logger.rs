use crate::types::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::{Arc, LazyLock};
use tracing::level_filters::LevelFilter;

const DEFAULT_NAME: &str = "ctxlog";
const DEFAULT_LEVEL: &str = "trace";

static STANDARD: LazyLock<Arc<Logger>> = LazyLock::new(|| Arc::new(Logger::default()));

/// The logger an [`Entry`](crate::Entry) emits through.
///
/// Output always goes to the installed `tracing` subscriber; a logger only
/// adds its name to every event and can drop events below its own level
/// before they get that far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logger {
    name: String,
    level: LevelFilter,
}

impl Default for Logger {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            level: LevelFilter::TRACE,
        }
    }
}

impl Logger {
    pub fn new(name: impl Into<String>, level: LevelFilter) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }

    /// Shared process-wide logger used by [`Entry::standard`](crate::Entry::standard).
    pub fn standard() -> Arc<Logger> {
        STANDARD.clone()
    }

    pub fn from_config(config: &LoggerConfig) -> Result<Self> {
        let level = LevelFilter::from_str(&config.level)
            .map_err(|_| Error::InvalidLevel(config.level.clone()))?;
        Ok(Self::new(config.name.clone(), level))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }
}

/// Configuration for a [`Logger`], suitable for embedding in an
/// application's own config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Name recorded on every event
    pub name: String,
    /// Minimum level, e.g. "info" or "off"
    pub level: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            level: DEFAULT_LEVEL.to_string(),
        }
    }
}

/// Builder for logger configuration
pub struct LoggerBuilder {
    config: LoggerConfig,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = name.into();
        self
    }

    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.config.level = level.into();
        self
    }

    pub fn config(self) -> LoggerConfig {
        self.config
    }

    pub fn build(self) -> Result<Logger> {
        Logger::from_config(&self.config)
    }
}
