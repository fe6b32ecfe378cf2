mod fields;
mod logger;

pub use fields::{Fields, Rendered};
pub use logger::{Logger, LoggerBuilder, LoggerConfig};

use crate::types::{Error, Result};
use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;
use std::sync::Arc;
use tracing::Level;

/// Target every entry event and span is recorded under.
pub const TARGET: &str = "ctxlog";

/// A structured log record builder: a logger plus the fields accumulated
/// for the current request.
///
/// Deriving methods never touch `self`; they return a new entry, so an
/// entry can be shared between any number of contexts. Fields are shared
/// between clones and only copied when a derived entry adds to them.
#[derive(Debug, Clone)]
pub struct Entry {
    logger: Arc<Logger>,
    data: Arc<Fields>,
}

impl Entry {
    pub fn new(logger: Arc<Logger>) -> Self {
        Self {
            logger,
            data: Arc::new(Fields::new()),
        }
    }

    /// A field-less entry on [`Logger::standard`].
    pub fn standard() -> Self {
        Self::new(Logger::standard())
    }

    /// Copy of this entry with `name` set to `value`, replacing any
    /// previous value for `name`.
    pub fn with_field(&self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut data = self.data.clone();
        Arc::make_mut(&mut data).insert(name.into(), value.into());
        Self {
            logger: self.logger.clone(),
            data,
        }
    }

    /// Copy of this entry with every pair merged in, later pairs winning.
    pub fn with_fields<I, K, V>(&self, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let mut data = self.data.clone();
        Arc::make_mut(&mut data).extend(
            fields
                .into_iter()
                .map(|(name, value)| (name.into(), value.into())),
        );
        Self {
            logger: self.logger.clone(),
            data,
        }
    }

    /// Copy of this entry with the top-level members of `value` merged in.
    ///
    /// `value` must serialize to a JSON object (a struct or a map).
    pub fn with_serialized<T: Serialize + ?Sized>(&self, value: &T) -> Result<Self> {
        match serde_json::to_value(value)? {
            Value::Object(map) => Ok(self.with_fields(map)),
            other => Err(Error::NotAnObject(other.to_string())),
        }
    }

    pub fn data(&self) -> &Fields {
        &self.data
    }

    pub fn into_data(self) -> Fields {
        Arc::unwrap_or_clone(self.data)
    }

    pub fn logger(&self) -> &Arc<Logger> {
        &self.logger
    }

    pub fn enabled(&self, level: Level) -> bool {
        level <= self.logger.level()
    }

    /// Emit `message` at `level` with this entry's fields attached.
    pub fn log(&self, level: Level, message: impl Display) {
        if !self.enabled(level) {
            return;
        }
        let logger = self.logger.name();
        let fields = Rendered(self.data());
        match level {
            Level::ERROR => {
                tracing::error!(target: TARGET, logger, fields = %fields, "{}", message)
            }
            Level::WARN => {
                tracing::warn!(target: TARGET, logger, fields = %fields, "{}", message)
            }
            Level::INFO => {
                tracing::info!(target: TARGET, logger, fields = %fields, "{}", message)
            }
            Level::DEBUG => {
                tracing::debug!(target: TARGET, logger, fields = %fields, "{}", message)
            }
            _ => tracing::trace!(target: TARGET, logger, fields = %fields, "{}", message),
        }
    }

    pub fn trace(&self, message: impl Display) {
        self.log(Level::TRACE, message)
    }

    pub fn debug(&self, message: impl Display) {
        self.log(Level::DEBUG, message)
    }

    pub fn info(&self, message: impl Display) {
        self.log(Level::INFO, message)
    }

    pub fn warn(&self, message: impl Display) {
        self.log(Level::WARN, message)
    }

    pub fn error(&self, message: impl Display) {
        self.log(Level::ERROR, message)
    }

    /// An INFO span carrying this entry's fields, for `tracing::Instrument`.
    pub fn span(&self) -> tracing::Span {
        tracing::info_span!(
            target: TARGET,
            "ctxlog",
            logger = self.logger.name(),
            fields = %Rendered(self.data())
        )
    }
}
