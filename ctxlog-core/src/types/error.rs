use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for the fallible conveniences around entries and loggers.
///
/// The core field store never fails; these only come from turning
/// arbitrary values into fields or from parsing configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum Error {
    #[error("Serialization: {0}")]
    Serialization(String),

    #[error("Not an object: {0}")]
    NotAnObject(String),

    #[error("Invalid level: {0}")]
    InvalidLevel(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
