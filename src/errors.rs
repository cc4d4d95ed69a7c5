use std::time::SystemTimeError;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ForgeError>;

#[derive(Error, Debug)]
pub enum ForgeError {
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("{field} must be within [{min}, {max}], got {value}")]
    Range {
        field: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },
    #[error("Empty input: {0}")]
    EmptyInput(String),
    #[error("There is some collision: {0}")]
    Collision(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parsing error")]
    Parse,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<serde_json::Error> for ForgeError {
    fn from(_: serde_json::Error) -> Self {
        Self::Parse
    }
}

impl From<SystemTimeError> for ForgeError {
    fn from(value: SystemTimeError) -> Self {
        Self::Other(anyhow::anyhow!(value.to_string()))
    }
}
