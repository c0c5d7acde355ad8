use std::path::PathBuf;
use thiserror::Error;

/// Type alias for Result with MergerError as the error type
pub type MergerResult<T> = Result<T, MergerError>;

/// Custom error types for the dictionary merger
#[derive(Error, Debug)]
pub enum MergerError {
    /// Standard IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error handling via anyhow
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),

    /// Configuration related errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// The working directory could not be listed
    #[error("Cannot list directory {path}: {source}")]
    ListDirectory {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A prompt could not be shown or answered
    #[error("Prompt error: {0}")]
    Prompt(String),

    /// The encoding answer names no known codec
    #[error("Unknown encoding: {0:?}")]
    UnknownEncoding(String),

    /// A selected dictionary could not be read
    #[error("Cannot read {path}: {source}")]
    ReadSource {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A selected dictionary holds bytes that are invalid for the codec
    #[error("Cannot decode {path} as {encoding}: malformed byte sequence")]
    Decoding {
        path: PathBuf,
        encoding: &'static str,
    },

    /// The merged dictionary could not be written
    #[error("Cannot write {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Specific errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Dictionary extension must not be empty")]
    InvalidExtension,

    #[error("Line terminator {0:?} cannot be stripped from entries")]
    InvalidStripChars(char),

    #[error("Unknown default encoding: {0:?}")]
    UnknownDefaultEncoding(String),

    #[error("Invalid configuration format: {0}")]
    InvalidFormat(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<dialoguer::Error> for MergerError {
    fn from(err: dialoguer::Error) -> Self {
        MergerError::Prompt(err.to_string())
    }
}

impl From<serde_json::Error> for MergerError {
    fn from(err: serde_json::Error) -> Self {
        MergerError::Config(ConfigError::InvalidFormat(err.to_string()))
    }
}
