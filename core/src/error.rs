//! Error types for decoding and front-end configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the decoder boundary.
///
/// Malformed keypad data never errors; only an absent input does.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("no keypad input was supplied")]
    MissingInput,
}

/// Errors that can occur when loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("failed to write config file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
