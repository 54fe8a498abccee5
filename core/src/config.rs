//! Front-end configuration.
//!
//! Decoding has no knobs; these options only shape how the command-line
//! front-end reads input and prints results. Every field has a default, so a
//! TOML file only needs the keys it changes.
//!
//! # Example
//!
//! ```rust
//! use oldphonepad_core::{Config, TraceFormat};
//!
//! let config = Config::from_toml_str("quote_output = true\ntrace_format = \"json\"").unwrap();
//! assert!(config.quote_output);
//! assert_eq!(config.trace_format, TraceFormat::Json);
//! assert_eq!(config.prompt, "> ");
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How `trace` output is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceFormat {
    /// One line per step
    #[default]
    Text,
    /// The whole trace as a JSON document
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Prompt printed before each REPL line
    pub prompt: String,
    /// Print the raw input before its decoded text in the REPL
    pub echo_input: bool,
    /// Wrap decoded text in double quotes so spaces are visible
    pub quote_output: bool,
    /// Rendering used by the `trace` command
    pub trace_format: TraceFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            echo_input: false,
            quote_output: false,
            trace_format: TraceFormat::Text,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = self.to_toml_string()?;
        std::fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
