//! Error types.
//!
//! Two kinds of errors live here: [`RuntimeError`], the opaque failure of an
//! action that is being routed, and [`PaywallError`], raised at the crate's
//! edges when reading configuration or input files.

pub mod runtime;

pub use runtime::{ApiError, RuntimeError};

use config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading configuration or reading input.
#[derive(Debug, Error)]
pub enum PaywallError {
    /// The configuration file was not found.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(String),

    /// The configuration file path is not valid UTF-8.
    #[error("invalid configuration path: {0}")]
    InvalidPath(String),

    /// The configuration could not be parsed.
    #[error("failed to parse configuration: {0}")]
    Config(#[from] ConfigError),

    /// An input file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// The file being read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// An input document is not valid JSON for its expected shape.
    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),
}
