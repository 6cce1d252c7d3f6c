//! Error types for gMake

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for gMake operations
pub type Result<T> = std::result::Result<T, GmakeError>;

/// Main error type for gMake
///
/// Only the loader and the command line surface these. The interpreter itself
/// reports failures as observations and keeps going.
#[derive(Error, Debug)]
pub enum GmakeError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// YAML parsing errors
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Script discovery and settings errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to find script file (searched: {0})")]
    NotFound(String),

    #[error("Failed to read script '{path}': {error}")]
    Unreadable { path: PathBuf, error: String },

    #[error("Invalid settings: {0}")]
    Invalid(String),

    #[error("Invalid variable definition '{0}' (expected NAME=VALUE)")]
    InvalidVariable(String),
}

/// Command execution errors
///
/// These never leave the dispatcher; they are rendered into `Failed`
/// observations.
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("Failed to launch '{command}': {error}")]
    Launch { command: String, error: String },

    #[error("Command failed with exit code {0:?}")]
    CommandFailed(Option<i32>),

    #[error("Error deleting '{path}': {error}")]
    Delete { path: PathBuf, error: String },

    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },
}

/// Specialized result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Specialized result type for execution operations
pub type ExecutionResult<T> = std::result::Result<T, ExecutionError>;
