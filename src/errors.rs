/*!
 * Error types for the locale-lint application.
 *
 * Validation findings are not errors; they are returned as diagnostics.
 * These types cover the glue around validation: loading the configuration
 * and discovering locale files.
 */

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading the configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file is missing
    #[error("config file does not exist: {0}")]
    NotFound(PathBuf),

    /// The config file could not be read or parsed
    #[error("config file could not be loaded: {0}")]
    Load(String),

    /// The config file does not match the schema
    #[error("config file is invalid: {0}")]
    Invalid(String),
}

/// Errors that can occur when discovering and reading locale files
#[derive(Error, Debug)]
pub enum LoaderError {
    /// The locale root is missing or not a directory
    #[error("locale path is not a directory: {0}")]
    NotADirectory(PathBuf),

    /// A directory could not be listed
    #[error("failed to read directory {path}: {message}")]
    ReadDir {
        /// Directory being listed
        path: PathBuf,
        /// Underlying error
        message: String,
    },

    /// A locale file could not be read
    #[error("failed to read locale file {path}: {message}")]
    ReadFile {
        /// File being read
        path: PathBuf,
        /// Underlying error
        message: String,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from configuration handling
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Error from locale file discovery
    #[error(transparent)]
    Loader(#[from] LoaderError),

    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
