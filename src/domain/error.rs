use std::io;

use thiserror::Error;

use crate::domain::SourceKind;

/// Library-wide error type for reuseit operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// `.reuseit.toml` holds a value that fails validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Tailwind CSS is not declared in the project's `package.json`.
    #[error("Tailwind CSS is not installed. Please install Tailwind CSS before proceeding.")]
    TailwindNotInstalled,

    /// The installed Tailwind CSS package metadata is missing or has no version.
    #[error("Unable to determine Tailwind version.")]
    TailwindVersionUnknown,

    /// Identifier is not present in the registry.
    #[error("Could not find {kind} '{name}'!")]
    UnknownSource { kind: SourceKind, name: String },

    /// Remote source file could not be retrieved.
    #[error("Failed to fetch {url}: {reason}")]
    FetchFailed { url: String, reason: String },

    /// Existing Tailwind config cannot be read as a plain object literal.
    #[error("Cannot update {path}: {details}")]
    UnsupportedStyleConfig { path: String, details: String },

    /// Embedded registry failed to load.
    #[error("Invalid registry: {0}")]
    InvalidRegistry(String),

    /// Interactive prompt failed.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
