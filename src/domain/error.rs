use std::io;

use thiserror::Error;

/// Library-wide error type for examark operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Mock login rejected the supplied credentials.
    #[error("Login failed: email and password must not be empty")]
    LoginFailed,

    /// No session record exists.
    #[error("Not logged in. Run 'examark login' first.")]
    NotLoggedIn,

    /// Question was blank after trimming.
    #[error("Question must not be empty")]
    EmptyQuestion,

    /// Mark weight outside the closed {2, 5, 8} set.
    #[error("Invalid mark weight '{0}': must be 2, 5, or 8")]
    InvalidMarkTier(String),

    /// Stored document lookup failed.
    #[error("Document '{0}' not found")]
    DocumentNotFound(String),

    /// Context file path does not exist.
    #[error("Context file not found: {0}")]
    ContextFileNotFound(String),

    /// A persisted archive file no longer parses as JSON.
    #[error("Archive file is corrupted: {path} ({details})")]
    ArchiveCorrupted { path: String, details: String },

    /// Prompt template rendering failed.
    #[error("Prompt rendering failed: {0}")]
    PromptRender(String),

    /// Required environment variable is missing.
    #[error("Environment variable {0} is not set")]
    EnvironmentVariableMissing(String),

    /// Serialization failure while writing an archive file.
    #[error("Failed to serialize {what}: {details}")]
    SerializeError { what: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}
