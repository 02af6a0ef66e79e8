//! Error types for ghrepo-core.
//!
//! This module defines the canonical error type for the library. Remote
//! failures are carried verbatim; only a 404 gets special treatment, and
//! only by the read path of the reconciler.

use std::path::PathBuf;

/// HTTP status the hosting API uses for a missing repository.
const STATUS_NOT_FOUND: u16 = 404;

/// The main error type for ghrepo-core operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Locally detected precondition violation. Never reaches the network.
    #[error("validation error: {0}")]
    Validation(String),

    /// The hosting API answered with a non-success status.
    #[error("remote error{}: {message}", status_suffix(.status))]
    Remote {
        /// HTTP status code, if the failure came from a response.
        status: Option<u16>,
        /// Message reported by the API.
        message: String,
    },

    /// HTTP transport failure (connection, TLS, timeout, decoding).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The operation was cancelled before the remote call completed.
    #[error("operation cancelled")]
    Cancelled,

    /// Import was requested for a repository that does not exist remotely.
    #[error("cannot import non-existent repository {owner}/{name}")]
    ImportTargetMissing {
        /// Owning organization.
        owner: String,
        /// Repository name that was requested.
        name: String,
    },

    /// The operation needs an identifier but the record has none.
    #[error("resource has no identifier")]
    MissingIdentifier,

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(PathBuf),

    /// Invalid configuration format.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Invalid API URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error.
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Whether the hosting API reported the entity as missing.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Remote {
                status: Some(STATUS_NOT_FOUND),
                ..
            }
        )
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" ({s})")).unwrap_or_default()
}

/// A specialized Result type for ghrepo-core operations.
pub type Result<T> = std::result::Result<T, Error>;
