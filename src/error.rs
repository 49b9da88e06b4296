//! Error types with fatal/absorbed classification.

/// Error type for permission-gate operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    // Config errors
    #[error("Required permission must be one of: {valid}")]
    InvalidPermission { valid: String },

    #[error("Configuration error: {0}")]
    Config(String),

    // Lookup errors
    #[error("GitHub API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // System errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether the error should mark the whole run as failed.
    ///
    /// Configuration errors are fatal. Everything else happens while talking
    /// to the permission API and is absorbed into a negative result.
    pub fn is_fatal(&self) -> bool {
        match self {
            Error::InvalidPermission { .. } | Error::Config(_) => true,
            Error::Api { .. } | Error::Http(_) | Error::Io(_) | Error::Json(_) => false,
        }
    }
}

/// Result type alias using permission-gate's Error.
pub type Result<T> = std::result::Result<T, Error>;
