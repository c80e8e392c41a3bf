// Error types shared across layers

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing configuration value: {0}")]
    Missing(&'static str),
    #[error("Invalid backend URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
    #[error("Local storage unavailable: {0}")]
    Storage(#[from] StorageError),
}

/// Failure of a call against the hosted platform.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The platform answered with a non-success status. `message` is the
    /// platform's own error text, untouched.
    #[error("{message}")]
    Api { status: u16, message: String },
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Invalid response from backend: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Invalid request URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("Not signed in")]
    NoSession,
    #[error("No {0} row matched")]
    NotFound(&'static str),
}

impl BackendError {
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        BackendError::Api {
            status,
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Corrupt storage file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Storage lock poisoned")]
    Poisoned,
}
