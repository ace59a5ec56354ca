//! Error types for EmpDir
//!
//! `SearchError` covers a single directory lookup; `EmpDirError` covers
//! everything the application itself can fail on.

use thiserror::Error;

/// Failure of one search request against the directory API
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("network failure: {0}")]
    NetworkFailure(#[source] reqwest::Error),

    #[error("bad response ({status}): {message}")]
    BadResponse { status: u16, message: String },

    #[error("could not decode response: {0}")]
    DecodeFailure(#[source] serde_json::Error),
}

impl SearchError {
    /// True when the request never produced an HTTP response
    pub fn is_transport(&self) -> bool {
        matches!(self, SearchError::NetworkFailure(_))
    }

    /// Short message for the status bar
    pub fn summary(&self) -> String {
        match self {
            SearchError::NetworkFailure(_) => "directory service unreachable".to_string(),
            SearchError::BadResponse { status, message } if message.is_empty() => {
                format!("server returned {}", status)
            }
            SearchError::BadResponse { status, message } => {
                format!("server returned {} ({})", status, message)
            }
            SearchError::DecodeFailure(_) => "unexpected response from server".to_string(),
        }
    }
}

/// Main error type for EmpDir operations
#[derive(Error, Debug)]
pub enum EmpDirError {
    #[error("No API base URL configured: pass --base-url or set {0}")]
    MissingBaseUrl(&'static str),

    #[error("Search term is blank; nothing to search for")]
    BlankSearchTerm,

    #[error("Invalid API base URL '{0}': {1}")]
    InvalidBaseUrl(String, String),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error("Failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("Search failed: {0}")]
    Search(#[from] SearchError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for EmpDir operations
pub type Result<T> = std::result::Result<T, EmpDirError>;
