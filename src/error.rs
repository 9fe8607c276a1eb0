//! Error types for the dashboard.

use reqwest::StatusCode;
use thiserror::Error;

/// Message shown for a failed view whose message is blank.
pub const FALLBACK_MESSAGE: &str = "An error occurred";

/// Main error type for all dashboard operations.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The API answered with a non-success status.
    #[error("Failed to fetch data ({status})")]
    Status {
        /// Status returned by the API.
        status: StatusCode,
        /// URL that was requested.
        url: String,
    },

    /// Album was not found.
    #[error("Album not found: {0}")]
    AlbumNotFound(String),

    /// User was not found.
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// A dashboard location could not be routed.
    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    /// Configuration value is unusable.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// HTTP request failed.
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),
}

impl DashboardError {
    /// Whether this error means the requested entity does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            DashboardError::AlbumNotFound(_) | DashboardError::UserNotFound(_) => true,
            DashboardError::Status { status, .. } => *status == StatusCode::NOT_FOUND,
            _ => false,
        }
    }
}

/// Result type alias for dashboard operations.
pub type Result<T> = std::result::Result<T, DashboardError>;
