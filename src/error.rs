//! Error types for the sp_drive crate.

use thiserror::Error;

/// Errors that can occur when talking to SharePoint through Microsoft Graph.
#[derive(Error, Debug)]
pub enum SharePointError {
    #[error("Incomplete client configuration; missing: {}", .missing.join(", "))]
    IncompleteConfig { missing: Vec<&'static str> },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Failed to read credentials file: {0}")]
    CredentialsFileError(#[from] std::io::Error),

    #[error("Failed to parse credentials JSON: {0}")]
    CredentialsParseError(#[from] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Graph API error ({status}, {code}): {message}")]
    ApiError {
        status: u16,
        code: String,
        message: String,
    },

    #[error("Invalid SharePoint site URL: {0}")]
    InvalidSiteUrl(String),
}

/// Result type alias for SharePointError.
pub type Result<T> = std::result::Result<T, SharePointError>;
