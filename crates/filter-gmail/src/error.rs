//! Error types for filter-gmail

use std::path::PathBuf;

/// Result type for filter-gmail operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur talking to the Gmail API
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Transport failure or undecodable response body
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("Gmail API returned {status}: {body}")]
    Api { status: u16, body: String },

    /// The token file could not be read
    #[error("reading token file {path} failed: {source}")]
    TokenRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The token file is not a valid token document
    #[error("parsing token file {path} failed: {source}")]
    TokenParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The token file holds no access token
    #[error("token file {path} has no access token")]
    MissingAccessToken { path: PathBuf },
}
