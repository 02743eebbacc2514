//! Cached OAuth token loading
//!
//! The token file is the JSON document an OAuth client caches after the
//! authorization flow. Only the access token is used; obtaining and
//! refreshing tokens happens elsewhere.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::{Error, Result};

/// A cached OAuth token
#[derive(Clone, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Expiry as written by the caching client, usually RFC 3339
    #[serde(default)]
    pub expiry: Option<String>,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

impl Token {
    /// Create a bearer token from a raw access token
    pub fn bearer(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: default_token_type(),
            refresh_token: None,
            expiry: None,
        }
    }

    /// Read a token from a JSON token file
    ///
    /// # Errors
    ///
    /// Returns [`Error::TokenRead`] if the file cannot be read,
    /// [`Error::TokenParse`] if it is not a token document, and
    /// [`Error::MissingAccessToken`] if the access token is empty.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::TokenRead {
            path: path.to_path_buf(),
            source,
        })?;

        let token: Token = serde_json::from_str(&content).map_err(|source| Error::TokenParse {
            path: path.to_path_buf(),
            source,
        })?;

        if token.access_token.trim().is_empty() {
            return Err(Error::MissingAccessToken {
                path: path.to_path_buf(),
            });
        }

        debug!(path = %path.display(), expiry = ?token.expiry, "Loaded token");
        Ok(token)
    }

    /// Value of the `Authorization` header
    pub fn authorization(&self) -> String {
        format!("{} {}", self.token_type, self.access_token)
    }
}

// Keep secrets out of logs.
impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("token_type", &self.token_type)
            .field("expiry", &self.expiry)
            .finish_non_exhaustive()
    }
}
