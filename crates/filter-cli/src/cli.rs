//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;
use filter_gmail::DEFAULT_API_URL;

use crate::error::{CliError, Result};

/// Directory under the home directory holding cached credentials
const CREDS_DIR: &str = ".gmailfilters";

/// gmailfilters - Sync Gmail filters from a declarative file
///
/// Applying deletes every existing Gmail filter and re-creates them from
/// FILE. Exporting writes the existing filters to FILE instead.
///
/// Examples:
///   gmailfilters filters.toml              # Replace Gmail filters with filters.toml
///   gmailfilters --export backup.yaml      # Save the current filters to backup.yaml
#[derive(Parser, Debug)]
#[command(name = "gmailfilters")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Filter file (.toml, .json, .yaml or .yml)
    pub file: PathBuf,

    /// Export existing filters into FILE instead of applying it
    #[arg(short, long)]
    pub export: bool,

    /// Cached OAuth token file [default: ~/.gmailfilters/token.json]
    #[arg(long, env = "GMAILFILTERS_TOKEN_FILE")]
    pub token_file: Option<PathBuf>,

    /// Gmail API root for the authenticated user
    #[arg(long, env = "GMAILFILTERS_API_URL", default_value = DEFAULT_API_URL, hide = true)]
    pub api_url: String,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,
}

impl Cli {
    /// The token file to read, falling back to the credentials directory
    pub fn token_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.token_file {
            return Ok(path.clone());
        }

        dirs::home_dir()
            .map(|home| home.join(CREDS_DIR).join("token.json"))
            .ok_or_else(|| CliError::user("Cannot determine home directory; pass --token-file"))
    }
}
