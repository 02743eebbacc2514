//! gmailfilters CLI
//!
//! Syncs Gmail filters from a declarative filter file, or exports the
//! existing filters into one.

mod cli;
mod commands;
mod error;
mod logging;
mod signals;

use clap::Parser;
use colored::Colorize;

use filter_core::CancelFlag;
use filter_gmail::{GmailClient, Token};

use cli::Cli;
use error::{CliError, Result};

fn main() {
    match run() {
        Ok(()) => {}
        // Interrupted runs exit 0 once the engine reaches a checkpoint.
        Err(e) if e.is_cancelled() => tracing::info!("{}", e),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.debug)
        .map_err(|e| CliError::user(format!("Failed to set up logging: {}", e)))?;
    tracing::debug!(file = %cli.file.display(), export = cli.export, "Starting");

    let cancel = CancelFlag::new();
    signals::install(cancel.clone())
        .map_err(|e| CliError::user(format!("Failed to install signal handler: {}", e)))?;

    let token = Token::from_file(&cli.token_path()?)?;
    let client = GmailClient::new(token).with_base_url(cli.api_url.as_str());

    if cli.export {
        commands::run_export(client, &cli.file, cancel)?;
    } else {
        commands::run_apply(client, &cli.file, cancel)?;
    }

    Ok(())
}
