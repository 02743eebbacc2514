//! Apply command implementation
//!
//! Replaces every remote filter with the filters compiled from the file.

use std::path::Path;

use colored::Colorize;

use filter_core::{CancelFlag, MailService, SyncEngine, SyncReport};

use crate::error::Result;

/// Run the apply command
pub fn run_apply<S: MailService>(
    service: S,
    path: &Path,
    cancel: CancelFlag,
) -> Result<SyncReport> {
    println!(
        "{} Applying filters from {}...",
        "=>".blue().bold(),
        path.display().to_string().cyan()
    );

    let engine = SyncEngine::new(service).with_cancel(cancel);
    let report = engine.apply(path)?;

    println!(
        "{} Applied {} filters ({} Gmail filters created, {} deleted).",
        "OK".green().bold(),
        report.rules,
        report.remote_rules_created,
        report.remote_rules_deleted
    );
    if report.labels_created > 0 {
        println!("   {} {} labels created", "+".green(), report.labels_created);
    }

    Ok(report)
}
