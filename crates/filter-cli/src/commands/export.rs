//! Export command implementation
//!
//! Writes the existing remote filters to a filter file.

use std::path::Path;

use colored::Colorize;

use filter_core::{CancelFlag, ExportReport, MailService, SyncEngine};

use crate::error::Result;

/// Run the export command
pub fn run_export<S: MailService>(
    service: S,
    path: &Path,
    cancel: CancelFlag,
) -> Result<ExportReport> {
    println!(
        "{} Exporting filters to {}...",
        "=>".blue().bold(),
        path.display().to_string().cyan()
    );

    let engine = SyncEngine::new(service).with_cancel(cancel);
    let report = engine.export(path)?;

    println!(
        "{} Exported {} filters ({} Gmail filters).",
        "OK".green().bold(),
        report.rules,
        report.remote_rules
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use filter_core::load_filters;
    use filter_test_utils::{FakeMailbox, FilterDir};

    #[test]
    fn test_export_after_apply() {
        let dir = FilterDir::new();
        let mailbox = FakeMailbox::new();
        crate::commands::run_apply(&mailbox, &dir.sample(), CancelFlag::new()).unwrap();

        let out = dir.path("export.json");
        let report = run_export(&mailbox, &out, CancelFlag::new()).unwrap();

        assert_eq!(report.rules, 3);
        let rules = load_filters(&out).unwrap();
        assert_eq!(rules[0].label.as_deref(), Some("Mailing Lists/coreos-dev"));
        assert!(rules[0].archive_unless_to_me);
    }

    #[test]
    fn test_export_empty_mailbox() {
        let dir = FilterDir::new();
        let out = dir.path("export.toml");

        let report = run_export(FakeMailbox::new(), &out, CancelFlag::new()).unwrap();

        assert_eq!(report.rules, 0);
        assert!(load_filters(&out).unwrap().is_empty());
    }
}
