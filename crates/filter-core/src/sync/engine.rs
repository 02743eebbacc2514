//! SyncEngine implementation
//!
//! The SyncEngine reconciles the declarative filter file with the filters
//! held by the remote service. Apply is a full replace: every remote filter
//! is deleted, then each declarative rule is compiled and created in file
//! order. The first failure aborts the run; nothing is rolled back.
//!
//! A [`CancelFlag`] is checked between top-level actions and between
//! filters. A cancelled apply may leave the remote filter set empty or
//! partially re-created.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::compile::compile;
use crate::decompile::decompile;
use crate::labels::LabelMap;
use crate::model::{RemoteRule, Rule};
use crate::store::{load_filters, save_filters};
use crate::{Error, MailService, Result};

use super::cancel::CancelFlag;
use super::report::{ExportReport, SyncReport, SyncStage};

/// Engine for synchronizing filters with a remote service
///
/// The SyncEngine provides two operations:
/// - **apply**: Replace the remote filters with the compiled filter file
/// - **export**: Decompile the remote filters into a filter file
pub struct SyncEngine<S> {
    service: S,
    cancel: CancelFlag,
}

impl<S: MailService> SyncEngine<S> {
    /// Create a new SyncEngine on top of a remote service
    pub fn new(service: S) -> Self {
        Self {
            service,
            cancel: CancelFlag::default(),
        }
    }

    /// Stop at the next checkpoint once `cancel` is set
    pub fn with_cancel(mut self, cancel: CancelFlag) -> Self {
        self.cancel = cancel;
        self
    }

    /// Get the underlying service
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Apply a filter file to the remote service
    ///
    /// # Errors
    ///
    /// Returns the first error encountered. Remote state is left as it was
    /// at that point: possibly with every filter deleted and only some of
    /// the file's filters re-created.
    pub fn apply(&self, path: &Path) -> Result<SyncReport> {
        let mut report = SyncReport::default();

        let labels = self.load_labels()?;
        report.stage = SyncStage::LabelsLoaded;
        self.checkpoint(report.stage)?;

        let rules = load_filters(path)?;
        info!(path = %path.display(), rules = rules.len(), "Parsed filter file");

        self.apply_loaded(labels, &rules, report)
    }

    /// Apply an in-memory rule collection to the remote service
    ///
    /// Same semantics as [`SyncEngine::apply`] without the file read.
    pub fn apply_rules(&self, rules: &[Rule]) -> Result<SyncReport> {
        let mut report = SyncReport::default();

        let labels = self.load_labels()?;
        report.stage = SyncStage::LabelsLoaded;
        self.checkpoint(report.stage)?;

        self.apply_loaded(labels, rules, report)
    }

    fn apply_loaded(
        &self,
        mut labels: LabelMap,
        rules: &[Rule],
        mut report: SyncReport,
    ) -> Result<SyncReport> {
        // Reject bad queries before anything remote is deleted.
        for (index, rule) in rules.iter().enumerate() {
            rule.resolved_query()
                .map_err(|e| e.in_rule(index + 1, rule.describe()))?;
        }
        report.stage = SyncStage::RulesParsed;
        self.checkpoint(report.stage)?;

        report.remote_rules_deleted = self.clear_remote_rules()?;
        report.stage = SyncStage::RulesCleared;

        let known_labels = labels.len();
        for (index, rule) in rules.iter().enumerate() {
            self.checkpoint(report.stage)?;
            let created = self
                .create_rule(rule, &mut labels)
                .map_err(|e| e.in_rule(index + 1, rule.describe()))?;
            report.remote_rules_created += created;
            report.rules += 1;
        }
        report.labels_created = labels.len().saturating_sub(known_labels);
        report.stage = SyncStage::RulesApplied;

        info!(
            rules = report.rules,
            created = report.remote_rules_created,
            deleted = report.remote_rules_deleted,
            "Applied filters"
        );
        report.stage = SyncStage::Done;
        Ok(report)
    }

    /// Export the remote filters to a filter file
    ///
    /// # Errors
    ///
    /// Returns an error if labels or filters cannot be listed, or the file
    /// cannot be written.
    pub fn export(&self, path: &Path) -> Result<ExportReport> {
        let (rules, mut report) = self.export_rules()?;
        self.checkpoint(report.stage)?;

        save_filters(path, &rules)?;
        report.stage = SyncStage::Exported;
        info!(path = %path.display(), rules = rules.len(), "Exported filters");

        report.stage = SyncStage::Done;
        Ok(report)
    }

    /// List and decompile the remote filters without writing them anywhere
    pub fn export_rules(&self) -> Result<(Vec<Rule>, ExportReport)> {
        let mut report = ExportReport::default();

        let labels = self.load_labels()?;
        report.stage = SyncStage::LabelsLoaded;

        let remote = self.list_remote_rules()?;
        report.remote_rules = remote.len();
        report.stage = SyncStage::RulesListed;

        let rules = decompile(&remote, &labels);
        report.rules = rules.len();
        Ok((rules, report))
    }

    fn checkpoint(&self, stage: SyncStage) -> Result<()> {
        if self.cancel.is_cancelled() {
            warn!(stage = %stage, "Sync cancelled");
            return Err(Error::Cancelled { stage });
        }
        Ok(())
    }

    fn load_labels(&self) -> Result<LabelMap> {
        let labels = LabelMap::load(&self.service)?;
        debug!(labels = labels.len(), "Loaded labels");
        Ok(labels)
    }

    fn list_remote_rules(&self) -> Result<Vec<RemoteRule>> {
        self.service
            .list_rules()
            .map_err(|e| Error::RemoteRuleListingFailed {
                source: Error::remote(e),
            })
    }

    /// Delete every remote filter, returning how many were deleted
    fn clear_remote_rules(&self) -> Result<usize> {
        let existing = self.list_remote_rules()?;
        let mut deleted = 0;

        for remote in &existing {
            let Some(id) = remote.id.as_deref() else {
                warn!(query = %remote.criteria.query, "Listed filter has no id, cannot delete");
                continue;
            };

            self.service
                .delete_rule(id)
                .map_err(|e| Error::RemoteRuleDeletionFailed {
                    id: id.to_string(),
                    source: Error::remote(e),
                })?;
            info!(id = id, query = %remote.criteria.query, "Deleted filter");
            deleted += 1;
        }

        Ok(deleted)
    }

    /// Compile one rule and create its remote filters, returning how many
    fn create_rule(&self, rule: &Rule, labels: &mut LabelMap) -> Result<usize> {
        let compiled = compile(rule, labels, &self.service)?;

        for remote in &compiled {
            let id = self
                .service
                .create_rule(remote)
                .map_err(|e| Error::RemoteRuleCreationFailed {
                    query: remote.criteria.query.clone(),
                    source: Error::remote(e),
                })?;
            info!(id = %id, query = %remote.criteria.query, "Created filter");
        }

        Ok(compiled.len())
    }
}
