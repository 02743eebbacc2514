//! Stage and report types for the sync engine

use std::fmt;

use serde::{Deserialize, Serialize};

/// Progress of a sync run
///
/// Apply runs go `Idle -> LabelsLoaded -> RulesParsed -> RulesCleared ->
/// RulesApplied -> Done`; export runs go `Idle -> LabelsLoaded ->
/// RulesListed -> Exported -> Done`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SyncStage {
    #[default]
    Idle,
    LabelsLoaded,
    RulesParsed,
    RulesCleared,
    RulesApplied,
    RulesListed,
    Exported,
    Done,
}

impl fmt::Display for SyncStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::LabelsLoaded => "labels loaded",
            Self::RulesParsed => "rules parsed",
            Self::RulesCleared => "rules cleared",
            Self::RulesApplied => "rules applied",
            Self::RulesListed => "rules listed",
            Self::Exported => "exported",
            Self::Done => "done",
        };
        f.write_str(name)
    }
}

/// Report from an apply run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncReport {
    /// Last stage reached
    pub stage: SyncStage,
    /// Declarative rules applied
    pub rules: usize,
    /// Remote rules deleted before re-creation
    pub remote_rules_deleted: usize,
    /// Remote rules created
    pub remote_rules_created: usize,
    /// Labels created because a rule referenced an unknown name
    pub labels_created: usize,
}

/// Report from an export run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportReport {
    /// Last stage reached
    pub stage: SyncStage,
    /// Remote rules listed
    pub remote_rules: usize,
    /// Declarative rules produced after merging
    pub rules: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stage_is_idle() {
        assert_eq!(SyncReport::default().stage, SyncStage::Idle);
        assert_eq!(ExportReport::default().stage, SyncStage::Idle);
    }

    #[test]
    fn test_stage_display() {
        assert_eq!(SyncStage::RulesCleared.to_string(), "rules cleared");
    }
}
