//! Error types for filter-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from filter-core
    #[error(transparent)]
    Core(#[from] filter_core::Error),

    /// Error from the Gmail client
    #[error(transparent)]
    Gmail(#[from] filter_gmail::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }

    /// Whether the run stopped because of an interrupt
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Core(e) if matches!(e.root(), filter_core::Error::Cancelled { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filter_core::{Error, SyncStage};

    #[test]
    fn test_cancelled_is_detected_through_rule_context() {
        let error = CliError::from(
            Error::Cancelled {
                stage: SyncStage::RulesCleared,
            }
            .in_rule(2, "from:a@x.com"),
        );
        assert!(error.is_cancelled());
        assert!(!CliError::user("nope").is_cancelled());
    }
}
