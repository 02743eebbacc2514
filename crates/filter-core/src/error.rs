//! Error types for filter-core

use std::path::PathBuf;

use crate::sync::SyncStage;

/// Result type for filter-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error returned by a [`crate::MailService`] implementation
pub type RemoteError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur in filter-core operations
///
/// Every variant is terminal for the current run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Both `query` and `queryOr` are set on a rule
    #[error("rule sets both query {query:?} and queryOr {query_or:?}")]
    ConflictingQuery { query: String, query_or: Vec<String> },

    /// Neither `query` nor `queryOr` yields a predicate
    #[error("rule has an empty query")]
    EmptyQuery,

    /// Listing the remote labels failed
    #[error("listing labels failed: {source}")]
    LabelListingFailed {
        #[source]
        source: RemoteError,
    },

    /// Creating a missing label failed
    #[error("creating label {name} failed: {source}")]
    LabelCreationFailed {
        name: String,
        #[source]
        source: RemoteError,
    },

    /// Creating a remote rule failed
    #[error("creating remote filter for query {query:?} failed: {source}")]
    RemoteRuleCreationFailed {
        query: String,
        #[source]
        source: RemoteError,
    },

    /// Listing the remote rules failed
    #[error("listing remote filters failed: {source}")]
    RemoteRuleListingFailed {
        #[source]
        source: RemoteError,
    },

    /// Deleting a remote rule failed
    #[error("deleting remote filter {id} failed: {source}")]
    RemoteRuleDeletionFailed {
        id: String,
        #[source]
        source: RemoteError,
    },

    /// The filter file could not be read
    #[error("reading filter file {path} failed: {source}")]
    FileReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The filter file could not be parsed
    #[error("failed to parse {format} filter file {path}: {message}")]
    FileDecodeFailed {
        path: PathBuf,
        format: String,
        message: String,
    },

    /// The filter collection could not be serialized
    #[error("failed to encode {format} filter file {path}: {message}")]
    FileEncodeFailed {
        path: PathBuf,
        format: String,
        message: String,
    },

    /// The filter file could not be written
    #[error("writing filter file {path} failed: {source}")]
    FileWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The filter file extension names no supported format
    #[error("unsupported filter file format: {extension:?}")]
    UnsupportedFormat { extension: String },

    /// The run was cancelled before the named stage completed
    #[error("cancelled after stage: {stage}")]
    Cancelled { stage: SyncStage },

    /// A rule in the filter file failed to compile or be created
    #[error("filter #{index} ({query}): {source}")]
    Rule {
        /// 1-based position in the filter file
        index: usize,
        query: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Attach the position and query of the rule that failed
    pub fn in_rule(self, index: usize, query: impl Into<String>) -> Self {
        Self::Rule {
            index,
            query: query.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, unwrapping [`Error::Rule`] context
    pub fn root(&self) -> &Error {
        match self {
            Self::Rule { source, .. } => source.root(),
            other => other,
        }
    }

    pub(crate) fn remote<E>(source: E) -> RemoteError
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Box::new(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_context_names_query() {
        let error = Error::EmptyQuery.in_rule(3, "from:a@b.com");
        let display = error.to_string();

        assert!(display.contains("#3"), "got: {}", display);
        assert!(display.contains("from:a@b.com"), "got: {}", display);
        assert!(matches!(error.root(), Error::EmptyQuery));
    }

    #[test]
    fn test_deletion_failure_names_stage() {
        let source = std::io::Error::other("boom");
        let error = Error::RemoteRuleDeletionFailed {
            id: "abc".to_string(),
            source: Error::remote(source),
        };
        assert_eq!(error.to_string(), "deleting remote filter abc failed: boom");
    }
}
