//! Declarative filter rules as authored in the filter file
//!
//! A [`Rule`] is the user-facing form of a filter: a search predicate plus a
//! handful of intents. It is compiled into one or two remote rules by
//! [`crate::compile`] and recovered from them by [`crate::decompile`].

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Separator used when joining `queryOr` alternatives into a single query.
pub const QUERY_OR_SEPARATOR: &str = " OR ";

/// A declarative filter rule
///
/// Exactly one of `query` and `query_or` must be non-empty when the rule is
/// compiled. Parsing never enforces that; see [`Rule::resolved_query`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Rule {
    /// Search predicate in the service's query syntax
    #[serde(skip_serializing_if = "String::is_empty")]
    pub query: String,
    /// Alternatives joined with `OR` into the query at compile time
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub query_or: Vec<String>,
    /// Remove matching mail from the inbox
    #[serde(skip_serializing_if = "is_false")]
    pub archive: bool,
    /// Mark matching mail as read
    #[serde(skip_serializing_if = "is_false")]
    pub read: bool,
    /// Move matching mail to the trash
    #[serde(skip_serializing_if = "is_false")]
    pub delete: bool,
    /// Only match mail addressed to the account owner
    #[serde(skip_serializing_if = "is_false")]
    pub to_me: bool,
    /// Archive matching mail unless it is addressed to the account owner
    #[serde(skip_serializing_if = "is_false")]
    pub archive_unless_to_me: bool,
    /// Label to apply; matched case-insensitively against existing labels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Address to forward matching mail to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forward_to: Option<String>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Rule {
    /// Create a rule matching a single query
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Create a rule matching any of the given queries
    pub fn with_query_or<I, S>(queries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            query_or: queries.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Resolve the search predicate this rule compiles to
    ///
    /// `query_or` entries are joined with [`QUERY_OR_SEPARATOR`] in input
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConflictingQuery`] if both `query` and `query_or` are
    /// set, and [`Error::EmptyQuery`] if the result is empty.
    pub fn resolved_query(&self) -> Result<String> {
        if !self.query.is_empty() && !self.query_or.is_empty() {
            return Err(Error::ConflictingQuery {
                query: self.query.clone(),
                query_or: self.query_or.clone(),
            });
        }

        let query = if self.query_or.is_empty() {
            self.query.clone()
        } else {
            self.query_or.join(QUERY_OR_SEPARATOR)
        };

        if query.is_empty() {
            return Err(Error::EmptyQuery);
        }

        Ok(query)
    }

    /// The label name, if one is set and non-empty
    pub fn label_name(&self) -> Option<&str> {
        self.label.as_deref().filter(|l| !l.is_empty())
    }

    /// The forwarding address, if one is set and non-empty
    pub fn forward_address(&self) -> Option<&str> {
        self.forward_to.as_deref().filter(|f| !f.is_empty())
    }

    /// Best-effort description used in log lines and error messages
    pub fn describe(&self) -> String {
        if !self.query.is_empty() || self.query_or.is_empty() {
            self.query.clone()
        } else {
            self.query_or.join(QUERY_OR_SEPARATOR)
        }
    }
}

/// The persisted filter document: an ordered list of rules
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterFile {
    /// Rules in file order
    #[serde(rename = "filter", default)]
    pub filters: Vec<Rule>,
}

impl FilterFile {
    pub fn new(filters: Vec<Rule>) -> Self {
        Self { filters }
    }
}
