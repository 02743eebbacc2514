//! Label resolution
//!
//! The [`LabelMap`] caches the account's labels for one run, keyed by
//! lower-cased name. Compiling a rule that names an unknown label creates it
//! remotely and records it, so later rules in the same run reuse it.

use std::collections::HashMap;

use tracing::info;

use crate::model::RemoteLabel;
use crate::{Error, MailService, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
struct LabelEntry {
    id: String,
    name: String,
}

/// Run-scoped mapping from label name to remote label identifier
///
/// Lookups are case-insensitive. The original-case name is kept so that
/// identifiers can be mapped back to the name the user sees.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelMap {
    by_name: HashMap<String, LabelEntry>,
}

impl LabelMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the account's labels from the service
    ///
    /// # Errors
    ///
    /// Returns [`Error::LabelListingFailed`] if the listing call fails.
    pub fn load<S: MailService + ?Sized>(service: &S) -> Result<Self> {
        let labels = service
            .list_labels()
            .map_err(|e| Error::LabelListingFailed {
                source: Error::remote(e),
            })?;
        Ok(labels.into_iter().collect())
    }

    /// Record a label, replacing any entry with the same name
    pub fn insert(&mut self, name: impl Into<String>, id: impl Into<String>) {
        let name = name.into();
        self.by_name.insert(
            name.to_lowercase(),
            LabelEntry {
                id: id.into(),
                name,
            },
        );
    }

    /// Look up a label identifier by name, ignoring case
    pub fn get(&self, name: &str) -> Option<&str> {
        self.by_name
            .get(&name.to_lowercase())
            .map(|entry| entry.id.as_str())
    }

    /// Look up a label name by identifier
    pub fn name_of(&self, id: &str) -> Option<&str> {
        self.by_name
            .values()
            .find(|entry| entry.id == id)
            .map(|entry| entry.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Resolve a label name to its identifier, creating the label if needed
    ///
    /// A known name returns its identifier without calling the service. An
    /// unknown name is created remotely with its original case and recorded
    /// under its lower-cased key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LabelCreationFailed`] if the creation call fails.
    /// The map is left unchanged in that case.
    pub fn resolve<S: MailService + ?Sized>(&mut self, name: &str, service: &S) -> Result<String> {
        if let Some(id) = self.get(name) {
            return Ok(id.to_string());
        }

        let id = service
            .create_label(name)
            .map_err(|e| Error::LabelCreationFailed {
                name: name.to_string(),
                source: Error::remote(e),
            })?;
        info!(label = name, id = %id, "Created label");

        self.insert(name, id.clone());
        Ok(id)
    }
}

impl FromIterator<RemoteLabel> for LabelMap {
    fn from_iter<I: IntoIterator<Item = RemoteLabel>>(iter: I) -> Self {
        let mut map = Self::new();
        for label in iter {
            map.insert(label.name, label.id);
        }
        map
    }
}

impl<N: Into<String>, I: Into<String>> Extend<(N, I)> for LabelMap {
    fn extend<T: IntoIterator<Item = (N, I)>>(&mut self, iter: T) {
        for (name, id) in iter {
            self.insert(name, id);
        }
    }
}
