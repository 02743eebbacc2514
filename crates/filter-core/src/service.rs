//! Capability surface of the remote mail-filtering service
//!
//! The core never talks to the network itself. Everything it needs from the
//! service goes through [`MailService`], which the Gmail client implements
//! and tests replace with an in-memory fake.

use crate::model::{RemoteLabel, RemoteRule};

/// Remote operations consumed by the compiler and the sync engine
///
/// Calls are made sequentially; each completes before the next one starts.
/// Implementations own retry and timeout policy.
pub trait MailService {
    /// Error type of the underlying transport
    type Error: std::error::Error + Send + Sync + 'static;

    /// List every label in the account
    fn list_labels(&self) -> Result<Vec<RemoteLabel>, Self::Error>;

    /// Create a label with the given name and return its identifier
    fn create_label(&self, name: &str) -> Result<String, Self::Error>;

    /// List every filter in the account
    fn list_rules(&self) -> Result<Vec<RemoteRule>, Self::Error>;

    /// Create a filter and return its identifier
    fn create_rule(&self, rule: &RemoteRule) -> Result<String, Self::Error>;

    /// Delete the filter with the given identifier
    fn delete_rule(&self, id: &str) -> Result<(), Self::Error>;
}

impl<S: MailService + ?Sized> MailService for &S {
    type Error = S::Error;

    fn list_labels(&self) -> Result<Vec<RemoteLabel>, Self::Error> {
        (**self).list_labels()
    }

    fn create_label(&self, name: &str) -> Result<String, Self::Error> {
        (**self).create_label(name)
    }

    fn list_rules(&self) -> Result<Vec<RemoteRule>, Self::Error> {
        (**self).list_rules()
    }

    fn create_rule(&self, rule: &RemoteRule) -> Result<String, Self::Error> {
        (**self).create_rule(rule)
    }

    fn delete_rule(&self, id: &str) -> Result<(), Self::Error> {
        (**self).delete_rule(id)
    }
}
