//! [`FakeMailbox`]: an in-memory remote service for tests.
//!
//! Holds labels and filters, records every call in order, and can be told to
//! fail specific calls.

use std::cell::RefCell;

use filter_core::{MailService, RemoteLabel, RemoteRule};

/// Error returned by injected failures
#[derive(Debug, thiserror::Error)]
#[error("fake mailbox: {0}")]
pub struct FakeError(pub String);

/// A recorded call against the fake
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListLabels,
    CreateLabel(String),
    ListRules,
    CreateRule(RemoteRule),
    DeleteRule(String),
}

#[derive(Debug, Default)]
struct Failures {
    list_labels: bool,
    list_rules: bool,
    create_label: Option<String>,
    delete_rule: Option<String>,
    /// Number of rule creations allowed to succeed before failing
    create_rule_after: Option<usize>,
}

#[derive(Debug, Default)]
struct State {
    labels: Vec<RemoteLabel>,
    rules: Vec<RemoteRule>,
    calls: Vec<Call>,
    next_id: usize,
    rules_created: usize,
    failures: Failures,
}

impl State {
    fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{}_{}", prefix, self.next_id)
    }
}

/// In-memory [`MailService`]
///
/// # Example
///
/// ```rust,no_run
/// use filter_test_utils::FakeMailbox;
///
/// let mailbox = FakeMailbox::new().with_label("Lists/x", "1");
/// assert_eq!(mailbox.create_label_calls(), 0);
/// ```
#[derive(Debug, Default)]
pub struct FakeMailbox {
    state: RefCell<State>,
}

impl FakeMailbox {
    /// Create an empty mailbox
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an existing label
    pub fn with_label(self, name: &str, id: &str) -> Self {
        self.state
            .borrow_mut()
            .labels
            .push(RemoteLabel::new(id, name));
        self
    }

    /// Seed an existing filter, assigning an id if it has none
    pub fn with_rule(self, rule: RemoteRule) -> Self {
        {
            let mut state = self.state.borrow_mut();
            let rule = match rule.id {
                Some(_) => rule,
                None => {
                    let id = state.next_id("filter");
                    rule.with_id(id)
                }
            };
            state.rules.push(rule);
        }
        self
    }

    /// Make `list_labels` fail
    pub fn fail_label_listing(self) -> Self {
        self.state.borrow_mut().failures.list_labels = true;
        self
    }

    /// Make `list_rules` fail
    pub fn fail_rule_listing(self) -> Self {
        self.state.borrow_mut().failures.list_rules = true;
        self
    }

    /// Make `create_label` fail for the given name
    pub fn fail_label_creation(self, name: &str) -> Self {
        self.state.borrow_mut().failures.create_label = Some(name.to_string());
        self
    }

    /// Make `delete_rule` fail for the given id
    pub fn fail_rule_deletion(self, id: &str) -> Self {
        self.state.borrow_mut().failures.delete_rule = Some(id.to_string());
        self
    }

    /// Let `count` rule creations succeed, then fail every later one
    pub fn fail_rule_creation_after(self, count: usize) -> Self {
        self.state.borrow_mut().failures.create_rule_after = Some(count);
        self
    }

    /// Labels currently in the mailbox
    pub fn labels(&self) -> Vec<RemoteLabel> {
        self.state.borrow().labels.clone()
    }

    /// Filters currently in the mailbox
    pub fn rules(&self) -> Vec<RemoteRule> {
        self.state.borrow().rules.clone()
    }

    /// Every call made so far, in order
    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    /// Number of `create_label` calls made so far
    pub fn create_label_calls(&self) -> usize {
        self.state
            .borrow()
            .calls
            .iter()
            .filter(|c| matches!(c, Call::CreateLabel(_)))
            .count()
    }

    /// Filters passed to `create_rule`, in order
    pub fn created_rules(&self) -> Vec<RemoteRule> {
        self.state
            .borrow()
            .calls
            .iter()
            .filter_map(|c| match c {
                Call::CreateRule(rule) => Some(rule.clone()),
                _ => None,
            })
            .collect()
    }

    /// Ids passed to `delete_rule`, in order
    pub fn deleted_ids(&self) -> Vec<String> {
        self.state
            .borrow()
            .calls
            .iter()
            .filter_map(|c| match c {
                Call::DeleteRule(id) => Some(id.clone()),
                _ => None,
            })
            .collect()
    }
}

impl MailService for FakeMailbox {
    type Error = FakeError;

    fn list_labels(&self) -> Result<Vec<RemoteLabel>, FakeError> {
        let mut state = self.state.borrow_mut();
        state.calls.push(Call::ListLabels);
        if state.failures.list_labels {
            return Err(FakeError("labels unavailable".to_string()));
        }
        Ok(state.labels.clone())
    }

    fn create_label(&self, name: &str) -> Result<String, FakeError> {
        let mut state = self.state.borrow_mut();
        state.calls.push(Call::CreateLabel(name.to_string()));
        if state.failures.create_label.as_deref() == Some(name) {
            return Err(FakeError(format!("label {} rejected", name)));
        }

        let id = state.next_id("Label");
        state.labels.push(RemoteLabel::new(id.clone(), name));
        Ok(id)
    }

    fn list_rules(&self) -> Result<Vec<RemoteRule>, FakeError> {
        let mut state = self.state.borrow_mut();
        state.calls.push(Call::ListRules);
        if state.failures.list_rules {
            return Err(FakeError("filters unavailable".to_string()));
        }
        Ok(state.rules.clone())
    }

    fn create_rule(&self, rule: &RemoteRule) -> Result<String, FakeError> {
        let mut state = self.state.borrow_mut();
        state.calls.push(Call::CreateRule(rule.clone()));
        if let Some(limit) = state.failures.create_rule_after
            && state.rules_created >= limit
        {
            return Err(FakeError("filter rejected".to_string()));
        }

        let id = state.next_id("filter");
        state.rules.push(rule.clone().with_id(id.clone()));
        state.rules_created += 1;
        Ok(id)
    }

    fn delete_rule(&self, id: &str) -> Result<(), FakeError> {
        let mut state = self.state.borrow_mut();
        state.calls.push(Call::DeleteRule(id.to_string()));
        if state.failures.delete_rule.as_deref() == Some(id) {
            return Err(FakeError(format!("filter {} cannot be deleted", id)));
        }

        let before = state.rules.len();
        state.rules.retain(|r| r.id.as_deref() != Some(id));
        if state.rules.len() == before {
            return Err(FakeError(format!("filter {} not found", id)));
        }
        Ok(())
    }
}
