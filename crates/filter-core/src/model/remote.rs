//! The remote service's native filter model
//!
//! Field names follow the Gmail settings API so the same types travel over
//! the wire unchanged.

use serde::{Deserialize, Serialize};

/// System label removed to archive mail
pub const INBOX: &str = "INBOX";
/// System label removed to mark mail as read
pub const UNREAD: &str = "UNREAD";
/// System label added to delete mail
pub const TRASH: &str = "TRASH";
/// `Criteria::to` value matching mail addressed to the account owner
pub const TO_ME: &str = "me";
/// `Criteria::negated_query` value matching mail not addressed to the owner
pub const NOT_TO_ME: &str = "to:me";

/// Whether `id` names a built-in mailbox state rather than a user label
pub fn is_system_label(id: &str) -> bool {
    matches!(id, INBOX | UNREAD | TRASH)
}

/// What a remote rule matches
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Criteria {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub query: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub to: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub negated_query: String,
}

/// What a remote rule does to matching mail
///
/// Both label lists are always serialized, even when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Action {
    pub add_label_ids: Vec<String>,
    pub remove_label_ids: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub forward: String,
}

impl Action {
    /// Append `id` to the added labels, keeping set semantics
    pub fn add_label(&mut self, id: impl Into<String>) {
        push_unique(&mut self.add_label_ids, id.into());
    }

    /// Append `id` to the removed labels, keeping set semantics
    pub fn remove_label(&mut self, id: impl Into<String>) {
        push_unique(&mut self.remove_label_ids, id.into());
    }

    pub fn removes(&self, id: &str) -> bool {
        self.remove_label_ids.iter().any(|l| l == id)
    }

    pub fn adds(&self, id: &str) -> bool {
        self.add_label_ids.iter().any(|l| l == id)
    }
}

fn push_unique(ids: &mut Vec<String>, id: String) {
    if !ids.contains(&id) {
        ids.push(id);
    }
}

/// A service-native filter: a criteria/action pair
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteRule {
    /// Service-assigned identifier; `None` for rules not yet created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub criteria: Criteria,
    pub action: Action,
}

impl RemoteRule {
    pub fn new(criteria: Criteria, action: Action) -> Self {
        Self {
            id: None,
            criteria,
            action,
        }
    }

    /// Attach the identifier the service assigned
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// A label as listed by the remote service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteLabel {
    pub id: String,
    pub name: String,
}

impl RemoteLabel {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_action_keeps_label_lists() {
        let value = serde_json::to_value(Action::default()).unwrap();
        assert_eq!(value, json!({"addLabelIds": [], "removeLabelIds": []}));
    }

    #[test]
    fn test_criteria_omits_empty_fields() {
        let criteria = Criteria {
            query: "list:x@y.com".to_string(),
            negated_query: NOT_TO_ME.to_string(),
            ..Criteria::default()
        };
        let value = serde_json::to_value(criteria).unwrap();
        assert_eq!(value, json!({"query": "list:x@y.com", "negatedQuery": "to:me"}));
    }

    #[test]
    fn test_listed_rule_ignores_unknown_fields() {
        let value = json!({
            "id": "ANe1Bmj",
            "criteria": {"from": "a@b.com", "query": "foo", "size": 10},
            "action": {"addLabelIds": ["Label_1"]}
        });
        let rule: RemoteRule = serde_json::from_value(value).unwrap();

        assert_eq!(rule.id.as_deref(), Some("ANe1Bmj"));
        assert_eq!(rule.criteria.query, "foo");
        assert_eq!(rule.action.add_label_ids, vec!["Label_1"]);
        assert!(rule.action.remove_label_ids.is_empty());
    }

    #[test]
    fn test_label_lists_are_sets() {
        let mut action = Action::default();
        action.remove_label(INBOX);
        action.remove_label(UNREAD);
        action.remove_label(INBOX);
        assert_eq!(action.remove_label_ids, vec![INBOX, UNREAD]);
    }

    #[test]
    fn test_system_labels() {
        assert!(is_system_label(INBOX));
        assert!(is_system_label(TRASH));
        assert!(!is_system_label("Label_42"));
    }
}
