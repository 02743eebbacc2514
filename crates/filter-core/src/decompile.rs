//! Remote rule to declarative rule decompilation
//!
//! Best-effort inverse of [`crate::compile`], used for export. Only state
//! produced by the compiler is guaranteed to come back as the rule that
//! produced it. Queries joined from `queryOr` come back as a single query.

use tracing::{debug, warn};

use crate::labels::LabelMap;
use crate::model::remote::{INBOX, NOT_TO_ME, TO_ME, TRASH, UNREAD};
use crate::model::{RemoteRule, Rule};

/// Decompile a listing of remote rules into declarative rules
///
/// Remote rules sharing a query with an earlier one are folded into it as
/// the two halves of an archive-unless-to-me rule. Two independently
/// authored rules with the same literal query are merged the same way.
pub fn decompile(remote: &[RemoteRule], labels: &LabelMap) -> Vec<Rule> {
    let mut rules: Vec<Rule> = Vec::new();

    for remote_rule in remote {
        if remote_rule.criteria.query.is_empty() {
            warn!(
                id = remote_rule.id.as_deref().unwrap_or("<none>"),
                "Skipping remote filter without a query"
            );
            continue;
        }

        let rule = decompile_one(remote_rule, labels);

        if let Some(existing) = rules.iter_mut().find(|r| r.query == rule.query) {
            debug!(query = %rule.query, "Merging archive-unless-to-me pair");
            existing.archive = false;
            existing.delete = false;
            existing.to_me = false;
            existing.archive_unless_to_me = true;
            continue;
        }

        rules.push(rule);
    }

    rules
}

fn decompile_one(remote: &RemoteRule, labels: &LabelMap) -> Rule {
    let mut rule = Rule::with_query(remote.criteria.query.clone());
    rule.to_me = remote.criteria.to == TO_ME;

    for id in &remote.action.add_label_ids {
        if id == TRASH {
            rule.delete = true;
        } else if rule.label.is_none() {
            match labels.name_of(id) {
                Some(name) => rule.label = Some(name.to_string()),
                None => warn!(id = %id, query = %rule.query, "Unknown label on remote filter"),
            }
        }
    }

    for id in &remote.action.remove_label_ids {
        match id.as_str() {
            UNREAD => rule.read = true,
            INBOX if remote.criteria.negated_query == NOT_TO_ME => {
                rule.archive_unless_to_me = true;
            }
            INBOX => rule.archive = true,
            _ => {}
        }
    }

    if !remote.action.forward.is_empty() {
        rule.forward_to = Some(remote.action.forward.clone());
    }

    rule
}
