//! Declarative rule to remote rule compilation
//!
//! The service can only express a static criteria/action pair, so "archive
//! unless addressed to me" is split in two: mail to me matching the query is
//! labelled only, mail not to me matching the query is labelled and archived.

use tracing::debug;

use crate::labels::LabelMap;
use crate::model::remote::{INBOX, NOT_TO_ME, TO_ME, TRASH, UNREAD};
use crate::model::{Action, Criteria, RemoteRule, Rule};
use crate::{MailService, Result};

/// Compile one declarative rule into one or two remote rules
///
/// Labels named by the rule are resolved through `labels`, creating them on
/// `service` when missing. When `archive_unless_to_me` is set the result
/// holds the "to me" rule first and the archiving "not to me" rule second.
///
/// # Errors
///
/// Returns [`crate::Error::ConflictingQuery`] or [`crate::Error::EmptyQuery`]
/// for an invalid query, and [`crate::Error::LabelCreationFailed`] if a
/// missing label cannot be created. No remote rule is produced on error.
pub fn compile<S: MailService + ?Sized>(
    rule: &Rule,
    labels: &mut LabelMap,
    service: &S,
) -> Result<Vec<RemoteRule>> {
    let query = rule.resolved_query()?;

    let mut action = Action::default();

    if let Some(name) = rule.label_name() {
        let id = labels.resolve(name, service)?;
        action.add_label(id);
    }

    // Archiving the "to me" half would defeat archive-unless-to-me.
    if rule.archive && !rule.archive_unless_to_me {
        action.remove_label(INBOX);
    }

    if rule.read {
        action.remove_label(UNREAD);
    }

    if rule.delete {
        action.add_label(TRASH);
    }

    if let Some(address) = rule.forward_address() {
        action.forward = address.to_string();
    }

    let criteria = Criteria {
        query: query.clone(),
        to: if rule.to_me || rule.archive_unless_to_me {
            TO_ME.to_string()
        } else {
            String::new()
        },
        negated_query: String::new(),
    };

    let mut compiled = vec![RemoteRule::new(criteria, action.clone())];

    if rule.archive_unless_to_me {
        let mut archive_action = action;
        archive_action.remove_label(INBOX);

        let not_to_me = Criteria {
            query: query.clone(),
            to: String::new(),
            negated_query: NOT_TO_ME.to_string(),
        };
        compiled.push(RemoteRule::new(not_to_me, archive_action));
    }

    debug!(query = %query, rules = compiled.len(), "Compiled filter");
    Ok(compiled)
}
