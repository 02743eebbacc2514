//! Data model
//!
//! - [`rule`]: declarative rules as persisted in the filter file
//! - [`remote`]: the service's criteria/action rules and labels

pub mod remote;
pub mod rule;

pub use remote::{Action, Criteria, RemoteLabel, RemoteRule};
pub use rule::{FilterFile, Rule};
