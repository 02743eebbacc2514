//! Filter translation engine for gmailfilters
//!
//! This crate maps a compact, human-authored filter file onto the rule model
//! of a remote mail-filtering service and back:
//!
//! - **LabelMap**: Case-insensitive label name resolution, creating missing labels
//! - **compile**: One declarative [`Rule`] to one or two [`RemoteRule`]s
//! - **decompile**: Remote rules back to declarative rules, for export
//! - **SyncEngine**: Full-replace apply and export against a [`MailService`]
//!
//! # Architecture
//!
//! ```text
//!                 filter-cli
//!                     |
//!        +------------+------------+
//!        |                         |
//!   filter-core  <-- MailService --  filter-gmail
//! ```
//!
//! # Example
//!
//! ```ignore
//! use filter_core::{Rule, SyncEngine};
//!
//! let engine = SyncEngine::new(service);
//! let report = engine.apply_rules(&[Rule::with_query("list:dev@lists.example.com")])?;
//! ```

pub mod compile;
pub mod decompile;
pub mod error;
pub mod labels;
pub mod model;
pub mod service;
pub mod store;
pub mod sync;

pub use compile::compile;
pub use decompile::decompile;
pub use error::{Error, RemoteError, Result};
pub use labels::LabelMap;
pub use model::{Action, Criteria, FilterFile, RemoteLabel, RemoteRule, Rule};
pub use service::MailService;
pub use store::{Format, load_filters, save_filters};
pub use sync::{CancelFlag, ExportReport, SyncEngine, SyncReport, SyncStage};
