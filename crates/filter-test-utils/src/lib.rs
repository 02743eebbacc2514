//! Shared test utilities for the gmailfilters workspace.
//!
//! This crate is a dev-dependency only — never published.
//!
//! # Modules
//!
//! - [`mailbox`] — [`FakeMailbox`], an in-memory [`filter_core::MailService`]
//! - [`fixtures`] — filter files written to temporary directories

pub mod fixtures;
pub mod mailbox;

pub use fixtures::FilterDir;
pub use mailbox::{Call, FakeError, FakeMailbox};
