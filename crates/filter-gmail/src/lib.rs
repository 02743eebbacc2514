//! Gmail settings API client for gmailfilters
//!
//! Provides [`GmailClient`], the [`filter_core::MailService`] used by the
//! binary, and [`Token`] loading from a cached OAuth token file.

pub mod client;
pub mod error;
pub mod token;

pub use client::{DEFAULT_API_URL, GmailClient};
pub use error::{Error, Result};
pub use token::Token;
