//! Gmail settings API client
//!
//! Implements [`MailService`] over the Gmail REST API with a blocking
//! client. Every call is a single request; retries belong to the caller.

use filter_core::{MailService, RemoteLabel, RemoteRule};
use reqwest::blocking::{Client, Response};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::token::Token;
use crate::{Error, Result};

/// Gmail API root for the authenticated user
pub const DEFAULT_API_URL: &str = "https://gmail.googleapis.com/gmail/v1/users/me";

/// Response from labels.list
#[derive(Debug, Deserialize)]
struct LabelList {
    #[serde(default)]
    labels: Vec<RemoteLabel>,
}

/// Response from settings.filters.list; the key is absent when empty
#[derive(Debug, Deserialize)]
struct FilterList {
    #[serde(default)]
    filter: Vec<RemoteRule>,
}

/// Request body for labels.create
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NewLabel<'a> {
    name: &'a str,
    label_list_visibility: &'a str,
    message_list_visibility: &'a str,
}

/// Any created resource; only the id is read
#[derive(Debug, Deserialize)]
struct Created {
    id: String,
}

/// Blocking Gmail API client
pub struct GmailClient {
    client: Client,
    base_url: String,
    token: Token,
}

impl GmailClient {
    /// Create a client for the default API root
    pub fn new(token: Token) -> Self {
        Self {
            client: Client::new(),
            base_url: DEFAULT_API_URL.to_string(),
            token,
        }
    }

    /// Point the client at a different API root
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Turn a non-success status into [`Error::Api`]
    fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().unwrap_or_default();
        Err(Error::Api {
            status: status.as_u16(),
            body,
        })
    }

    fn get(&self, path: &str) -> Result<Response> {
        let response = self
            .client
            .get(self.url(path))
            .header("Authorization", self.token.authorization())
            .send()?;
        Self::check(response)
    }

    fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response> {
        let response = self
            .client
            .post(self.url(path))
            .header("Authorization", self.token.authorization())
            .json(body)
            .send()?;
        Self::check(response)
    }
}

impl MailService for GmailClient {
    type Error = Error;

    fn list_labels(&self) -> Result<Vec<RemoteLabel>> {
        let list: LabelList = self.get("labels")?.json()?;
        debug!(labels = list.labels.len(), "Listed labels");
        Ok(list.labels)
    }

    fn create_label(&self, name: &str) -> Result<String> {
        let body = NewLabel {
            name,
            label_list_visibility: "labelShow",
            message_list_visibility: "show",
        };
        let created: Created = self.post("labels", &body)?.json()?;
        Ok(created.id)
    }

    fn list_rules(&self) -> Result<Vec<RemoteRule>> {
        let list: FilterList = self.get("settings/filters")?.json()?;
        debug!(filters = list.filter.len(), "Listed filters");
        Ok(list.filter)
    }

    fn create_rule(&self, rule: &RemoteRule) -> Result<String> {
        let created: Created = self.post("settings/filters", rule)?.json()?;
        Ok(created.id)
    }

    fn delete_rule(&self, id: &str) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("settings/filters/{}", id)))
            .header("Authorization", self.token.authorization())
            .send()?;
        Self::check(response)?;
        Ok(())
    }
}
