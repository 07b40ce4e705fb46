use anyhow::{Context, Result};

use crate::model::{ClientConfig, Document, DocumentId, DocumentPayload, SortField, SortOrder};

mod http_client;
use self::http_client::with_retries;

mod errors;
pub use self::errors::{ServerMessage, Unauthorized, is_unauthorized, server_message};

mod types;
pub use self::types::*;

mod auth;
mod files;

pub struct RemoteClient {
    base_url: String,
    token: Option<String>,
    client: reqwest::blocking::Client,
}

impl RemoteClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("cellbook")
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            base_url: config.normalized_base_url().to_string(),
            token: None,
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Token used for the `Authorization` header of resource calls.
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }
}
