use crate::config::UpstreamConfig;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("document URL is not configured")]
    NotConfigured,

    #[error("upstream returned status {0}")]
    Status(StatusCode),

    #[error("upstream request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Fetches documents from the case-management API.
pub struct DocumentClient {
    client: Client,
    base_url: Option<String>,
}

impl DocumentClient {
    pub fn new(client: Client, config: &UpstreamConfig) -> Self {
        Self {
            client,
            base_url: config.document_url.clone(),
        }
    }

    /// The configured base URL is used as a plain prefix, so it normally
    /// ends with `/`.
    pub fn document_url(&self, tenant_id: &str, document_key: &str) -> Option<String> {
        self.base_url
            .as_deref()
            .map(|base| format!("{base}{tenant_id}/{document_key}"))
    }

    pub async fn fetch(
        &self,
        tenant_id: &str,
        document_key: &str,
        token: &str,
    ) -> Result<Value, UpstreamError> {
        let url = self
            .document_url(tenant_id, document_key)
            .ok_or(UpstreamError::NotConfigured)?;

        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status));
        }

        Ok(response.json().await?)
    }
}
