//! Bearer token for the external case-management API.
//!
//! [`TokenCache`] holds at most one token. The first `get_token` logs in with
//! basic auth and stores the result; later calls return it without touching
//! the network until `invalidate` empties the slot. Tokens never expire on
//! their own, whatever TTL the identity provider advertises.

use crate::config::UpstreamConfig;
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("login URL is not configured")]
    NotConfigured,

    #[error("login request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("authentication failed with status {0}")]
    Rejected(u16),

    #[error("login response carried no token")]
    MissingToken,
}

#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn get_token(&self) -> Result<String, AuthError>;

    /// Forgets the cached token so the next `get_token` logs in again.
    async fn invalidate(&self);
}

/// `{ token, userId }`; only the token is kept.
#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    token: Option<String>,
}

pub fn basic_credentials(username: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
}

pub struct TokenCache {
    client: Client,
    login_url: Option<String>,
    username: String,
    password: String,
    slot: RwLock<Option<String>>,
}

impl TokenCache {
    pub fn new(client: Client, config: &UpstreamConfig) -> Self {
        Self {
            client,
            login_url: config.login_url.clone(),
            username: config.username.clone(),
            password: config.password.clone(),
            slot: RwLock::new(None),
        }
    }

    async fn login(&self) -> Result<String, AuthError> {
        let url = self.login_url.as_deref().ok_or(AuthError::NotConfigured)?;
        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, basic_credentials(&self.username, &self.password))
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "upstream login rejected");
            return Err(AuthError::Rejected(status.as_u16()));
        }

        let body: LoginResponse = response.json().await?;
        body.token
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::MissingToken)
    }
}

#[async_trait]
impl TokenProvider for TokenCache {
    async fn get_token(&self) -> Result<String, AuthError> {
        if let Some(token) = self.slot.read().await.as_ref() {
            debug!("using cached upstream token");
            return Ok(token.clone());
        }

        // Not held across the login call: concurrent first requests may both
        // log in, and the last one to finish wins the slot.
        let token = self.login().await?;
        *self.slot.write().await = Some(token.clone());
        info!("cached new upstream token");
        Ok(token)
    }

    async fn invalidate(&self) {
        *self.slot.write().await = None;
        debug!("upstream token invalidated");
    }
}
