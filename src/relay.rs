use std::sync::OnceLock;

use reqwest::header::ACCEPT;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::RelayConfig;
use crate::contact::{ContactForm, RelayResponse};

/// Process-wide relay client, set once at server startup.
pub static GLOBAL_RELAY: OnceLock<RelayClient> = OnceLock::new();

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("relay request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("relay returned a malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Client for the third-party form relay.
#[derive(Debug, Clone)]
pub struct RelayClient {
    http: reqwest::Client,
    endpoint: String,
    access_key: String,
}

impl RelayClient {
    pub fn new(config: RelayConfig) -> Result<Self, RelayError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            endpoint: config.endpoint,
            access_key: config.access_key,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Post one submission. Exactly one request is made; nothing is retried.
    ///
    /// The relay reports rejections with a non-2xx status and a JSON body, so the
    /// body is decoded regardless of status.
    pub async fn submit(&self, form: &ContactForm) -> Result<RelayResponse, RelayError> {
        let response = self
            .http
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .form(&form.submission(&self.access_key))
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        let reply = serde_json::from_slice::<RelayResponse>(&body)?;

        if reply.success {
            info!(%status, "contact message relayed");
        } else {
            debug!(%status, message = ?reply.message, "relay rejected contact message");
        }
        Ok(reply)
    }
}
