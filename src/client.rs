use crate::config::Config;
use crate::error::{ProbeError, Result};
use crate::types::{ChatMessageRequest, ChatReply};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use tracing::{debug, info};

#[allow(clippy::module_name_repetitions)]
pub struct DifyClient {
    http: reqwest::Client,
    config: Config,
}

impl DifyClient {
    #[must_use]
    pub fn new(config: Config) -> Self {
        info!("Initializing Dify client for {}", config.base_url());
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> String {
        self.config.endpoint()
    }

    /// Sends one chat message and classifies the outcome.
    ///
    /// # Errors
    /// `ProbeError::Api` for a non-success status, `ProbeError::Connect` when
    /// the transport never delivered a response, `ProbeError::Other` for the
    /// rest. A success status with a non-JSON body is not an error.
    pub async fn send(&self, request: &ChatMessageRequest) -> Result<ChatReply> {
        let url = self.config.endpoint();
        debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(
                AUTHORIZATION,
                format!("Bearer {}", self.config.api_key()),
            )
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("Unknown").to_string();
            // Error bodies are best-effort; the status alone is already useful.
            let body = response.text().await.unwrap_or_default();
            return Err(ProbeError::Api {
                status: status.as_u16(),
                reason,
                body,
            });
        }

        let body = response.text().await?;
        debug!("Received {} byte response", body.len());
        Ok(ChatReply::from_body(status.as_u16(), body))
    }
}
