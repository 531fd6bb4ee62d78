use std::time::Duration;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;
use crate::error::{AppError, PublishError, Result};
use super::HttpClient;

/// [`HttpClient`] backed by `reqwest`, single attempt per call.
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn post_json(&self, url: &str, body: &Value) -> std::result::Result<(), PublishError> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| PublishError::Transport {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        debug!(url, status = %status, "Sink responded");

        if status.is_success() {
            Ok(())
        } else {
            Err(PublishError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            })
        }
    }
}
