//! Webhook delivery.
//!
//! Orders and contact messages go to the same intake endpoint as JSON; the
//! `type` field in the payload tells the receiving workflow which branch to
//! take.

use async_trait::async_trait;
use cartkit_commerce::checkout::WebhookPayload;
use thiserror::Error;

pub use reqwest::StatusCode;

/// Webhook delivery failures.
#[derive(Error, Debug)]
pub enum WebhookError {
    /// The request never got a response.
    #[error("webhook request failed")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("webhook endpoint returned {0}")]
    Status(StatusCode),
}

/// Webhook collaborator interface.
#[async_trait]
pub trait WebhookSink: Send + Sync {
    /// Deliver one payload; success means the endpoint acknowledged it.
    async fn deliver(&self, payload: &WebhookPayload) -> Result<(), WebhookError>;
}

/// HTTP webhook client posting JSON to a fixed endpoint.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    url: String,
    client: reqwest::Client,
}

impl WebhookClient {
    /// Create a client for the given endpoint.
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    /// Create a client reusing an existing connection pool.
    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }

    /// The configured endpoint.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl WebhookSink for WebhookClient {
    async fn deliver(&self, payload: &WebhookPayload) -> Result<(), WebhookError> {
        let response = self.client.post(&self.url).json(payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WebhookError::Status(status));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_keeps_endpoint() {
        let client = WebhookClient::new("https://hooks.example/order-intake");
        assert_eq!(client.url(), "https://hooks.example/order-intake");
    }

    #[test]
    fn test_status_error_display() {
        let err = WebhookError::Status(StatusCode::BAD_GATEWAY);
        assert_eq!(err.to_string(), "webhook endpoint returned 502 Bad Gateway");
    }
}
