//! HTTP client for the enhancement service.
//!
//! One `POST /api/enhance` per submission, single attempt. Any failure
//! (unreachable service, non-2xx, body that does not parse) surfaces as
//! a [`ClientError`]; the session maps all of them to the same fixed
//! placeholder.

use enhancer_core::types::{EnhanceRequest, EnhanceResponse};

/// Errors from the client HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request failed in transit, or the 200 body did not parse.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-2xx status code.
    #[error("Enhancement service error ({status})")]
    Status {
        /// HTTP status code.
        status: u16,
    },
}

/// Client for one enhancement service instance.
pub struct EnhanceClient {
    client: reqwest::Client,
    base_url: String,
}

impl EnhanceClient {
    /// Create a client targeting a service base URL, e.g.
    /// `http://localhost:5000`.
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Submit an idea and return the enhanced prompt text.
    pub async fn enhance(&self, idea: &str) -> Result<String, ClientError> {
        let body = EnhanceRequest {
            idea: idea.to_string(),
        };

        let response = self
            .client
            .post(format!("{}/api/enhance", self.base_url))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
            });
        }

        let parsed = response.json::<EnhanceResponse>().await?;
        Ok(parsed.enhanced_prompt)
    }
}
