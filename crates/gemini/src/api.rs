//! REST API client for the Gemini `generateContent` endpoint.
//!
//! Wraps the Gemini HTTP API using [`reqwest`]. One attempt per call --
//! retries, backoff, and rate-limit handling are out of scope here; the
//! enhancer answers every failure with its static fallback instead.

use serde::{Deserialize, Serialize};

/// Default public Gemini API base URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// HTTP client for the Gemini generative-text API.
pub struct GeminiApi {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

/// Request body for `POST /v1beta/models/{model}:generateContent`.
#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

/// Response body for a successful `generateContent` call.
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

/// Errors from the Gemini REST layer.
#[derive(Debug, thiserror::Error)]
pub enum GeminiApiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Gemini returned a non-2xx status code.
    #[error("Gemini API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The response parsed but contained no usable candidate text.
    #[error("Gemini response contained no candidate text")]
    EmptyResponse,
}

impl GeminiApi {
    /// Create a client for the public Gemini API.
    pub fn new(api_key: String, model: String) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string(), api_key, model)
    }

    /// Create a client against a non-default base URL (local mock
    /// servers in tests, proxies).
    pub fn with_base_url(base_url: String, api_key: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key,
            model,
        }
    }

    /// Model identifier this client targets (e.g. `gemini-2.5-flash`).
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generate text for a single prompt.
    ///
    /// Sends `POST /v1beta/models/{model}:generateContent` and returns
    /// the first candidate's text verbatim, with no post-validation of
    /// its structure.
    pub async fn generate_content(&self, prompt: &str) -> Result<String, GeminiApiError> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        tracing::debug!(model = %self.model, "Sending generateContent request");

        let response = self
            .client
            .post(format!(
                "{}/v1beta/models/{}:generateContent",
                self.base_url, self.model
            ))
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(GeminiApiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed = response.json::<GenerateContentResponse>().await?;
        candidate_text(parsed)
    }
}

/// Extract the first candidate's concatenated part text.
///
/// Gemini responses may legally contain zero candidates (e.g. all
/// blocked by safety filters) or candidates with empty content; both
/// map to [`GeminiApiError::EmptyResponse`].
fn candidate_text(response: GenerateContentResponse) -> Result<String, GeminiApiError> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or(GeminiApiError::EmptyResponse)?;

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.is_empty() {
        return Err(GeminiApiError::EmptyResponse);
    }
    Ok(text)
}
