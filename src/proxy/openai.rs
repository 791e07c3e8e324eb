//! OpenAI provider
//!
//! Forwards chat completion requests to the OpenAI REST API.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use tracing::{debug, error, instrument};

use super::headers::build_default_headers;
use super::provider::{ChatProvider, UpstreamError};
use crate::config::Config;
use crate::types::{ChatCompletionRequest, ChatCompletionResponse, ProviderErrorResponse};

/// OpenAI chat completion client
pub struct OpenAIProvider {
    client: reqwest::Client,
    base_url: String,
    headers: HeaderMap,
}

impl OpenAIProvider {
    /// Create a new OpenAI provider
    ///
    /// Fails if the configured API key cannot be carried in an HTTP header.
    pub fn new(client: reqwest::Client, config: &Config) -> Result<Self> {
        let headers = build_default_headers(&config.openai_api_key)
            .context("OPENAI_API_KEY contains characters not allowed in an HTTP header")?;

        Ok(Self {
            client,
            base_url: config.openai_api_url.trim_end_matches('/').to_string(),
            headers,
        })
    }

    fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl ChatProvider for OpenAIProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    #[instrument(skip(self, request), fields(model = %request.model))]
    async fn create_chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, UpstreamError> {
        let body = serde_json::to_vec(request).map_err(UpstreamError::Serialize)?;
        let url = self.chat_completions_url();

        debug!(url = %url, body_len = body.len(), "Sending request to OpenAI");

        let response = self
            .client
            .post(&url)
            .headers(self.headers.clone())
            .body(body)
            .send()
            .await
            .map_err(|e| {
                error!(url = %url, error = %e, "Failed to send request to OpenAI");
                UpstreamError::Transport(e)
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(UpstreamError::ReadBody)?;

        debug!(status = %status, body_len = body.len(), "Received response from OpenAI");

        if !status.is_success() {
            return Err(upstream_error(status.as_u16(), &body));
        }

        serde_json::from_slice(&body).map_err(UpstreamError::Deserialize)
    }
}

/// Interpret a non-success response body
///
/// The provider's own message is preferred; anything that is not a
/// provider error envelope is reported with the raw status and body.
fn upstream_error(status: u16, body: &[u8]) -> UpstreamError {
    match serde_json::from_slice::<ProviderErrorResponse>(body) {
        Ok(parsed) => UpstreamError::Api {
            message: parsed.error.message,
        },
        Err(_) => UpstreamError::Status {
            status,
            body: String::from_utf8_lossy(body).into_owned(),
        },
    }
}
