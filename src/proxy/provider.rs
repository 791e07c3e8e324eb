//! Chat provider abstraction
//!
//! Defines the capability the completion handler depends on, so the real
//! network client and an in-process double can be swapped freely.

use async_trait::async_trait;
use thiserror::Error;

use crate::types::{ChatCompletionRequest, ChatCompletionResponse};

/// Everything that can go wrong between handing a request to a provider
/// and getting a typed response back
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("failed to marshal request: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to send request: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("failed to read response: {0}")]
    ReadBody(#[source] reqwest::Error),

    /// Non-success status with a parseable provider error body
    #[error("API error: {message}")]
    Api { message: String },

    /// Non-success status whose body was not a provider error envelope
    #[error("API error (status {status}): {body}")]
    Status { status: u16, body: String },

    #[error("failed to unmarshal response: {0}")]
    Deserialize(#[source] serde_json::Error),
}

/// Trait defining the interface for chat completion providers
///
/// # Security
///
/// Implementations MUST authenticate with their own configured credential
/// and never forward anything from the inbound request other than the body.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Get the provider name for logging
    fn name(&self) -> &'static str;

    /// Send a chat completion request and return the full response.
    async fn create_chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, UpstreamError>;
}
