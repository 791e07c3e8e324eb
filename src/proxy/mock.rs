//! In-process provider double
//!
//! Returns a preconfigured response or error without any I/O and counts how
//! often it was asked, so tests can assert a request never left the proxy.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::provider::{ChatProvider, UpstreamError};
use crate::types::{ChatCompletionRequest, ChatCompletionResponse};

enum Outcome {
    Respond(ChatCompletionResponse),
    Fail(String),
}

/// Provider that answers every request with the same outcome
pub struct MockProvider {
    outcome: Outcome,
    calls: AtomicUsize,
}

impl MockProvider {
    /// Always succeed with `response`
    pub fn responding(response: ChatCompletionResponse) -> Self {
        Self {
            outcome: Outcome::Respond(response),
            calls: AtomicUsize::new(0),
        }
    }

    /// Always fail with a provider error carrying `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Fail(message.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of completion requests received so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChatProvider for MockProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn create_chat_completion(
        &self,
        _request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.outcome {
            Outcome::Respond(response) => Ok(response.clone()),
            Outcome::Fail(message) => Err(UpstreamError::Api {
                message: message.clone(),
            }),
        }
    }
}
