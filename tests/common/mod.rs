//! Common test utilities for the proxy
//!
//! Shared fixtures and helpers used across the integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use chat_proxy::proxy::MockProvider;
use chat_proxy::types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Choice, Usage};
use chat_proxy::{create_router, AppState, ChatProvider, Config};

/// Test configuration constants
pub mod constants {
    /// Default test API key for OpenAI
    pub const TEST_OPENAI_API_KEY: &str = "test-openai-api-key";
    /// Completion id returned by the canned response
    pub const TEST_COMPLETION_ID: &str = "chatcmpl-test123";
    /// Model used throughout the fixtures
    pub const TEST_MODEL: &str = "gpt-3.5-turbo";
}

/// Build a config pointing at `openai_url`
pub fn test_config(openai_url: &str) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0, // Let OS assign port
        openai_api_url: openai_url.to_string(),
        openai_api_key: constants::TEST_OPENAI_API_KEY.to_string(),
    }
}

/// The request most tests send
pub fn test_chat_request() -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: constants::TEST_MODEL.to_string(),
        messages: vec![ChatMessage::new("user", "Hello, how are you?")],
        temperature: Some(0.7),
        ..Default::default()
    }
}

/// A single-choice completion as the provider would return it
pub fn test_chat_response() -> ChatCompletionResponse {
    ChatCompletionResponse {
        id: constants::TEST_COMPLETION_ID.to_string(),
        object: "chat.completion".to_string(),
        created: 1706745600,
        model: constants::TEST_MODEL.to_string(),
        choices: vec![Choice {
            index: 0,
            message: ChatMessage::new(
                "assistant",
                "Hello! I'm doing well, thank you for asking. How can I help you today?",
            ),
            finish_reason: "stop".to_string(),
        }],
        usage: Usage {
            prompt_tokens: 12,
            completion_tokens: 20,
            total_tokens: 32,
        },
    }
}

/// Start a test server over the real router with the given provider
pub fn server_with_provider(provider: Arc<dyn ChatProvider>) -> TestServer {
    let state = AppState::new_for_testing(test_config("http://localhost:0"), provider);
    TestServer::new(create_router(Arc::new(state))).expect("Failed to create test server")
}

/// Start a test server whose provider always succeeds; the mock is returned
/// so call counts can be checked
pub fn server_with_success() -> (TestServer, Arc<MockProvider>) {
    let provider = Arc::new(MockProvider::responding(test_chat_response()));
    (server_with_provider(provider.clone()), provider)
}

/// Start a test server whose provider always fails with `message`
pub fn server_with_failure(message: &str) -> (TestServer, Arc<MockProvider>) {
    let provider = Arc::new(MockProvider::failing(message));
    (server_with_provider(provider.clone()), provider)
}
