//! Chat Proxy - OpenAI-compatible chat completions relay
//!
//! Validates chat completion requests and forwards them to an upstream
//! provider with the proxy's own credential, relaying the reply unchanged.

pub mod config;
pub mod error;
pub mod proxy;
pub mod routes;
pub mod types;

use std::sync::Arc;

use anyhow::Result;

pub use crate::config::Config;
pub use crate::error::{AppError, AppResult};
pub use crate::proxy::{ChatProvider, OpenAIProvider, UpstreamError};
pub use crate::routes::create_router;

/// Application state shared across all request handlers
pub struct AppState {
    pub config: Config,
    /// Provider that completion requests are forwarded to
    pub provider: Arc<dyn ChatProvider>,
}

impl AppState {
    /// Create a new application state backed by the OpenAI provider
    pub fn new(config: Config) -> Result<Self> {
        let http_client = reqwest::Client::builder().build()?;
        let provider: Arc<dyn ChatProvider> =
            Arc::new(OpenAIProvider::new(http_client, &config)?);

        Ok(Self { config, provider })
    }

    /// Create a new application state around an arbitrary provider
    #[cfg(any(test, feature = "test-utils"))]
    pub fn new_for_testing(config: Config, provider: Arc<dyn ChatProvider>) -> Self {
        Self { config, provider }
    }
}
