//! Configuration management for the proxy
//!
//! Configuration is loaded once from environment variables at startup.

use anyhow::{bail, Context, Result};
use std::env;

/// Default upstream base URL
pub const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1";

/// Application configuration
#[derive(Clone)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,

    /// OpenAI API URL
    pub openai_api_url: String,
    /// OpenAI API key sent as the bearer credential upstream
    pub openai_api_key: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let openai_api_key = lookup("OPENAI_API_KEY").unwrap_or_default();
        if openai_api_key.is_empty() {
            bail!("OPENAI_API_KEY environment variable is required");
        }

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse()
                .context("Invalid PORT")?,

            openai_api_url: lookup("OPENAI_API_URL")
                .unwrap_or_else(|| DEFAULT_OPENAI_API_URL.to_string()),
            openai_api_key,
        })
    }
}

// Keep the credential out of debug logs
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("openai_api_url", &self.openai_api_url)
            .field("openai_api_key", &"<redacted>")
            .finish()
    }
}
