//! Proxy module
//!
//! Handles request forwarding to the upstream chat completion provider.

pub mod headers;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod openai;
pub mod provider;

#[cfg(any(test, feature = "test-utils"))]
pub use mock::MockProvider;
pub use openai::OpenAIProvider;
pub use provider::{ChatProvider, UpstreamError};
