//! Mock infrastructure for testing external services
//!
//! Provides a wiremock-backed stand-in for the OpenAI chat completions API.


pub use openai::*;
