//! Integration tests for the chat proxy
//!
//! These tests drive the real router end to end, with the provider either
//! replaced by an in-process double or pointed at a wiremock server.

mod health;
