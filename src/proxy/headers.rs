//! Header utilities for upstream requests
//!
//! Client headers are never forwarded: the upstream only ever sees the
//! proxy's own credential and a JSON content type.

use reqwest::header::{HeaderMap, HeaderValue, InvalidHeaderValue, AUTHORIZATION, CONTENT_TYPE};

/// Build default headers for provider requests
///
/// The authorization value is marked sensitive so it is redacted from
/// `Debug` output.
pub fn build_default_headers(api_key: &str) -> Result<HeaderMap, InvalidHeaderValue> {
    let mut headers = HeaderMap::new();

    let mut auth = HeaderValue::from_str(&format!("Bearer {}", api_key))?;
    auth.set_sensitive(true);

    headers.insert(AUTHORIZATION, auth);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    Ok(headers)
}
