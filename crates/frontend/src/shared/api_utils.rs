//! Fetch helpers for the static JSON documents the site reads.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Why a document could not be loaded. `Display` is the text shown to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadError {
    #[error("Request failed: {0}")]
    Network(String),
    #[error("HTTP error: {0}")]
    Status(u16),
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

/// GET a same-origin JSON document.
///
/// A non-success status is an error even when the body is valid JSON.
pub async fn fetch_json<T: DeserializeOwned>(path: &str) -> Result<T, LoadError> {
    let response = Request::get(path)
        .send()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;

    parse_json(&body)
}

pub fn parse_json<T: DeserializeOwned>(body: &str) -> Result<T, LoadError> {
    serde_json::from_str(body).map_err(|e| LoadError::Parse(e.to_string()))
}
