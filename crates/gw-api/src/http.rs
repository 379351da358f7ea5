//! Shared HTTP response helpers.
//!
//! Centralizes status checks and body decoding so endpoint modules stay
//! focused on request construction.

use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Return the response unchanged on success, otherwise an [`ApiError::Api`]
/// carrying the status and the server's `error` message (or raw body).
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Api {
        status: status.as_u16(),
        message: error_message(&body),
    })
}

/// Decode a JSON body, mapping shape mismatches to [`ApiError::Decode`].
pub async fn decode_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let body = resp.text().await?;
    decode_body(&body)
}

/// Decode a JSON body where an empty body or `null` means "nothing".
pub async fn decode_optional<T: DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<Option<T>, ApiError> {
    let body = resp.text().await?;
    if body.trim().is_empty() {
        return Ok(None);
    }
    decode_body(&body)
}

pub(crate) fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Pull a human message out of an error body.
///
/// The platform answers failures with `{"error": "..."}`; anything else is
/// passed through trimmed, and an empty body becomes a generic message.
pub(crate) fn error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value.get("error").and_then(serde_json::Value::as_str) {
            return message.to_string();
        }
        if let Some(message) = value.get("message").and_then(serde_json::Value::as_str) {
            return message.to_string();
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "no response body".to_string()
    } else {
        trimmed.to_string()
    }
}
