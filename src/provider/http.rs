//! Shared HTTP client and auth utilities.

use std::sync::OnceLock;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use crate::error::TtsError;

static SHARED_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

/// Get (or create) the shared reqwest client.
///
/// Only the connect phase is bounded; audio bodies stream for as long as the
/// API keeps sending.
pub fn shared_client() -> &'static reqwest::Client {
    SHARED_CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(10)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new())
    })
}

/// Build default headers for a Bearer-token API.
pub fn bearer_headers(api_key: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Ok(val) = HeaderValue::from_str(&format!("Bearer {api_key}")) {
        headers.insert(AUTHORIZATION, val);
    }
    headers
}

/// Map a non-success HTTP status to an error.
pub fn status_to_error(status: u16, body: &str) -> TtsError {
    let message = extract_error_message(body).unwrap_or_else(|| body.trim().to_string());
    match status {
        401 | 403 => TtsError::Authentication(message),
        _ => TtsError::api(status, message),
    }
}

/// Pull a human-readable message out of a JSON error body.
fn extract_error_message(body: &str) -> Option<String> {
    let parsed: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "detail"]
        .iter()
        .find_map(|key| parsed.get(key))
        .or_else(|| parsed.get("error").and_then(|e| e.get("message")))
        .map(|value| match value.as_str() {
            Some(text) => text.to_string(),
            None => value.to_string(),
        })
}

pub(crate) fn trim_trailing_slash(url: &str) -> &str {
    url.trim_end_matches('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_maps_to_authentication() {
        let err = status_to_error(401, r#"{"status":401,"message":"Invalid api key"}"#);
        assert!(matches!(err, TtsError::Authentication(message) if message == "Invalid api key"));
    }

    #[test]
    fn other_statuses_keep_status_code() {
        let err = status_to_error(402, r#"{"detail":"Insufficient balance"}"#);
        assert!(matches!(
            err,
            TtsError::Api { status: 402, message } if message == "Insufficient balance"
        ));
    }

    #[test]
    fn plain_body_is_used_verbatim() {
        let err = status_to_error(500, "  upstream exploded \n");
        assert!(matches!(err, TtsError::Api { message, .. } if message == "upstream exploded"));
    }

    #[test]
    fn nested_error_message_is_extracted() {
        let err = status_to_error(400, r#"{"error":{"message":"bad format"}}"#);
        assert!(matches!(err, TtsError::Api { message, .. } if message == "bad format"));
    }

    #[test]
    fn bearer_headers_carry_key() {
        let headers = bearer_headers("secret");
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer secret");
    }
}
