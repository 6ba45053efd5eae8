//! HTTP client for the completion endpoint.
//!
//! One POST per submission, no retries, bounded timeout. Outcome
//! classification lives in [`classify_response`] as a pure function over the
//! status and decoded body, so the error taxonomy is testable without a
//! network.

use std::io;
use std::time::Duration;

use log::debug;
use thiserror::Error;

use super::request::build_request_body;

/// Reply substituted when a success payload carries no text segment.
pub const EMPTY_PAYLOAD_REPLY: &str = "Error getting response";

/// A failed completion submission. Terminal for that submission only; the
/// message stands in for the assistant's reply.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The endpoint answered with an error: either a structured
    /// `{"error": ...}` body (surfaced verbatim, e.g. "Missing API Key") or
    /// a non-success status without one.
    #[error("{0}")]
    Service(String),
    /// The request never produced a usable response (connection refused,
    /// timeout, malformed payload).
    #[error("{0}")]
    Transport(String),
}

/// A text-completion collaborator. The engine is generic over this seam so
/// tests and alternative backends can stand in for the HTTP endpoint.
pub trait CompletionGateway {
    /// Send one composed context + query pair and classify the outcome.
    fn submit(
        &self,
        system: &str,
        query: &str,
    ) -> impl Future<Output = Result<String, GatewayError>> + Send;
}

/// Gateway talking to the local completion relay over HTTP.
pub struct HttpGateway {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpGateway {
    /// Build a client for `endpoint` with a bounded per-request timeout.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> io::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| io::Error::other(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

impl CompletionGateway for HttpGateway {
    async fn submit(&self, system: &str, query: &str) -> Result<String, GatewayError> {
        let body = build_request_body(system, query);
        debug!("posting completion request to {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let success = response.status().is_success();
        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        classify_response(success, &payload)
    }
}

/// Map a decoded endpoint response to reply text or the most specific
/// available error.
///
/// A structured `{"error": ...}` body wins regardless of status; a
/// non-success status without one falls back to a generic message. On
/// success the reply is the first text segment of the `content` array, or
/// [`EMPTY_PAYLOAD_REPLY`] when there is none.
pub fn classify_response(
    success: bool,
    payload: &serde_json::Value,
) -> Result<String, GatewayError> {
    if let Some(message) = payload.get("error").and_then(|e| e.as_str()) {
        return Err(GatewayError::Service(message.to_string()));
    }
    if !success {
        return Err(GatewayError::Service("Internal Server Error".to_string()));
    }

    let text = payload
        .get("content")
        .and_then(|c| c.get(0))
        .and_then(|segment| segment.get("text"))
        .and_then(|t| t.as_str())
        .unwrap_or(EMPTY_PAYLOAD_REPLY);
    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_extracts_first_text_segment() {
        let payload = json!({
            "content": [
                { "type": "text", "text": "You have a standup at 10am." },
                { "type": "text", "text": "ignored" }
            ]
        });
        assert_eq!(
            classify_response(true, &payload).unwrap(),
            "You have a standup at 10am."
        );
    }

    #[test]
    fn test_success_without_text_segment_uses_placeholder() {
        let payload = json!({ "content": [] });
        assert_eq!(
            classify_response(true, &payload).unwrap(),
            EMPTY_PAYLOAD_REPLY
        );

        let payload = json!({ "id": "msg_123" });
        assert_eq!(
            classify_response(true, &payload).unwrap(),
            EMPTY_PAYLOAD_REPLY
        );
    }

    #[test]
    fn test_structured_error_body_is_surfaced_verbatim() {
        let payload = json!({ "error": "rate limited" });
        assert_eq!(
            classify_response(false, &payload),
            Err(GatewayError::Service("rate limited".to_string()))
        );
    }

    #[test]
    fn test_missing_api_key_is_surfaced_verbatim() {
        let payload = json!({ "error": "Missing API Key" });
        assert_eq!(
            classify_response(false, &payload),
            Err(GatewayError::Service("Missing API Key".to_string()))
        );
    }

    #[test]
    fn test_error_body_wins_even_on_success_status() {
        // The relay can answer 200 with an error body; the error field takes
        // precedence over content extraction.
        let payload = json!({ "error": "upstream unavailable", "content": [] });
        assert_eq!(
            classify_response(true, &payload),
            Err(GatewayError::Service("upstream unavailable".to_string()))
        );
    }

    #[test]
    fn test_non_success_without_error_body_is_generic() {
        let payload = json!({ "detail": "unexpected" });
        assert_eq!(
            classify_response(false, &payload),
            Err(GatewayError::Service("Internal Server Error".to_string()))
        );
    }

    #[test]
    fn test_gateway_error_displays_bare_message() {
        let err = GatewayError::Service("Missing API Key".to_string());
        assert_eq!(err.to_string(), "Missing API Key");
        let err = GatewayError::Transport("connection refused".to_string());
        assert_eq!(err.to_string(), "connection refused");
    }
}
