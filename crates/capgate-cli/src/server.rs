//! Local completion relay.
//!
//! The relay is the only place the service credential lives: the engine
//! POSTs `{system, messages}` to `/api/chat`, and the relay forwards the
//! pair to the hosted messages API, returning the upstream JSON body
//! verbatim. Failures collapse to the two fixed error bodies the engine's
//! gateway knows how to classify.

use std::io;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use log::{error, info};
use serde_json::json;

use capgate_core::Config;

const MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

struct Relay {
    client: reqwest::Client,
    api_key: Option<String>,
    model: String,
    max_tokens: u32,
}

/// Serve `/api/chat` on 127.0.0.1 until the process is killed.
pub async fn run(port: u16, config: Config) -> io::Result<()> {
    let relay = Arc::new(Relay {
        client: reqwest::Client::new(),
        api_key: std::env::var("ANTHROPIC_API_KEY")
            .ok()
            .filter(|key| !key.is_empty()),
        model: config.model,
        max_tokens: config.max_tokens,
    });
    if relay.api_key.is_none() {
        error!("ANTHROPIC_API_KEY is not set; requests will fail with 'Missing API Key'");
    }

    let app = Router::new()
        .route("/api/chat", post(chat))
        .with_state(relay);
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port)).await?;
    info!("relay listening on 127.0.0.1:{}", port);
    axum::serve(listener, app).await
}

async fn chat(
    State(relay): State<Arc<Relay>>,
    Json(body): Json<serde_json::Value>,
) -> (StatusCode, Json<serde_json::Value>) {
    let Some(api_key) = relay.api_key.as_deref() else {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Missing API Key" })),
        );
    };

    let payload = upstream_payload(&relay.model, relay.max_tokens, &body);
    let upstream = relay
        .client
        .post(MESSAGES_URL)
        .header("x-api-key", api_key)
        .header("anthropic-version", ANTHROPIC_VERSION)
        .json(&payload)
        .send()
        .await;

    match upstream {
        Ok(response) if response.status().is_success() => {
            match response.json::<serde_json::Value>().await {
                Ok(reply) => (StatusCode::OK, Json(reply)),
                Err(e) => {
                    error!("malformed upstream body: {}", e);
                    internal_error()
                }
            }
        }
        Ok(response) => {
            error!("upstream returned {}", response.status());
            internal_error()
        }
        Err(e) => {
            error!("upstream request failed: {}", e);
            internal_error()
        }
    }
}

fn internal_error() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Internal Server Error" })),
    )
}

/// Combine the relay's fixed model parameters with the caller's system
/// instruction and messages.
fn upstream_payload(
    model: &str,
    max_tokens: u32,
    body: &serde_json::Value,
) -> serde_json::Value {
    json!({
        "model": model,
        "max_tokens": max_tokens,
        "system": body.get("system").cloned().unwrap_or(serde_json::Value::Null),
        "messages": body.get("messages").cloned().unwrap_or_else(|| json!([])),
    })
}
