//! Completion gateway: request construction and the HTTP client.

pub mod client;
pub mod request;

pub use client::{CompletionGateway, GatewayError, HttpGateway, EMPTY_PAYLOAD_REPLY};
pub use request::build_request_body;
