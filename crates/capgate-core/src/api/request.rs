//! Request body construction for the completion endpoint.

use serde_json::json;

/// Build the wire body for one submission: the composed context as the
/// system-level instruction, the query as the sole user message.
pub fn build_request_body(system: &str, query: &str) -> serde_json::Value {
    json!({
        "system": system,
        "messages": [{ "role": "user", "content": query }],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_shape() {
        let body = build_request_body("be helpful", "What's on my calendar?");
        assert_eq!(body["system"], "be helpful");
        let messages = body["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0]["role"], "user");
        assert_eq!(messages[0]["content"], "What's on my calendar?");
    }
}
