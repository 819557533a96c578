use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Body of a `chat-messages` request. All five fields are serialized on
/// every request; the server rejects partial payloads.
#[derive(Debug, Serialize)]
pub struct ChatMessageRequest {
    pub query: String,
    pub inputs: HashMap<String, String>,
    pub response_mode: ResponseMode,
    pub user: String,
    pub conversation_id: String,
}

impl ChatMessageRequest {
    /// A blocking-mode request opening a fresh conversation.
    #[must_use]
    pub fn blocking(query: &str, user: &str) -> Self {
        Self {
            query: query.to_string(),
            inputs: HashMap::new(),
            response_mode: ResponseMode::Blocking,
            user: user.to_string(),
            conversation_id: String::new(),
        }
    }
}

/// * `Blocking` waits for the full answer in one response.
/// * `Streaming` returns SSE chunks; the probe never requests it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseMode {
    #[default]
    Blocking,
    Streaming,
}

/// Outcome of an exchange that got a success status back. A body that does
/// not parse as JSON is still a valid reply, just with `json` empty.
#[derive(Debug)]
pub struct ChatReply {
    pub status: u16,
    pub body: String,
    pub json: Option<Value>,
    pub answer: Option<String>,
}

impl ChatReply {
    #[must_use]
    pub fn from_body(status: u16, body: String) -> Self {
        let json: Option<Value> = serde_json::from_str(&body).ok();
        let answer = json
            .as_ref()
            .and_then(|value| value.get("answer"))
            .map(|answer| match answer.as_str() {
                Some(text) => text.to_string(),
                None => answer.to_string(),
            });
        Self {
            status,
            body,
            json,
            answer,
        }
    }

    #[must_use]
    pub fn is_json(&self) -> bool {
        self.json.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn blocking_request_serializes_exactly_five_fields() {
        let request = ChatMessageRequest::blocking("Hello, are you online?", "test-user-123");
        let value = serde_json::to_value(&request).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 5);
        assert_eq!(object["query"], "Hello, are you online?");
        assert_eq!(object["inputs"], serde_json::json!({}));
        assert_eq!(object["response_mode"], "blocking");
        assert_eq!(object["user"], "test-user-123");
        assert_eq!(object["conversation_id"], "");
    }

    #[test]
    fn answer_is_extracted_from_json_body() {
        let reply = ChatReply::from_body(200, r#"{"answer": "hi"}"#.to_string());
        assert!(reply.is_json());
        assert_eq!(reply.answer.as_deref(), Some("hi"));
    }

    #[test]
    fn json_body_without_answer_yields_none() {
        let reply = ChatReply::from_body(200, r#"{"event": "message"}"#.to_string());
        assert!(reply.is_json());
        assert_eq!(reply.answer, None);
    }

    #[test]
    fn non_string_answer_is_rendered() {
        let reply = ChatReply::from_body(200, r#"{"answer": 42}"#.to_string());
        assert_eq!(reply.answer.as_deref(), Some("42"));
    }

    #[test]
    fn non_json_body_is_kept_verbatim() {
        let reply = ChatReply::from_body(200, "OK".to_string());
        assert!(!reply.is_json());
        assert_eq!(reply.answer, None);
        assert_eq!(reply.body, "OK");
    }
}
