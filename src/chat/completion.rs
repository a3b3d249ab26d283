//! Chat-completion request and response payloads

use serde::{Deserialize, Serialize};

use super::ChatError;
use super::message::ChatMessage;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

impl CompletionRequest {
    pub fn to_json(&self) -> Result<String, ChatError> {
        serde_json::to_string(self).map_err(|e| ChatError::Malformed(e.to_string()))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompletionChoice {
    #[serde(default)]
    pub index: u32,
    pub message: ChatMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub created: i64,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub choices: Vec<CompletionChoice>,
}

/// Extract the first choice's trimmed reply from a raw response body
pub fn parse_completion(body: &str) -> Result<String, ChatError> {
    let response: CompletionResponse = serde_json::from_str(body).map_err(|e| {
        log::error!("Failed to parse completion response: {}", e);
        ChatError::Malformed(e.to_string())
    })?;
    let choice = response.choices.first().ok_or(ChatError::EmptyChoices)?;
    Ok(choice.message.content.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::message::Role;

    #[test]
    fn test_request_serializes_lowercase_roles() {
        let request = CompletionRequest {
            model: "gpt-3.5-turbo".into(),
            messages: vec![
                ChatMessage::system("You are Bob."),
                ChatMessage::user("Hello"),
            ],
        };
        let json: serde_json::Value = serde_json::from_str(&request.to_json().unwrap()).unwrap();
        assert_eq!(json["model"], "gpt-3.5-turbo");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "Hello");
    }

    #[test]
    fn test_parse_first_choice_trimmed() {
        let body = r#"{
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "created": 1700000000,
            "model": "gpt-3.5-turbo",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "  Welcome!\n"}, "finish_reason": "stop"},
                {"index": 1, "message": {"role": "assistant", "content": "ignored"}, "finish_reason": "stop"}
            ]
        }"#;
        assert_eq!(parse_completion(body).unwrap(), "Welcome!");
        let parsed: CompletionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.choices[0].message.role, Role::Assistant);
    }

    #[test]
    fn test_parse_empty_choices() {
        let body = r#"{"id": "x", "choices": []}"#;
        assert_eq!(parse_completion(body), Err(ChatError::EmptyChoices));
    }

    #[test]
    fn test_parse_garbage() {
        assert!(matches!(
            parse_completion("<html>502</html>"),
            Err(ChatError::Malformed(_))
        ));
    }
}
