//! NPC conversations backed by a remote chat-completion service
//!
//! Only conversation state lives here: history, the last displayed reply,
//! and the request/response payloads. Sending requests is the host's job.

pub mod completion;
pub mod message;
pub mod npc;
pub mod session;

pub use completion::{CompletionRequest, CompletionResponse, parse_completion};
pub use message::{ChatMessage, Role};
pub use npc::NpcInteraction;
pub use session::ChatSession;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Placeholder key shipped in sample configuration
pub const PLACEHOLDER_API_KEY: &str = "YOUR_OPENAI_API_KEY";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    #[error("API key is not set")]
    MissingApiKey,
    #[error("API error: {0}")]
    Transport(String),
    #[error("failed to parse completion response: {0}")]
    Malformed(String),
    #[error("completion response has no choices")]
    EmptyChoices,
}

/// Completion service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatSettings {
    pub api_key: String,
    pub model: String,
    pub endpoint: String,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            api_key: PLACEHOLDER_API_KEY.to_string(),
            model: "gpt-3.5-turbo".to_string(),
            endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
        }
    }
}

impl ChatSettings {
    /// Reject an empty or placeholder key before any request is built
    pub fn check_key(&self) -> Result<(), ChatError> {
        if self.api_key.trim().is_empty() || self.api_key == PLACEHOLDER_API_KEY {
            return Err(ChatError::MissingApiKey);
        }
        Ok(())
    }
}
