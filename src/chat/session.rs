//! Conversation state for the chat panel
//!
//! Keeps the full history for context but only ever displays the latest reply.

use super::completion::{CompletionRequest, parse_completion};
use super::message::ChatMessage;
use super::npc::NpcInteraction;
use super::{ChatError, ChatSettings};

#[derive(Debug, Clone)]
pub struct ChatSession {
    settings: ChatSettings,
    npc_name: Option<String>,
    history: Vec<ChatMessage>,
    display: String,
    input_enabled: bool,
    awaiting_reply: bool,
}

impl ChatSession {
    pub fn new(settings: ChatSettings) -> Self {
        Self {
            settings,
            npc_name: None,
            history: Vec::new(),
            display: String::new(),
            input_enabled: true,
            awaiting_reply: false,
        }
    }

    /// Begin a fresh conversation seeded with the NPC's personality
    pub fn start_chat(&mut self, npc: &NpcInteraction) {
        self.npc_name = Some(npc.name().to_string());
        self.history.clear();
        self.history.push(ChatMessage::system(npc.system_prompt()));
        self.display.clear();
        self.input_enabled = true;
        self.awaiting_reply = false;
    }

    /// Queue the player's message; returns the request the host should send
    ///
    /// Blank input, no active NPC, or a pending reply yield `Ok(None)`.
    pub fn submit(&mut self, text: &str) -> Result<Option<CompletionRequest>, ChatError> {
        if self.npc_name.is_none() || self.awaiting_reply || text.trim().is_empty() {
            return Ok(None);
        }

        self.history.push(ChatMessage::user(text));
        if let Err(err) = self.settings.check_key() {
            self.show_error(&err);
            return Err(err);
        }

        self.input_enabled = false;
        self.awaiting_reply = true;
        Ok(Some(CompletionRequest {
            model: self.settings.model.clone(),
            messages: self.history.clone(),
        }))
    }

    /// Hand back the raw response body (or transport failure)
    ///
    /// Returns true when the NPC should start its talk animation.
    pub fn receive(&mut self, result: Result<&str, ChatError>) -> bool {
        if !self.awaiting_reply {
            log::debug!("Dropping reply with no request in flight");
            return false;
        }
        self.awaiting_reply = false;
        self.input_enabled = true;

        match result.and_then(parse_completion) {
            Ok(reply) => {
                let name = self.npc_name.as_deref().unwrap_or("NPC");
                self.display = format!("<b>{}:</b> {}", name, reply);
                self.history.push(ChatMessage::assistant(reply));
                true
            }
            Err(err) => {
                log::error!("Chat request failed: {}", err);
                self.show_error(&err);
                false
            }
        }
    }

    /// Drop the NPC, history and displayed text
    pub fn close_chat(&mut self) {
        log::info!("Chat closed");
        self.npc_name = None;
        self.history.clear();
        self.display.clear();
        self.input_enabled = true;
        self.awaiting_reply = false;
    }

    fn show_error(&mut self, err: &ChatError) {
        self.display = format!("<b>Error:</b> {}", err);
    }

    /// The only text shown to the player
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    pub fn is_input_enabled(&self) -> bool {
        self.input_enabled
    }

    pub fn current_npc(&self) -> Option<&str> {
        self.npc_name.as_deref()
    }
}
