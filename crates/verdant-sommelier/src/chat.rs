//! Chat transcript types and fixed copy.

use serde::{Deserialize, Serialize};

/// Instruction sent with every generation request.
pub const SYSTEM_INSTRUCTION: &str = "You are a world-class Tea Sommelier for 'Verdant Leaf', \
    a premium luxury tea brand. Your tone is elegant, helpful, and highly knowledgeable. \
    Recommend specific types of teas (Green, Black, Oolong, etc.) based on user preferences. \
    Keep responses relatively concise but evocative.";

/// Sampling temperature for generation requests.
pub const TEMPERATURE: f32 = 0.7;

/// Opening message shown when the chat is first opened.
pub const GREETING: &str =
    "Welcome to Verdant Leaf. I am your personal Tea Sommelier. How can I guide your palate today?";

/// Shown when the backend answers with an empty reply.
pub const FALLBACK_EMPTY_REPLY: &str =
    "I apologize, my steep has gone cold. Could you repeat that?";

/// Shown when the backend call fails.
pub const FALLBACK_OFFLINE: &str =
    "I'm having trouble connecting to the tea garden right now. Please try again in a moment.";

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

/// A single chat turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            text: text.into(),
        }
    }
}

/// The running conversation, oldest message first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    /// Start a conversation seeded with the sommelier's greeting.
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::model(GREETING)],
        }
    }

    /// Append a user turn.
    pub fn push_user(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage::user(text));
    }

    /// Append a model turn.
    pub fn push_model(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage::model(text));
    }

    /// All messages, oldest first.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// The latest user message, if any.
    pub fn last_user_message(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == ChatRole::User)
            .map(|m| m.text.as_str())
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_opens_with_greeting() {
        let transcript = Transcript::new();
        assert_eq!(transcript.messages().len(), 1);
        assert_eq!(transcript.messages()[0].role, ChatRole::Model);
        assert_eq!(transcript.messages()[0].text, GREETING);
    }

    #[test]
    fn test_turns_append_in_order() {
        let mut transcript = Transcript::new();
        transcript.push_user("Something for the evening?");
        transcript.push_model("A chamomile blend, perhaps.");

        let roles: Vec<_> = transcript.messages().iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![ChatRole::Model, ChatRole::User, ChatRole::Model]);
        assert_eq!(
            transcript.last_user_message(),
            Some("Something for the evening?")
        );
    }

    #[test]
    fn test_roles_serialize_lowercase() {
        let json = serde_json::to_string(&ChatMessage::user("hi")).unwrap();
        assert!(json.contains("\"role\":\"user\""));
    }
}
