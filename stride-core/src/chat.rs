//! Chat transcript types
//!
//! Messages are appended by user input or by relay responses, never edited
//! or deleted. The transcript is session-lifetime only.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
    System,
}

impl fmt::Display for ChatRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
            ChatRole::System => "system",
        };
        write!(f, "{}", s)
    }
}

/// One turn of the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }
}

/// Ordered sequence of chat turns, seeded with a fixed assistant greeting.
///
/// The greeting is a UI fixture, not part of the conversation: it is shown
/// to the user but excluded from everything sent to the relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
}

impl ChatTranscript {
    pub fn new(greeting: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage::assistant(greeting)],
        }
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage::user(content));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage::assistant(content));
    }

    /// Every message including the greeting, for rendering.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// The conversation as sent to the relay: everything after the fixed
    /// greeting, in original order.
    pub fn outbound_messages(&self) -> &[ChatMessage] {
        self.messages.get(1..).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_seeds_greeting() {
        let transcript = ChatTranscript::new("Hi! How can I help?");
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.messages()[0].role, ChatRole::Assistant);
        assert!(transcript.outbound_messages().is_empty());
    }

    #[test]
    fn test_outbound_skips_greeting_keeps_order() {
        let mut transcript = ChatTranscript::new("greeting");
        transcript.push_user("first question");
        transcript.push_assistant("first answer");
        transcript.push_user("second question");

        let outbound = transcript.outbound_messages();
        assert_eq!(outbound.len(), 3);
        assert_eq!(outbound[0], ChatMessage::user("first question"));
        assert_eq!(outbound[1], ChatMessage::assistant("first answer"));
        assert_eq!(outbound[2], ChatMessage::user("second question"));
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&ChatMessage::user("hello")).unwrap();
        assert_eq!(json, "{\"role\":\"user\",\"content\":\"hello\"}");
    }
}
