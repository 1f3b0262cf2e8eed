use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Message, MessageRole};

/// A titled, ordered sequence of messages with a unique identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Conversation {
    /// Unique conversation ID (UUID v4)
    pub id: String,
    /// Display title; starts as a placeholder and is replaced at most once
    /// by a value derived from the first user message
    pub title: String,
    /// Messages in append order
    pub messages: Vec<Message>,
    /// When the conversation was created
    pub created_at: DateTime<Utc>,
}

impl Conversation {
    /// Create an empty conversation with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            messages: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Create a conversation seeded with one assistant greeting message.
    pub fn with_seed(title: impl Into<String>, seed_content: impl Into<String>) -> Self {
        let mut conversation = Self::new(title);
        conversation.messages.push(Message::assistant(seed_content));
        conversation
    }

    /// Number of messages in the conversation.
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// True if the conversation holds exactly its seed message and nothing
    /// else: one message, authored by the assistant.
    pub fn has_only_seed(&self) -> bool {
        self.messages.len() == 1 && self.messages[0].role == MessageRole::Assistant
    }
}
