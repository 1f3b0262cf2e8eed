use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
    System,
}

/// A single message within a conversation.
///
/// Messages are append-only: once created they are never mutated or removed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    /// Unique message ID (UUID v4), assigned at creation
    pub id: String,
    /// Role of the message sender
    pub role: MessageRole,
    /// Text content of the message
    pub content: String,
    /// When the message was created
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Create a new message with a freshly generated ID.
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            created_at: Utc::now(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }

    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_role() {
        assert_eq!(Message::user("hi").role, MessageRole::User);
        assert_eq!(Message::assistant("hi").role, MessageRole::Assistant);
        assert_eq!(Message::system("hi").role, MessageRole::System);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Message::user("one");
        let b = Message::user("one");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let msg = Message::assistant("hello");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["role"], "assistant");
    }
}
