//! Authoritative, ordered collection of conversations.

use std::collections::HashMap;

use crate::config::Config;
use crate::models::{Conversation, Message};

use super::error::{SessionError, SessionResult};

/// Ordered collection of conversations with unique-id enforcement.
///
/// The store is a pure container: it is the sole mutation path for
/// conversation data, but it never self-heals. Keeping the store non-empty
/// is the controller's job.
#[derive(Debug, Default)]
pub struct ConversationStore {
    /// Conversations indexed by ID
    conversations: HashMap<String, Conversation>,
    /// Conversation IDs in insertion order
    order: Vec<String>,
}

impl ConversationStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a default conversation: generated id, placeholder title, one
    /// seed assistant message. Does not touch the store.
    pub fn create_default(config: &Config) -> Conversation {
        Conversation::with_seed(&config.placeholder_title, &config.seed_message)
    }

    /// Append a conversation to the end of the ordered collection.
    pub fn insert(&mut self, conversation: Conversation) -> SessionResult<()> {
        if self.conversations.contains_key(&conversation.id) {
            return Err(SessionError::DuplicateId {
                id: conversation.id,
            });
        }
        self.order.push(conversation.id.clone());
        self.conversations.insert(conversation.id.clone(), conversation);
        Ok(())
    }

    /// Remove a conversation by ID, returning it if it existed.
    pub fn remove(&mut self, id: &str) -> Option<Conversation> {
        let removed = self.conversations.remove(id)?;
        self.order.retain(|existing| existing != id);
        Some(removed)
    }

    /// Get a conversation by ID.
    pub fn get(&self, id: &str) -> Option<&Conversation> {
        self.conversations.get(id)
    }

    /// Get a mutable conversation by ID.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Conversation> {
        self.conversations.get_mut(id)
    }

    /// All conversations in insertion order.
    pub fn list(&self) -> Vec<&Conversation> {
        self.order
            .iter()
            .filter_map(|id| self.conversations.get(id))
            .collect()
    }

    /// ID of the first conversation in insertion order.
    pub fn first_id(&self) -> Option<&str> {
        self.order.first().map(String::as_str)
    }

    /// Append a message to a conversation's message sequence.
    ///
    /// Fails with `NotFound` if the conversation does not exist and with
    /// `DuplicateId` if the message id is already present in it.
    pub fn append_message(&mut self, conversation_id: &str, message: Message) -> SessionResult<()> {
        let conversation =
            self.conversations
                .get_mut(conversation_id)
                .ok_or_else(|| SessionError::NotFound {
                    id: conversation_id.to_string(),
                })?;
        if conversation.messages.iter().any(|m| m.id == message.id) {
            return Err(SessionError::DuplicateId { id: message.id });
        }
        conversation.messages.push(message);
        Ok(())
    }

    /// Number of conversations in the store.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True if the store holds no conversations.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MessageRole;

    fn store_with(titles: &[&str]) -> (ConversationStore, Vec<String>) {
        let mut store = ConversationStore::new();
        let mut ids = Vec::new();
        for title in titles {
            let conversation = Conversation::with_seed(*title, "Hello!");
            ids.push(conversation.id.clone());
            store.insert(conversation).unwrap();
        }
        (store, ids)
    }

    #[test]
    fn test_insert_preserves_order() {
        let (store, ids) = store_with(&["a", "b", "c"]);
        let listed: Vec<&str> = store.list().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(listed, ids.iter().map(String::as_str).collect::<Vec<_>>());
        assert_eq!(store.first_id(), Some(ids[0].as_str()));
    }

    #[test]
    fn test_insert_rejects_duplicate_id() {
        let (mut store, ids) = store_with(&["a"]);
        let mut duplicate = Conversation::new("other");
        duplicate.id = ids[0].clone();
        assert_eq!(
            store.insert(duplicate),
            Err(SessionError::DuplicateId { id: ids[0].clone() })
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_returns_conversation_and_updates_order() {
        let (mut store, ids) = store_with(&["a", "b", "c"]);
        let removed = store.remove(&ids[1]).expect("b should exist");
        assert_eq!(removed.title, "b");
        let listed: Vec<&str> = store.list().iter().map(|c| c.title.as_str()).collect();
        assert_eq!(listed, vec!["a", "c"]);
        assert!(store.remove(&ids[1]).is_none());
    }

    #[test]
    fn test_append_message_to_missing_conversation() {
        let mut store = ConversationStore::new();
        let result = store.append_message("nope", Message::user("hi"));
        assert_eq!(
            result,
            Err(SessionError::NotFound {
                id: "nope".to_string()
            })
        );
    }

    #[test]
    fn test_append_message_rejects_duplicate_message_id() {
        let (mut store, ids) = store_with(&["a"]);
        let message = Message::user("hi");
        let duplicate = message.clone();
        store.append_message(&ids[0], message).unwrap();
        assert_eq!(
            store.append_message(&ids[0], duplicate.clone()),
            Err(SessionError::DuplicateId { id: duplicate.id })
        );
    }

    #[test]
    fn test_append_message_keeps_insertion_order() {
        let (mut store, ids) = store_with(&["a"]);
        store.append_message(&ids[0], Message::user("first")).unwrap();
        store
            .append_message(&ids[0], Message::assistant("second"))
            .unwrap();
        let conversation = store.get(&ids[0]).unwrap();
        assert_eq!(conversation.messages.len(), 3);
        assert_eq!(conversation.messages[1].content, "first");
        assert_eq!(conversation.messages[2].role, MessageRole::Assistant);
    }

    #[test]
    fn test_create_default_is_seeded() {
        let config = Config::default();
        let conversation = ConversationStore::create_default(&config);
        assert_eq!(conversation.title, config.placeholder_title);
        assert!(conversation.has_only_seed());
        assert_eq!(conversation.messages[0].content, config.seed_message);
    }
}
