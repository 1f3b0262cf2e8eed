//! Core data types for conversations and messages.

mod conversation;
mod message;

pub use conversation::Conversation;
pub use message::{Message, MessageRole};
