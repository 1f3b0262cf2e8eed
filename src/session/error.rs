//! Error types for session operations.
//!
//! Both variants indicate an integration bug in the calling layer rather
//! than a user-visible failure: ids are generated as UUID v4, and the view
//! only passes ids it read from the store.

use thiserror::Error;

/// Errors produced by the conversation store and session controller.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    /// An operation referenced a conversation id that does not exist.
    #[error("conversation not found: {id}")]
    NotFound { id: String },

    /// An id-generation collision on insert or append.
    #[error("duplicate id: {id}")]
    DuplicateId { id: String },
}

/// Result alias for session operations.
pub type SessionResult<T> = Result<T, SessionError>;
