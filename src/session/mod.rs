//! Conversation/session state management and response delivery.
//!
//! - [`ConversationStore`] — ordered collection of conversations
//! - [`SessionController`] — orchestrates user intents and owns the active
//!   selection and pending flag
//! - [`ResponseSimulator`] — delayed delivery of simulated replies
//! - [`SessionEvent`] — channel messages consumed by the app loop

mod controller;
mod error;
mod events;
mod simulator;
mod store;

pub use controller::SessionController;
pub use error::{SessionError, SessionResult};
pub use events::SessionEvent;
pub use simulator::ResponseSimulator;
pub use store::ConversationStore;
