//! Session configuration: response delay and canned reply set.
//!
//! Both tunables are constructor-time configuration so tests can run with a
//! short delay and a deterministic responder instead of the shipped defaults.

use std::time::Duration;

/// Delay before a scheduled assistant reply is delivered.
pub const DEFAULT_RESPONSE_DELAY: Duration = Duration::from_millis(1500);

/// Title given to every freshly created conversation.
pub const PLACEHOLDER_TITLE: &str = "New conversation";

/// Assistant greeting that seeds every new conversation.
pub const SEED_MESSAGE: &str = "How can I help you today?";

/// The fixed candidate set a simulated reply is drawn from.
pub const CANNED_REPLIES: [&str; 5] = [
    "I'm an AI assistant created by OpenAI. How can I help you today?",
    "That's an interesting question. Let me think about it...",
    "Based on my understanding, there are several approaches to consider.",
    "I'd be happy to help you with that. Could you provide more details?",
    "While I don't have personal experiences, I can offer some insights on this topic.",
];

/// Runtime configuration for the session layer.
#[derive(Debug, Clone)]
pub struct Config {
    /// How long the simulator waits before delivering a reply
    pub response_delay: Duration,
    /// Candidate replies the responder picks from
    pub canned_replies: Vec<String>,
    /// Content of the assistant message seeding each new conversation
    pub seed_message: String,
    /// Title assigned to conversations before derivation
    pub placeholder_title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            response_delay: DEFAULT_RESPONSE_DELAY,
            canned_replies: CANNED_REPLIES.iter().map(|s| s.to_string()).collect(),
            seed_message: SEED_MESSAGE.to_string(),
            placeholder_title: PLACEHOLDER_TITLE.to_string(),
        }
    }
}

impl Config {
    /// Override the response delay.
    pub fn with_response_delay(mut self, delay: Duration) -> Self {
        self.response_delay = delay;
        self
    }
}
