//! Reply sources for the response simulator.
//!
//! The simulator is generic over where reply text comes from so tests can
//! substitute a deterministic source for the shipped random one.

use std::sync::Mutex;

use rand::seq::SliceRandom;

/// Source of simulated assistant replies.
///
/// Implementations must be `Send + Sync`: the simulator calls `next_reply`
/// from its timer task when the delay elapses.
pub trait Responder: Send + Sync {
    /// Produce the content of the next assistant reply.
    fn next_reply(&self) -> String;
}

/// Picks uniformly at random from a fixed set of canned replies.
pub struct CannedResponder {
    replies: Vec<String>,
}

impl CannedResponder {
    /// Create a responder over the given candidate set.
    ///
    /// An empty set is a configuration bug; the responder falls back to an
    /// empty reply rather than panicking in the timer task.
    pub fn new(replies: Vec<String>) -> Self {
        Self { replies }
    }
}

impl Responder for CannedResponder {
    fn next_reply(&self) -> String {
        let mut rng = rand::thread_rng();
        self.replies.choose(&mut rng).cloned().unwrap_or_default()
    }
}

/// Cycles deterministically through a fixed list of replies. Test double.
pub struct SequenceResponder {
    replies: Vec<String>,
    cursor: Mutex<usize>,
}

impl SequenceResponder {
    pub fn new<S: Into<String>>(replies: Vec<S>) -> Self {
        Self {
            replies: replies.into_iter().map(Into::into).collect(),
            cursor: Mutex::new(0),
        }
    }
}

impl Responder for SequenceResponder {
    fn next_reply(&self) -> String {
        let mut cursor = match self.cursor.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if self.replies.is_empty() {
            return String::new();
        }
        let reply = self.replies[*cursor % self.replies.len()].clone();
        *cursor += 1;
        reply
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CANNED_REPLIES;

    #[test]
    fn test_canned_responder_draws_from_set() {
        let replies: Vec<String> = CANNED_REPLIES.iter().map(|s| s.to_string()).collect();
        let responder = CannedResponder::new(replies.clone());
        for _ in 0..50 {
            assert!(replies.contains(&responder.next_reply()));
        }
    }

    #[test]
    fn test_canned_responder_empty_set_yields_empty_reply() {
        let responder = CannedResponder::new(Vec::new());
        assert_eq!(responder.next_reply(), "");
    }

    #[test]
    fn test_sequence_responder_cycles() {
        let responder = SequenceResponder::new(vec!["one", "two"]);
        assert_eq!(responder.next_reply(), "one");
        assert_eq!(responder.next_reply(), "two");
        assert_eq!(responder.next_reply(), "one");
    }
}
