//! Delayed delivery of simulated assistant replies.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::responder::Responder;

use super::events::SessionEvent;

/// Handle to one outstanding scheduled reply.
///
/// Doubles as the cancellation token: aborting the task before the timer
/// fires guarantees the reply is never delivered.
struct ScheduledResponse {
    conversation_id: String,
    task: JoinHandle<()>,
}

/// Schedules and delivers one synthetic assistant reply per request.
///
/// `schedule` spawns a one-shot timer task; when it fires, the injected
/// [`Responder`] picks the reply content and the simulator posts
/// [`SessionEvent::ResponseReady`] on the session channel. The task never
/// mutates session state itself, so all mutation stays on the app loop.
///
/// The controller's pending gate guarantees at most one outstanding
/// schedule at a time.
pub struct ResponseSimulator {
    delay: Duration,
    responder: Arc<dyn Responder>,
    event_tx: mpsc::UnboundedSender<SessionEvent>,
    scheduled: Option<ScheduledResponse>,
}

impl ResponseSimulator {
    /// Create a simulator with a fixed delay and reply source.
    pub fn new(
        delay: Duration,
        responder: Arc<dyn Responder>,
        event_tx: mpsc::UnboundedSender<SessionEvent>,
    ) -> Self {
        Self {
            delay,
            responder,
            event_tx,
            scheduled: None,
        }
    }

    /// Schedule a reply for the given conversation after the fixed delay.
    ///
    /// Exactly one delivery attempt per call; no retry or backoff.
    pub fn schedule(&mut self, conversation_id: &str) {
        let delay = self.delay;
        let responder = Arc::clone(&self.responder);
        let event_tx = self.event_tx.clone();
        let id = conversation_id.to_string();

        debug!(conversation_id = %id, delay_ms = delay.as_millis() as u64, "scheduling reply");

        let task = tokio::spawn({
            let id = id.clone();
            async move {
                tokio::time::sleep(delay).await;
                let content = responder.next_reply();
                // The receiver only closes on shutdown; a failed send is fine.
                let _ = event_tx.send(SessionEvent::ResponseReady {
                    conversation_id: id,
                    content,
                });
            }
        });

        self.scheduled = Some(ScheduledResponse {
            conversation_id: id,
            task,
        });
    }

    /// Cancel the outstanding reply if it targets the given conversation.
    ///
    /// Returns true if a scheduled reply was cancelled.
    pub fn cancel_for(&mut self, conversation_id: &str) -> bool {
        let targets_conversation = self
            .scheduled
            .as_ref()
            .is_some_and(|s| s.conversation_id == conversation_id);
        if !targets_conversation {
            return false;
        }
        if let Some(scheduled) = self.scheduled.take() {
            debug!(conversation_id, "cancelling scheduled reply");
            scheduled.task.abort();
        }
        true
    }
}
