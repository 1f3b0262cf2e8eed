//! Session orchestration: the sole owner of the active selection and the
//! pending-response flag.
//!
//! Every user intent (send, new, select, delete) enters through this type,
//! and only this type mutates `active_conversation_id` and `pending`. The
//! app loop routes timer deliveries back in through [`deliver_response`].
//!
//! [`deliver_response`]: SessionController::deliver_response

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{error, warn};

use crate::config::Config;
use crate::models::{Conversation, Message};
use crate::responder::Responder;

use super::error::{SessionError, SessionResult};
use super::events::SessionEvent;
use super::simulator::ResponseSimulator;
use super::store::ConversationStore;

/// Maximum derived-title length, in characters.
const TITLE_MAX_CHARS: usize = 30;

/// Marker appended when a derived title was truncated.
const TITLE_TRUNCATION_MARKER: &str = "...";

/// Orchestrates conversation lifecycle and response delivery.
pub struct SessionController {
    config: Config,
    store: ConversationStore,
    simulator: ResponseSimulator,
    /// ID of the conversation receiving new messages. Always refers to an
    /// existing conversation; repaired inside every mutating operation.
    active_conversation_id: String,
    /// True while an assistant reply is outstanding. Session-wide, not
    /// per-conversation: switching conversations does not permit a second
    /// concurrent request.
    pending: bool,
    event_tx: mpsc::UnboundedSender<SessionEvent>,
    /// Receiver half of the session channel, taken once by the app loop.
    event_rx: Option<mpsc::UnboundedReceiver<SessionEvent>>,
}

impl SessionController {
    /// Create a controller with one default conversation, already active.
    pub fn new(config: Config, responder: Arc<dyn Responder>) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let simulator =
            ResponseSimulator::new(config.response_delay, responder, event_tx.clone());

        let mut store = ConversationStore::new();
        let initial = ConversationStore::create_default(&config);
        let active_conversation_id = initial.id.clone();
        // Inserting a freshly generated uuid into an empty store cannot collide.
        let _ = store.insert(initial);

        Self {
            config,
            store,
            simulator,
            active_conversation_id,
            pending: false,
            event_tx,
            event_rx: Some(event_rx),
        }
    }

    /// Take the receiver half of the session event channel.
    ///
    /// The app loop calls this once; it needs ownership for `select!`.
    pub fn take_event_receiver(&mut self) -> Option<mpsc::UnboundedReceiver<SessionEvent>> {
        self.event_rx.take()
    }

    /// Create a fresh default conversation and make it active.
    ///
    /// Always succeeds; returns the new conversation's id. Signals the view
    /// to collapse any overlay sidebar.
    pub fn new_conversation(&mut self) -> String {
        let conversation = ConversationStore::create_default(&self.config);
        let id = conversation.id.clone();
        match self.store.insert(conversation) {
            Ok(()) => {
                self.active_conversation_id = id.clone();
                self.request_overlay_dismiss();
            }
            // Unreachable with uuid v4 generation; surfaced for diagnosis.
            Err(err) => error!(%err, "failed to insert new conversation"),
        }
        id
    }

    /// Delete a conversation. No-op when the id is unknown.
    ///
    /// Cancels any outstanding scheduled reply targeting the deleted
    /// conversation. If the store would become empty a new default
    /// conversation is synthesized and becomes active; otherwise, when the
    /// deleted conversation was active, the first remaining conversation in
    /// insertion order becomes active.
    pub fn delete_conversation(&mut self, id: &str) {
        if self.store.remove(id).is_none() {
            return;
        }
        if self.simulator.cancel_for(id) {
            self.pending = false;
        }
        if self.store.is_empty() {
            let replacement = ConversationStore::create_default(&self.config);
            let replacement_id = replacement.id.clone();
            match self.store.insert(replacement) {
                Ok(()) => self.active_conversation_id = replacement_id,
                Err(err) => error!(%err, "failed to insert replacement conversation"),
            }
        } else if self.active_conversation_id == id {
            if let Some(first_id) = self.store.first_id() {
                self.active_conversation_id = first_id.to_string();
            }
        }
    }

    /// Make a conversation active. Fails with `NotFound` on unknown ids.
    ///
    /// Signals the view to collapse any overlay sidebar.
    pub fn select_conversation(&mut self, id: &str) -> SessionResult<()> {
        if self.store.get(id).is_none() {
            return Err(SessionError::NotFound { id: id.to_string() });
        }
        self.active_conversation_id = id.to_string();
        self.request_overlay_dismiss();
        Ok(())
    }

    /// Append a user message to the active conversation and schedule the
    /// simulated reply.
    ///
    /// Silent no-op on blank text or while a reply is pending. The caller is
    /// expected to have disabled submission while pending; the guard here is
    /// defensive.
    pub fn send_message(&mut self, text: &str) {
        let trimmed = text.trim();
        if trimmed.is_empty() || self.pending {
            return;
        }

        let conversation_id = self.active_conversation_id.clone();
        // Title derivation looks at the state *before* the append: exactly
        // the seed assistant message, nothing else. This fires at most once
        // per conversation.
        let derive_title = self
            .store
            .get(&conversation_id)
            .is_some_and(Conversation::has_only_seed);

        if let Err(err) = self
            .store
            .append_message(&conversation_id, Message::user(trimmed))
        {
            error!(%err, conversation_id, "failed to append user message");
            return;
        }

        if derive_title {
            if let Some(conversation) = self.store.get_mut(&conversation_id) {
                conversation.title = derive_title_from(trimmed);
            }
        }

        // Set synchronously before the timer task exists so the view can
        // immediately disable further submission.
        self.pending = true;
        self.simulator.schedule(&conversation_id);
    }

    /// Deliver a simulated assistant reply.
    ///
    /// Called by the app loop when [`SessionEvent::ResponseReady`] arrives.
    /// If the target conversation was deleted in the meantime the reply is
    /// dropped with a warning. The pending flag clears unconditionally.
    pub fn deliver_response(&mut self, conversation_id: &str, content: String) {
        self.pending = false;
        if let Err(err) = self
            .store
            .append_message(conversation_id, Message::assistant(content))
        {
            warn!(%err, conversation_id, "dropping reply for missing conversation");
        }
    }

    /// The conversation currently receiving messages.
    pub fn current_conversation(&self) -> &Conversation {
        // Invariants: the store is never empty and the active id is repaired
        // inside every mutating operation, so the fallback chain cannot fail.
        self.store
            .get(&self.active_conversation_id)
            .or_else(|| self.store.list().into_iter().next())
            .expect("conversation store is never empty")
    }

    /// All conversations in insertion order.
    pub fn conversations(&self) -> Vec<&Conversation> {
        self.store.list()
    }

    /// True while an assistant reply is outstanding.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// ID of the active conversation.
    pub fn active_conversation_id(&self) -> &str {
        &self.active_conversation_id
    }

    fn request_overlay_dismiss(&self) {
        let _ = self.event_tx.send(SessionEvent::OverlayDismissRequested);
    }
}

/// Derive a conversation title from the first user message: the first 30
/// characters, with a truncation marker when the message was longer.
/// Measured in `char`s so multibyte input never splits a scalar.
fn derive_title_from(text: &str) -> String {
    let mut chars = text.chars();
    let title: String = chars.by_ref().take(TITLE_MAX_CHARS).collect();
    if chars.next().is_some() {
        format!("{title}{TITLE_TRUNCATION_MARKER}")
    } else {
        title
    }
}
