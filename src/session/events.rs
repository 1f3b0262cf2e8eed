//! Session events sent to the application loop.

/// Messages emitted by the session layer over its mpsc channel.
///
/// All state mutation happens on the app loop task; the simulator's timer
/// task never touches the store directly, it posts `ResponseReady` and the
/// loop routes it back into [`SessionController::deliver_response`].
///
/// [`SessionController::deliver_response`]: super::SessionController::deliver_response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A scheduled assistant reply is ready for delivery.
    ResponseReady {
        conversation_id: String,
        content: String,
    },
    /// The view should collapse its overlay sidebar (constrained-viewport
    /// mode only; a pure notification, the session owns no view state).
    OverlayDismissRequested,
}
