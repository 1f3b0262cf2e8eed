//! Common test utilities for integration tests.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use parley::app::App;
use parley::config::Config;
use parley::responder::SequenceResponder;
use parley::session::SessionEvent;

/// Build an App with a deterministic responder cycling through `replies`.
pub fn test_app(replies: Vec<&str>) -> App {
    let responder = Arc::new(SequenceResponder::new(replies));
    let mut app = App::with_config(Config::default(), responder);
    app.update_terminal_dimensions(100, 30);
    app
}

/// A plain key press.
pub fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// A Ctrl-modified key press.
pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Type text into the app one key at a time.
pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(press(KeyCode::Char(c)));
    }
}

/// Await the next `ResponseReady` event, skipping overlay notifications.
///
/// Under a paused runtime this auto-advances the clock past the simulated
/// delay, so tests never sleep for real.
pub async fn next_response(
    rx: &mut mpsc::UnboundedReceiver<SessionEvent>,
) -> (String, String) {
    loop {
        match rx.recv().await.expect("session channel closed") {
            SessionEvent::ResponseReady {
                conversation_id,
                content,
            } => return (conversation_id, content),
            SessionEvent::OverlayDismissRequested => continue,
        }
    }
}

/// Drain any immediately available events, asserting none is a reply.
pub fn assert_no_response(rx: &mut mpsc::UnboundedReceiver<SessionEvent>) {
    while let Ok(event) = rx.try_recv() {
        assert!(
            !matches!(event, SessionEvent::ResponseReady { .. }),
            "unexpected reply delivered: {event:?}"
        );
    }
}
