//! Application state for the TUI.
//!
//! [`App`] composes the session controller with view-only state: the input
//! box, focus, sidebar visibility, chat scroll, and redraw bookkeeping. All
//! session mutation goes through the controller; the app layer only decides
//! which intent a key press maps to.

mod handlers;

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::error;

use crate::config::Config;
use crate::responder::{CannedResponder, Responder};
use crate::session::{SessionController, SessionEvent};
use crate::widgets::InputBox;

/// Below this width the sidebar becomes an overlay instead of a fixed panel.
pub const NARROW_WIDTH_THRESHOLD: u16 = 60;

/// Which UI component has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    Sidebar,
}

/// Main application state
pub struct App {
    /// Session state and orchestration
    pub controller: SessionController,
    /// Message input box
    pub input_box: InputBox,
    /// Which component receives non-global keys
    pub focus: Focus,
    /// Selected index in the sidebar conversation list
    pub sidebar_index: usize,
    /// Whether the sidebar is shown (a fixed panel when wide, an overlay
    /// when narrow)
    pub sidebar_visible: bool,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Dirty flag: when true, the UI needs to be redrawn
    pub needs_redraw: bool,
    /// Tick counter for animations (typing indicator dots)
    pub tick_count: u64,
    /// Chat scroll offset in lines up from the bottom (0 = stick to bottom)
    pub scroll_offset: usize,
    /// Maximum scroll value, recalculated during render
    pub max_scroll: usize,
    /// True when the user manually scrolled away from the bottom
    pub user_has_scrolled: bool,
    /// Current terminal width in columns
    pub terminal_width: u16,
    /// Current terminal height in rows
    pub terminal_height: u16,
    /// Receiver for session events, taken once by the run loop
    event_rx: Option<mpsc::UnboundedReceiver<SessionEvent>>,
}

impl App {
    /// Create an App with the default configuration and the random canned
    /// responder.
    pub fn new() -> Self {
        let config = Config::default();
        let responder = Arc::new(CannedResponder::new(config.canned_replies.clone()));
        Self::with_config(config, responder)
    }

    /// Create an App with explicit configuration and reply source.
    pub fn with_config(config: Config, responder: Arc<dyn Responder>) -> Self {
        let mut controller = SessionController::new(config, responder);
        let event_rx = controller.take_event_receiver();
        Self {
            controller,
            input_box: InputBox::new(),
            focus: Focus::default(),
            sidebar_index: 0,
            sidebar_visible: true,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            scroll_offset: 0,
            max_scroll: 0,
            user_has_scrolled: false,
            terminal_width: 0,
            terminal_height: 0,
            event_rx,
        }
    }

    /// Take the session event receiver (the run loop needs ownership).
    pub fn take_event_receiver(&mut self) -> Option<mpsc::UnboundedReceiver<SessionEvent>> {
        self.event_rx.take()
    }

    /// Mark the UI as needing a redraw.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance the animation tick. Redraws while a reply is pending so the
    /// typing indicator animates.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.controller.is_pending() {
            self.mark_dirty();
        }
    }

    /// Record the terminal dimensions. On the first call the sidebar
    /// defaults to hidden in constrained viewports.
    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        let first_measurement = self.terminal_width == 0;
        self.terminal_width = width;
        self.terminal_height = height;
        if first_measurement {
            self.sidebar_visible = !self.is_narrow();
        }
        self.mark_dirty();
    }

    /// True when the viewport is too narrow for a fixed sidebar panel.
    pub fn is_narrow(&self) -> bool {
        self.terminal_width < NARROW_WIDTH_THRESHOLD
    }

    /// Mark the app to quit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Apply an event from the session channel.
    pub fn handle_session_event(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::ResponseReady {
                conversation_id,
                content,
            } => {
                self.controller.deliver_response(&conversation_id, content);
                if !self.user_has_scrolled {
                    self.scroll_to_bottom();
                }
            }
            SessionEvent::OverlayDismissRequested => {
                if self.is_narrow() {
                    self.sidebar_visible = false;
                }
            }
        }
        self.mark_dirty();
    }

    /// Submit the input box content as a user message.
    ///
    /// The input is left untouched while a reply is pending so nothing the
    /// user typed is lost to the gate.
    pub fn submit_input(&mut self) {
        if self.controller.is_pending() {
            return;
        }
        let content = self.input_box.content().to_string();
        if content.trim().is_empty() {
            return;
        }
        self.controller.send_message(&content);
        self.input_box.clear();
        self.scroll_to_bottom();
        self.mark_dirty();
    }

    /// Create a new conversation and focus the input.
    pub fn create_conversation(&mut self) {
        self.controller.new_conversation();
        self.sync_sidebar_index_to_active();
        self.focus = Focus::Input;
        self.scroll_to_bottom();
        self.mark_dirty();
    }

    /// Open the conversation currently selected in the sidebar.
    pub fn open_selected(&mut self) {
        if let Some(id) = self.selected_conversation_id() {
            // The id came from the list; NotFound here would be a bug.
            if let Err(err) = self.controller.select_conversation(&id) {
                error!(%err, id, "selected conversation vanished");
                self.clamp_sidebar_index();
                return;
            }
            self.focus = Focus::Input;
            self.scroll_to_bottom();
            self.mark_dirty();
        }
    }

    /// Delete the active conversation.
    pub fn delete_active(&mut self) {
        let id = self.controller.active_conversation_id().to_string();
        self.controller.delete_conversation(&id);
        self.sync_sidebar_index_to_active();
        self.scroll_to_bottom();
        self.mark_dirty();
    }

    /// Delete the conversation currently selected in the sidebar.
    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_conversation_id() {
            self.controller.delete_conversation(&id);
            self.clamp_sidebar_index();
            self.scroll_to_bottom();
            self.mark_dirty();
        }
    }

    /// Move the sidebar selection up.
    pub fn sidebar_move_up(&mut self) {
        if self.sidebar_index > 0 {
            self.sidebar_index -= 1;
            self.mark_dirty();
        }
    }

    /// Move the sidebar selection down.
    pub fn sidebar_move_down(&mut self) {
        let count = self.controller.conversations().len();
        if count > 0 && self.sidebar_index < count - 1 {
            self.sidebar_index += 1;
            self.mark_dirty();
        }
    }

    /// Toggle sidebar visibility.
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_visible = !self.sidebar_visible;
        if self.sidebar_visible {
            self.sync_sidebar_index_to_active();
            self.focus = Focus::Sidebar;
        } else {
            self.focus = Focus::Input;
        }
        self.mark_dirty();
    }

    /// Scroll the chat one line towards older messages.
    pub fn scroll_up(&mut self) {
        if self.scroll_offset < self.max_scroll {
            self.scroll_offset += 1;
            self.user_has_scrolled = true;
            self.mark_dirty();
        }
    }

    /// Scroll the chat one line towards newer messages.
    pub fn scroll_down(&mut self) {
        if self.scroll_offset > 0 {
            self.scroll_offset -= 1;
            self.user_has_scrolled = self.scroll_offset > 0;
            self.mark_dirty();
        }
    }

    /// Jump to the newest messages and re-enable auto-scroll.
    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = 0;
        self.user_has_scrolled = false;
    }

    /// ID of the conversation at the sidebar cursor, if any.
    pub fn selected_conversation_id(&self) -> Option<String> {
        self.controller
            .conversations()
            .get(self.sidebar_index)
            .map(|c| c.id.clone())
    }

    fn sync_sidebar_index_to_active(&mut self) {
        let active = self.controller.active_conversation_id();
        if let Some(position) = self
            .controller
            .conversations()
            .iter()
            .position(|c| c.id == active)
        {
            self.sidebar_index = position;
        }
    }

    fn clamp_sidebar_index(&mut self) {
        let count = self.controller.conversations().len();
        if self.sidebar_index >= count {
            self.sidebar_index = count.saturating_sub(1);
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
