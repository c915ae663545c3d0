//! Viewer application state and event handling.
//!
//! The `App` owns the loaded conversation, its rendered segment lines and the
//! selection. Reloading re-parses the file; only a fully successful parse
//! replaces the conversation, otherwise the previous one stays on screen and
//! the error goes to the status bar.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;
use tracing::{info, warn};

use super::events::{Action, poll_event};
use super::rendering::{ViewState, render_ui};
use crate::diagnostics::headline;
use crate::models::{Conversation, Segment};
use crate::parsers::{ParseOptions, parse_file};
use crate::render::render_conversation;
use crate::utils::format_path_with_tilde;

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 8000;
/// Rows moved by PageUp/PageDown
const PAGE_SIZE: isize = 10;

/// Type of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

pub struct App {
    path: PathBuf,
    title: String,
    options: ParseOptions,
    conversation: Conversation,
    rendered: Vec<Vec<Segment>>,
    selected_idx: usize,
    should_quit: bool,
    status_message: Option<StatusMessage>,
    // Dirty state tracking for efficient rendering
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl App {
    pub fn new(path: PathBuf, options: ParseOptions, conversation: Conversation) -> Self {
        let title = format_path_with_tilde(&path);
        let rendered = render_conversation(&conversation);
        Self {
            path,
            title,
            options,
            conversation,
            rendered,
            selected_idx: 0,
            should_quit: false,
            status_message: None,
            needs_redraw: true,
            last_draw_time: Instant::now(),
        }
    }

    /// Set a transient status message with automatic expiry
    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    /// Check and clear expired status messages
    fn check_and_clear_expired_status(&mut self) {
        let expired =
            self.status_message.as_ref().is_some_and(|msg| Instant::now() >= msg.expires_at);
        if expired {
            self.status_message = None;
            self.needs_redraw = true;
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            self.check_and_clear_expired_status();

            // Draw if dirty or if it's been >100ms (for terminal resize handling)
            let now = Instant::now();
            if self.needs_redraw || now.duration_since(self.last_draw_time) >= Duration::from_millis(100)
            {
                terminal.draw(|f| render_ui(f, &self.view_state()))?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action);
        }

        Ok(())
    }

    fn view_state(&self) -> ViewState<'_> {
        ViewState {
            title: &self.title,
            messages: self.conversation.messages(),
            rendered: &self.rendered,
            selected_idx: self.selected_idx,
            status_message: self.status_message.as_ref(),
        }
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::MoveUp => self.move_selection(-1),
            Action::MoveDown => self.move_selection(1),
            Action::PageUp => self.move_selection(-PAGE_SIZE),
            Action::PageDown => self.move_selection(PAGE_SIZE),
            Action::First => self.move_selection(isize::MIN),
            Action::Last => self.move_selection(isize::MAX),
            Action::Reload => self.reload(),
            Action::None => {}
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let total = self.rendered.len();
        if total == 0 {
            self.selected_idx = 0;
            return;
        }

        let old_idx = self.selected_idx;
        let new_idx = self.selected_idx.saturating_add_signed(delta);
        self.selected_idx = new_idx.min(total - 1);

        if old_idx != self.selected_idx {
            self.needs_redraw = true;
        }
    }

    /// Re-read the file; the current conversation is kept unless the new parse succeeds
    fn reload(&mut self) {
        match parse_file(&self.path, &self.options) {
            Ok(conversation) => {
                info!(path = %self.path.display(), messages = conversation.len(), "viewer.reloaded");
                let count = conversation.len();
                self.replace_conversation(conversation);
                self.set_status(
                    format!("✓ Reloaded {} messages", count),
                    MessageType::Success,
                    STATUS_SUCCESS_DURATION_MS,
                );
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "viewer.reload_failed");
                self.set_status(
                    format!("✗ {}: {} (showing previous version)", headline(&e), e),
                    MessageType::Error,
                    STATUS_ERROR_DURATION_MS,
                );
            }
        }
    }

    fn replace_conversation(&mut self, conversation: Conversation) {
        // A fresh render pass so the first message always shows its nickname
        self.rendered = render_conversation(&conversation);
        self.conversation = conversation;
        self.selected_idx = self.selected_idx.min(self.rendered.len().saturating_sub(1));
        self.needs_redraw = true;
    }
}
