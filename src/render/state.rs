use tracing::debug;

use super::content::tokenize_content;
use crate::models::{ChatMessage, Conversation, Segment, TextStyle};

/// Nickname text shown when the sender did not change
pub const ELISION_MARKER: &str = "...:";

/// Remembers the last nickname shown during one render pass.
///
/// One state per conversation; messages must be rendered through it in
/// document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderState {
    last_nickname: Option<String>,
}

impl RenderState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nickname of the most recently rendered message, `None` at the start of a pass
    pub fn last_nickname(&self) -> Option<&str> {
        self.last_nickname.as_deref()
    }

    /// Forget the previous sender; call before rendering another conversation
    pub fn reset(&mut self) {
        debug!(last_nickname = ?self.last_nickname, "render.reset");
        self.last_nickname = None;
    }
}

/// Reset `state` to the start of a render pass
pub fn reset(state: &mut RenderState) {
    state.reset();
}

/// Render one message into display segments, updating `state`.
///
/// Output order: bracketed timestamp, nickname (or [`ELISION_MARKER`] when the
/// sender repeats), then the content segments.
pub fn render(message: &ChatMessage, state: &mut RenderState) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(3);
    segments.push(Segment::text(format!("[{}]", message.timestamp()), TextStyle::Plain));

    if state.last_nickname() == Some(message.nickname()) {
        segments.push(Segment::text(ELISION_MARKER, TextStyle::Nickname));
    } else {
        segments.push(Segment::text(format!("{}:", message.nickname()), TextStyle::Nickname));
        state.last_nickname = Some(message.nickname().to_string());
    }

    segments.extend(tokenize_content(message.content()));
    segments
}

/// Render a whole conversation from a fresh state, one segment list per message
pub fn render_conversation(conversation: &Conversation) -> Vec<Vec<Segment>> {
    let mut state = RenderState::new();
    conversation.iter().map(|message| render(message, &mut state)).collect()
}
