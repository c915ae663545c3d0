//! Turns validated messages into display segments.
//!
//! [`content`] splits message text around `:)` / `:(` emoticons, and [`state`]
//! adds the timestamp and nickname header while eliding repeated senders.

pub mod content;
pub mod state;

pub use content::tokenize_content;
pub use state::{ELISION_MARKER, RenderState, render, render_conversation, reset};
