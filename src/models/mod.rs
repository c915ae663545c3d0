//! Data models for logged conversations.
//!
//! - [`ChatMessage`] - One validated `Time:`/`Name:`/`Message:` block
//! - [`Conversation`] - The ordered messages of one `.msg` file
//! - [`Segment`] - One display-ready unit produced by the renderer
//!
//! Messages are only produced by the validators in [`crate::parsers`], so every
//! value of these types already satisfies the field constraints.

pub mod message;
pub mod segment;

pub use message::{ChatMessage, Conversation};
pub use segment::{EmoticonKind, Segment, TextStyle};
