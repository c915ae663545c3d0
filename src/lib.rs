//! msg-viewer - Parse, validate and render `.msg` chat logs
//!
//! A `.msg` file is a sequence of three-line message blocks:
//!
//! ```text
//! Time:2025-05-31T14:30:00
//! Name:Alice_123
//! Message:Hello :) there
//! ```
//!
//! This library provides:
//!
//! - Fail-fast parsing into an ordered [`Conversation`] of validated [`ChatMessage`]s
//! - Typed errors ([`ParseError`]) that name the failing line and field
//! - Rendering of messages into styled [`Segment`]s, eliding repeated senders
//! - User-facing failure reports in [`diagnostics`]
//!
//! # Example
//!
//! ```
//! use msg_viewer::{ParseOptions, RenderState, parse_str, render};
//!
//! let text = "Time:2025-05-31T14:30:00\nName:Alice\nMessage:Hi :)\n";
//! let conversation = parse_str(text, &ParseOptions::default())?;
//!
//! let mut state = RenderState::new();
//! let segments = render(&conversation[0], &mut state);
//! assert_eq!(segments[1].source_text(), "Alice:");
//! # Ok::<(), msg_viewer::ParseError>(())
//! ```

pub mod cli;
pub mod diagnostics;
pub mod models;
pub mod parsers;
pub mod render;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use models::{ChatMessage, Conversation, Segment};
pub use parsers::{ParseError, ParseOptions, parse_bytes, parse_file, parse_str};
pub use render::{RenderState, render, render_conversation, reset};
