//! Parser for `.msg` conversation files
//!
//! # Error Handling Strategy
//!
//! Parsing is **fail-fast and all-or-nothing**:
//!
//! - **First failure wins**: The first structural or validation error aborts the parse.
//!   No partially populated [`Conversation`](crate::models::Conversation) is ever returned.
//!
//! - **Positional errors**: Every block error carries the 1-based line of the block's
//!   `Time:` line and, for validation errors, the [`Field`](error::Field) that failed.
//!
//! - **Typed errors**: [`ParseError`] is a `thiserror` enum so callers can match on the
//!   failure class and present targeted guidance (see [`crate::diagnostics`]).
//!
//! # Pipeline
//!
//! text → [`blocks::BlockTokenizer`] → per-field [`validators`] → ordered messages

pub mod blocks;
pub mod error;
pub mod messages;
pub mod options;
pub mod validators;

pub use error::{Field, IoError, ParseError, StructuralError, ValidationError};
pub use messages::{parse_bytes, parse_file, parse_str};
pub use options::{NicknamePolicy, ParseOptions, TimestampPolicy};
