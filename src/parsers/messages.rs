use std::fs;
use std::path::Path;
use std::str;

use tracing::{debug, info, warn};

use super::blocks::{BlockTokenizer, RawBlock, split_lines};
use super::error::{Field, IoError, ParseError, ValidationError};
use super::options::ParseOptions;
use super::validators::{
    trim_ascii_control, validate_content, validate_nickname, validate_timestamp,
};
use crate::models::{ChatMessage, Conversation};

/// Parse a `.msg` file into a conversation.
///
/// The whole file is read at once; nothing is returned unless every block is valid.
///
/// # Errors
///
/// - [`ParseError::Io`] if the file cannot be read or is not UTF-8
/// - [`ParseError::Structural`] / [`ParseError::Validation`] for the first bad block
/// - [`ParseError::NoMessagesFound`] for an empty file
pub fn parse_file(path: &Path, options: &ParseOptions) -> Result<Conversation, ParseError> {
    info!(path = %path.display(), "parse.start");

    let bytes = fs::read(path).map_err(|source| {
        warn!(path = %path.display(), error = %source, "parse.read_failed");
        IoError::Read { path: path.to_path_buf(), source }
    })?;

    parse_bytes(&bytes, options)
}

/// Parse raw file contents. Input must be UTF-8.
///
/// # Errors
///
/// Same as [`parse_file`], minus read failures.
pub fn parse_bytes(bytes: &[u8], options: &ParseOptions) -> Result<Conversation, ParseError> {
    let text = str::from_utf8(bytes).map_err(|source| {
        warn!(valid_up_to = source.valid_up_to(), "parse.invalid_utf8");
        IoError::NotUtf8 { source }
    })?;

    parse_str(text, options)
}

/// Parse already-decoded `.msg` text.
///
/// # Errors
///
/// Same as [`parse_bytes`], minus decoding failures.
pub fn parse_str(text: &str, options: &ParseOptions) -> Result<Conversation, ParseError> {
    let lines = split_lines(text);
    let mut messages = Vec::new();

    for block in BlockTokenizer::new(&lines) {
        let message = block.and_then(|block| assemble_message(&block, options)).inspect_err(
            |err| warn!(line = ?err.line(), error = %err, "parse.block_rejected"),
        )?;
        messages.push(message);
    }

    if messages.is_empty() {
        warn!(lines = lines.len(), "parse.no_messages");
        return Err(ParseError::NoMessagesFound);
    }

    info!(lines = lines.len(), messages = messages.len(), "parse.complete");
    Ok(Conversation::from_messages(messages))
}

/// Strip, trim and validate the three fields of one block.
///
/// Timestamp and nickname lose surrounding spaces and control characters;
/// content keeps its spacing.
fn assemble_message(
    block: &RawBlock<'_>,
    options: &ParseOptions,
) -> Result<ChatMessage, ParseError> {
    let line = block.line;
    let at = |field: Field| move |kind: ValidationError| ParseError::Validation { line, field, kind };

    let timestamp = validate_timestamp(trim_ascii_control(block.field(Field::Timestamp)), options)
        .map_err(at(Field::Timestamp))?;
    let nickname = validate_nickname(trim_ascii_control(block.field(Field::Nickname)), options)
        .map_err(at(Field::Nickname))?;
    let content = validate_content(block.field(Field::Content)).map_err(at(Field::Content))?;

    debug!(line, nickname = %nickname, "parse.block_accepted");
    Ok(ChatMessage::from_validated(timestamp, nickname, content))
}
