//! User-facing reports for parse failures.
//!
//! [`report`] turns a [`ParseError`] into a short multi-line explanation with
//! guidance on how to fix the file. Hosts show it in place of the raw error.

use crate::parsers::{Field, IoError, ParseError, StructuralError, ValidationError};

const FORMAT_CHECKLIST: &[&str] = &[
    "Timestamps must be in ISO 8601 format (YYYY-MM-DDTHH:MM:SS)",
    "Nicknames can only contain letters, numbers, underscore, hyphen, period",
    "Each field must be under 1000 characters",
    "File must be UTF-8 encoded",
];

const FILE_SUGGESTIONS: &[&str] = &[
    "Ensure the file is UTF-8 encoded",
    "Check file permissions and accessibility",
    "Verify the .msg file format is correct",
];

const BLOCK_LAYOUT: &str = "Each message is three lines - Time:<timestamp>, Name:<nickname>, \
                            Message:<text> - optionally followed by one blank line";

/// Short title for the failure class
pub fn headline(err: &ParseError) -> &'static str {
    match err {
        ParseError::Io(IoError::Read { .. }) => "Could not read chat file",
        ParseError::Io(IoError::NotUtf8 { .. }) => "Chat file is not UTF-8 encoded",
        ParseError::Structural { .. } | ParseError::Validation { .. } => {
            "The file format is incorrect!"
        }
        ParseError::NoMessagesFound => "No messages found",
    }
}

/// What the user should change, specific to the failure
pub fn guidance(err: &ParseError) -> String {
    match err {
        ParseError::Io(_) => String::from("The file could not be loaded as text."),
        ParseError::NoMessagesFound => format!("The file is empty. {BLOCK_LAYOUT}."),
        ParseError::Structural { kind: StructuralError::IncompleteBlock { .. }, .. } => {
            format!("The last message is cut short. {BLOCK_LAYOUT}.")
        }
        ParseError::Structural { kind: StructuralError::MalformedLinePrefix { expected }, .. } => {
            format!(
                "Expected a line starting with '{}'. Only one blank line may separate messages. \
                 {BLOCK_LAYOUT}.",
                expected.prefix()
            )
        }
        ParseError::Validation { kind, .. } => validation_guidance(kind),
    }
}

fn validation_guidance(kind: &ValidationError) -> String {
    match kind {
        ValidationError::MalformedTimestamp { .. } => {
            "Write the time as YYYY-MM-DDTHH:MM:SS, for example 2025-05-31T14:30:00.".to_string()
        }
        ValidationError::EmptyNickname => {
            "Every message needs a sender name after 'Name:'.".to_string()
        }
        ValidationError::InvalidNicknameCharset { invalid, .. } => format!(
            "Remove {invalid:?} from the nickname. Spaces and symbols other than _ - . are not allowed."
        ),
        ValidationError::ContentTooLong { field, .. } => {
            let what = match field {
                Field::Timestamp => "timestamp",
                Field::Nickname => "nickname",
                Field::Content => "message",
            };
            format!("Shorten the {what} to at most 1000 characters.")
        }
        ValidationError::WhitespaceOnlyContent => {
            "Leave the message completely empty or add some text.".to_string()
        }
        ValidationError::EncodingError => "Re-save the file as UTF-8.".to_string(),
    }
}

/// Full report for `err` raised while loading `source` (usually a file path)
pub fn report(source: &str, err: &ParseError) -> String {
    let mut lines = vec![headline(err).to_string(), format!("File: {source}")];

    if let Some(line) = err.offending_line() {
        lines.push(match err.line() {
            Some(block) if block != line => {
                format!("Location: line {line} (message starting at line {block})")
            }
            _ => format!("Location: line {line}"),
        });
    }

    lines.push(String::new());
    lines.push(format!("Technical details: {err}"));
    lines.push(guidance(err));

    let (intro, checklist) = match err {
        ParseError::Io(_) => ("Suggestions:", FILE_SUGGESTIONS),
        _ => ("Please ensure your .msg file follows the correct format:", FORMAT_CHECKLIST),
    };
    lines.push(String::new());
    lines.push(intro.to_string());
    lines.extend(checklist.iter().map(|item| format!("• {item}")));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
