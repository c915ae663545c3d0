use std::fmt;
use std::io;
use std::path::PathBuf;
use std::str::Utf8Error;

use thiserror::Error;

use super::validators::MAX_FIELD_LENGTH;

/// The three lines of a message block, in file order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Timestamp,
    Nickname,
    Content,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Timestamp, Field::Nickname, Field::Content];

    /// Literal prefix the field's line must start with
    pub fn prefix(self) -> &'static str {
        match self {
            Field::Timestamp => "Time:",
            Field::Nickname => "Name:",
            Field::Content => "Message:",
        }
    }

    /// Zero-based line offset of the field inside its block
    pub fn offset(self) -> usize {
        match self {
            Field::Timestamp => 0,
            Field::Nickname => 1,
            Field::Content => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::Timestamp => "timestamp",
            Field::Nickname => "nickname",
            Field::Content => "message content",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single field failed validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("malformed timestamp {raw:?} - must be ISO 8601 format YYYY-MM-DDTHH:MM:SS")]
    MalformedTimestamp { raw: String },
    #[error("nickname cannot be empty or contain only whitespace")]
    EmptyNickname,
    #[error(
        "nickname contains invalid character {invalid:?} - only A-Z, a-z, 0-9, _, -, . allowed"
    )]
    InvalidNicknameCharset { nickname: String, invalid: char },
    #[error("{field} exceeds maximum length of {MAX_FIELD_LENGTH} characters (found {length})")]
    ContentTooLong { field: Field, length: usize },
    #[error("message content cannot contain only whitespace")]
    WhitespaceOnlyContent,
    #[error("message content contains invalid UTF-8 sequences")]
    EncodingError,
}

impl ValidationError {
    /// The field this error belongs to
    pub fn field(&self) -> Field {
        match self {
            ValidationError::MalformedTimestamp { .. } => Field::Timestamp,
            ValidationError::EmptyNickname | ValidationError::InvalidNicknameCharset { .. } => {
                Field::Nickname
            }
            ValidationError::ContentTooLong { field, .. } => *field,
            ValidationError::WhitespaceOnlyContent | ValidationError::EncodingError => {
                Field::Content
            }
        }
    }
}

/// The block grammar was violated
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralError {
    #[error("incomplete message block - requires 3 lines, found {available}")]
    IncompleteBlock { available: usize },
    #[error("invalid {} line format - must start with '{}'", .expected, .expected.prefix())]
    MalformedLinePrefix { expected: Field },
}

/// The input could not be read or decoded
#[derive(Debug, Error)]
pub enum IoError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("file is not valid UTF-8: {source}")]
    NotUtf8 {
        #[source]
        source: Utf8Error,
    },
}

/// Why a conversation could not be loaded.
///
/// Every variant is fatal to the parse that produced it. Line numbers are
/// 1-based and point at the first line of the offending block.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error(transparent)]
    Io(#[from] IoError),
    #[error("line {line}: {kind}")]
    Structural { line: usize, kind: StructuralError },
    #[error("line {line}: invalid {field}: {kind}")]
    Validation { line: usize, field: Field, kind: ValidationError },
    #[error("no valid messages found in file")]
    NoMessagesFound,
}

impl ParseError {
    /// Starting line of the block that failed, if the error belongs to one
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::Structural { line, .. } | ParseError::Validation { line, .. } => {
                Some(*line)
            }
            ParseError::Io(_) | ParseError::NoMessagesFound => None,
        }
    }

    /// Exact line that caused the failure.
    ///
    /// Differs from [`ParseError::line`] for prefix and field errors on the
    /// second or third line of a block.
    pub fn offending_line(&self) -> Option<usize> {
        match self {
            ParseError::Structural {
                line,
                kind: StructuralError::MalformedLinePrefix { expected },
            } => Some(line + expected.offset()),
            ParseError::Structural { line, .. } => Some(*line),
            ParseError::Validation { line, field, .. } => Some(line + field.offset()),
            ParseError::Io(_) | ParseError::NoMessagesFound => None,
        }
    }

    /// Field that failed validation
    pub fn field(&self) -> Option<Field> {
        match self {
            ParseError::Validation { field, .. } => Some(*field),
            ParseError::Structural {
                kind: StructuralError::MalformedLinePrefix { expected }, ..
            } => Some(*expected),
            _ => None,
        }
    }

    pub fn validation_error(&self) -> Option<&ValidationError> {
        match self {
            ParseError::Validation { kind, .. } => Some(kind),
            _ => None,
        }
    }

    pub fn structural_error(&self) -> Option<&StructuralError> {
        match self {
            ParseError::Structural { kind, .. } => Some(kind),
            _ => None,
        }
    }

    pub fn is_io(&self) -> bool {
        matches!(self, ParseError::Io(_))
    }
}
