use std::ops::Index;
use std::slice;

use serde::Serialize;

use crate::parsers::ParseOptions;
use crate::parsers::error::ValidationError;
use crate::parsers::validators::{validate_content, validate_nickname, validate_timestamp};

/// A single validated chat message.
///
/// Fields are private so a `ChatMessage` can only exist in its validated form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    timestamp: String,
    nickname: String,
    content: String,
}

impl ChatMessage {
    /// Validates the three fields with the strict rules and builds a message.
    ///
    /// The timestamp and nickname are taken as-is (no trimming); the content is
    /// NFC-normalized.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] hit, checking timestamp, nickname
    /// and content in that order.
    pub fn new(
        timestamp: impl Into<String>,
        nickname: impl Into<String>,
        content: impl AsRef<str>,
    ) -> Result<Self, ValidationError> {
        let options = ParseOptions::default();
        let timestamp = validate_timestamp(&timestamp.into(), &options)?;
        let nickname = validate_nickname(&nickname.into(), &options)?;
        let content = validate_content(content.as_ref())?;
        Ok(Self::from_validated(timestamp, nickname, content))
    }

    /// Assembles a message from fields that already went through the validators
    pub(crate) fn from_validated(timestamp: String, nickname: String, content: String) -> Self {
        Self { timestamp, nickname, content }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// The messages of one conversation file in document order.
///
/// A `Conversation` is never empty when it comes out of the parser, and it is
/// replaced wholesale when another file is loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Conversation {
    pub(crate) fn from_messages(messages: Vec<ChatMessage>) -> Self {
        Self { messages }
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn iter(&self) -> slice::Iter<'_, ChatMessage> {
        self.messages.iter()
    }

    pub fn get(&self, index: usize) -> Option<&ChatMessage> {
        self.messages.get(index)
    }

    pub fn into_messages(self) -> Vec<ChatMessage> {
        self.messages
    }
}

impl Index<usize> for Conversation {
    type Output = ChatMessage;

    fn index(&self, index: usize) -> &Self::Output {
        &self.messages[index]
    }
}

impl<'a> IntoIterator for &'a Conversation {
    type Item = &'a ChatMessage;
    type IntoIter = slice::Iter<'a, ChatMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

impl IntoIterator for Conversation {
    type Item = ChatMessage;
    type IntoIter = std::vec::IntoIter<ChatMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.into_iter()
    }
}
