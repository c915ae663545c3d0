//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for one three-line message block
#[derive(Clone)]
pub struct MessageBlockBuilder {
    timestamp: String,
    nickname: String,
    content: String,
}

impl MessageBlockBuilder {
    /// Create a block with default values
    pub fn new() -> Self {
        Self {
            timestamp: "2025-05-31T14:30:00".to_string(),
            nickname: "Alice".to_string(),
            content: "Hello".to_string(),
        }
    }

    /// Set the raw timestamp text (written after `Time:`)
    pub fn timestamp(mut self, timestamp: &str) -> Self {
        self.timestamp = timestamp.to_string();
        self
    }

    /// Set the raw nickname text (written after `Name:`)
    pub fn nickname(mut self, nickname: &str) -> Self {
        self.nickname = nickname.to_string();
        self
    }

    /// Set the raw content text (written after `Message:`)
    pub fn content(mut self, content: &str) -> Self {
        self.content = content.to_string();
        self
    }

    /// The block's three lines, without a trailing newline
    pub fn to_block(&self) -> String {
        format!("Time:{}\nName:{}\nMessage:{}", self.timestamp, self.nickname, self.content)
    }
}

impl Default for MessageBlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `.msg` files inside a temporary directory
pub struct MsgFileBuilder {
    temp_dir: TempDir,
    file_name: String,
    blocks: Vec<MessageBlockBuilder>,
    line_ending: &'static str,
    bom: bool,
}

impl MsgFileBuilder {
    /// Create a builder for `chat.msg` with no messages
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self {
            temp_dir,
            file_name: "chat.msg".to_string(),
            blocks: Vec::new(),
            line_ending: "\n",
            bom: false,
        }
    }

    /// Change the file name (and so its extension)
    pub fn file_name(mut self, name: &str) -> Self {
        self.file_name = name.to_string();
        self
    }

    /// Append a message block
    pub fn with_message(mut self, block: MessageBlockBuilder) -> Self {
        self.blocks.push(block);
        self
    }

    /// Append `count` blocks alternating between two senders
    pub fn with_messages(mut self, count: usize) -> Self {
        for i in 0..count {
            let nickname = if i % 2 == 0 { "Alice" } else { "Bob" };
            self.blocks.push(
                MessageBlockBuilder::new()
                    .nickname(nickname)
                    .content(&format!("Message number {} :)", i)),
            );
        }
        self
    }

    /// Use CRLF line endings
    pub fn crlf(mut self) -> Self {
        self.line_ending = "\r\n";
        self
    }

    /// Start the file with a UTF-8 byte order mark
    pub fn with_bom(mut self) -> Self {
        self.bom = true;
        self
    }

    /// Render the file text: blocks separated by one blank line
    pub fn to_text(&self) -> String {
        let body = self.blocks.iter().map(|b| b.to_block()).collect::<Vec<_>>().join("\n\n");
        let mut text = String::new();
        if self.bom {
            text.push('\u{feff}');
        }
        text.push_str(&body.replace('\n', self.line_ending));
        if !self.blocks.is_empty() {
            text.push_str(self.line_ending);
        }
        text
    }

    /// Write the file and return the directory guard plus the file path
    pub fn build(self) -> (TempDir, PathBuf) {
        let text = self.to_text();
        let path = self.temp_dir.path().join(&self.file_name);
        write_file(&path, text.as_bytes());
        (self.temp_dir, path)
    }
}

impl Default for MsgFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Write raw bytes to `path`
pub fn write_file(path: &Path, bytes: &[u8]) {
    let mut file = fs::File::create(path).expect("Failed to create file");
    file.write_all(bytes).expect("Failed to write file");
}

/// Write arbitrary bytes as `chat.msg` in a fresh temp dir
pub fn raw_msg_file(bytes: &[u8]) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("chat.msg");
    write_file(&path, bytes);
    (temp_dir, path)
}

/// The two-message conversation used across the scenario tests
pub const SAMPLE_CONVERSATION: &str = "Time:2025-05-31T14:30:00
Name:Alice_123
Message:Hello :) there

Time:2025-05-31T14:31:15
Name:Alice_123
Message:Great :(
";

/// A realistic conversation between three people
pub fn realistic_msg_file() -> (TempDir, PathBuf) {
    MsgFileBuilder::new()
        .with_message(
            MessageBlockBuilder::new()
                .timestamp("2025-05-31T09:00:00")
                .nickname("alice.smith")
                .content("Morning all :)"),
        )
        .with_message(
            MessageBlockBuilder::new()
                .timestamp("2025-05-31T09:00:30")
                .nickname("alice.smith")
                .content("Standup in 5"),
        )
        .with_message(
            MessageBlockBuilder::new()
                .timestamp("2025-05-31T09:01:10")
                .nickname("bob-the-builder")
                .content("Running late :("),
        )
        .with_message(
            MessageBlockBuilder::new()
                .timestamp("2025-05-31T09:02:00")
                .nickname("carol_99")
                .content(""),
        )
        .with_message(
            MessageBlockBuilder::new()
                .timestamp("2025-05-31T09:03:45")
                .nickname("alice.smith")
                .content("No worries"),
        )
        .build()
}
