//! Splits `.msg` text into 3-line `Time:`/`Name:`/`Message:` blocks.

use super::error::{Field, ParseError, StructuralError};
use super::validators::trim_ascii_control;

const BLOCK_LINES: usize = 3;

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Splits file text into lines on `\n` / `\r\n`, ignoring a leading byte-order mark
pub fn split_lines(text: &str) -> Vec<&str> {
    text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text).lines().collect()
}

/// One recognized block with its prefixes verified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawBlock<'a> {
    /// 1-based line number of the `Time:` line
    pub line: usize,
    lines: [&'a str; BLOCK_LINES],
}

impl<'a> RawBlock<'a> {
    /// Full text of the field's line, prefix included
    pub fn line_text(&self, field: Field) -> &'a str {
        self.lines[field.offset()]
    }

    /// Text after the field's prefix, untrimmed
    pub fn field(&self, field: Field) -> &'a str {
        let line = self.line_text(field);
        line.strip_prefix(field.prefix()).unwrap_or(line)
    }
}

/// Walks the lines of a file one block at a time.
///
/// Yields an error for an incomplete block or a wrong prefix and then stops.
/// After each block a single blank separator line (spaces and control
/// characters only) is
/// skipped; a second blank line is left to fail the next prefix check.
#[derive(Debug)]
pub struct BlockTokenizer<'a, 'l> {
    lines: &'l [&'a str],
    cursor: usize,
    failed: bool,
}

impl<'a, 'l> BlockTokenizer<'a, 'l> {
    pub fn new(lines: &'l [&'a str]) -> Self {
        Self { lines, cursor: 0, failed: false }
    }

    fn next_block(&mut self) -> Result<RawBlock<'a>, ParseError> {
        let start = self.cursor;
        let line = start + 1;
        let available = self.lines.len() - start;

        if available < BLOCK_LINES {
            return Err(ParseError::Structural {
                line,
                kind: StructuralError::IncompleteBlock { available },
            });
        }

        let lines = [self.lines[start], self.lines[start + 1], self.lines[start + 2]];
        for field in Field::ALL {
            if !lines[field.offset()].starts_with(field.prefix()) {
                return Err(ParseError::Structural {
                    line,
                    kind: StructuralError::MalformedLinePrefix { expected: field },
                });
            }
        }

        self.cursor += BLOCK_LINES;
        if self.lines.get(self.cursor).is_some_and(|next| trim_ascii_control(next).is_empty()) {
            self.cursor += 1;
        }

        Ok(RawBlock { line, lines })
    }
}

impl<'a> Iterator for BlockTokenizer<'a, '_> {
    type Item = Result<RawBlock<'a>, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.cursor >= self.lines.len() {
            return None;
        }
        let block = self.next_block();
        self.failed = block.is_err();
        Some(block)
    }
}
