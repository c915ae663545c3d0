use serde::{Deserialize, Serialize};

/// Display style attached to a text segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextStyle {
    /// Bracketed timestamp
    Plain,
    /// Nickname or the elision marker
    Nickname,
    /// Message body text
    BoldBody,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmoticonKind {
    Happy,
    Sad,
}

impl EmoticonKind {
    /// The two-character source form recognized in message content
    pub fn as_str(self) -> &'static str {
        match self {
            EmoticonKind::Happy => ":)",
            EmoticonKind::Sad => ":(",
        }
    }
}

/// One unit of a rendered message line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Segment {
    Text { value: String, style: TextStyle },
    Emoticon { kind: EmoticonKind },
}

impl Segment {
    pub fn text(value: impl Into<String>, style: TextStyle) -> Self {
        Segment::Text { value: value.into(), style }
    }

    pub fn emoticon(kind: EmoticonKind) -> Self {
        Segment::Emoticon { kind }
    }

    /// The text this segment was produced from; emoticons give back `:)` / `:(`
    pub fn source_text(&self) -> &str {
        match self {
            Segment::Text { value, .. } => value,
            Segment::Emoticon { kind } => kind.as_str(),
        }
    }
}
