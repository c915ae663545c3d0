/// How nicknames outside `[A-Za-z0-9._-]` are handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NicknamePolicy {
    /// Reject with `InvalidNicknameCharset`
    #[default]
    Strict,
    /// Replace the nickname with `...` and keep parsing
    Lenient,
}

/// Which timestamps are accepted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimestampPolicy {
    /// `YYYY-MM-DDTHH:MM:SS` with a valid calendar date and time of day
    #[default]
    Strict,
    /// Any non-blank string within the length limit
    AnyNonEmpty,
}

/// Knobs for the message parser. The default is the strict grammar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub nickname_policy: NicknamePolicy,
    pub timestamp_policy: TimestampPolicy,
}

impl ParseOptions {
    pub fn strict() -> Self {
        Self::default()
    }

    pub fn with_nickname_policy(mut self, policy: NicknamePolicy) -> Self {
        self.nickname_policy = policy;
        self
    }

    pub fn with_timestamp_policy(mut self, policy: TimestampPolicy) -> Self {
        self.timestamp_policy = policy;
        self
    }
}
