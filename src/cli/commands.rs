use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::warn;

use crate::diagnostics::report;
use crate::models::{Conversation, Segment, TextStyle};
use crate::parsers::{NicknamePolicy, ParseOptions, TimestampPolicy, parse_file};
use crate::render::render_conversation;
use crate::utils::{
    LogConfig, format_path_with_tilde, has_msg_extension, init_logging, sanitize_for_terminal,
};

#[derive(Parser)]
#[command(name = "msg-viewer")]
#[command(version = "0.1.0")]
#[command(about = "Validate and display .msg chat logs", long_about = None)]
pub struct Cli {
    /// Replace nicknames with invalid characters by "..." instead of rejecting the file
    #[arg(long, global = true)]
    pub lenient_nicknames: bool,

    /// Accept any non-empty timestamp text
    #[arg(long, global = true)]
    pub any_timestamp: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a chat log and report the number of messages
    Check {
        /// Path to the .msg file
        file: PathBuf,
    },
    /// Print every message of a chat log, one line each
    Print {
        /// Path to the .msg file
        file: PathBuf,
        /// Emit the rendered segments as JSON
        #[arg(long)]
        json: bool,
    },
    /// Browse a chat log interactively
    View {
        /// Path to the .msg file
        file: PathBuf,
    },
}

impl Cli {
    fn parse_options(&self) -> ParseOptions {
        let mut options = ParseOptions::strict();
        if self.lenient_nicknames {
            options = options.with_nickname_policy(NicknamePolicy::Lenient);
        }
        if self.any_timestamp {
            options = options.with_timestamp_policy(TimestampPolicy::AnyNonEmpty);
        }
        options
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let interactive = matches!(cli.command, Some(Commands::View { .. }));
    init_logging(&LogConfig::from_env(), interactive)?;

    let options = cli.parse_options();
    match &cli.command {
        Some(Commands::Check { file }) => {
            check(file, &options)?;
        }
        Some(Commands::Print { file, json }) => {
            print(file, &options, *json)?;
        }
        Some(Commands::View { file }) => {
            let conversation = load(file, &options)?;
            crate::tui::run_viewer(file.clone(), options, conversation)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

/// Parse `path`, printing the diagnostic report to stderr on failure
fn load(path: &Path, options: &ParseOptions) -> Result<Conversation> {
    if !has_msg_extension(path) {
        warn!(path = %path.display(), "cli.unexpected_extension");
    }

    match parse_file(path, options) {
        Ok(conversation) => Ok(conversation),
        Err(e) => {
            let source = sanitize_for_terminal(&format_path_with_tilde(path));
            eprintln!("{}", report(&source, &e));
            Err(e).with_context(|| format!("Failed to load chat file: {}", path.display()))
        }
    }
}

fn check(path: &Path, options: &ParseOptions) -> Result<()> {
    let conversation = load(path, options)?;
    println!(
        "{}: {} messages OK",
        sanitize_for_terminal(&format_path_with_tilde(path)),
        conversation.len()
    );
    Ok(())
}

fn print(path: &Path, options: &ParseOptions, json: bool) -> Result<()> {
    let conversation = load(path, options)?;
    let rendered = render_conversation(&conversation);

    if json {
        let output =
            serde_json::to_string_pretty(&rendered).context("Failed to serialize messages")?;
        println!("{}", output);
        return Ok(());
    }

    for segments in &rendered {
        println!("{}", plain_line(segments));
    }
    Ok(())
}

/// Plain-text form of one rendered message, emoticons in their source form
fn plain_line(segments: &[Segment]) -> String {
    let mut line = String::new();
    for segment in segments {
        line.push_str(&sanitize_for_terminal(segment.source_text()));
        if matches!(segment, Segment::Text { style: TextStyle::Plain | TextStyle::Nickname, .. }) {
            line.push(' ');
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmoticonKind;

    #[test]
    fn test_plain_line_layout() {
        let segments = vec![
            Segment::text("[2025-05-31T14:30:00]", TextStyle::Plain),
            Segment::text("...:", TextStyle::Nickname),
            Segment::text("Great ", TextStyle::BoldBody),
            Segment::emoticon(EmoticonKind::Sad),
        ];
        assert_eq!(plain_line(&segments), "[2025-05-31T14:30:00] ...: Great :(");
    }

    #[test]
    fn test_plain_line_strips_escape_sequences() {
        let segments = vec![Segment::text("\x1b]0;title\x07hi", TextStyle::BoldBody)];
        assert_eq!(plain_line(&segments), "hi");
    }

    #[test]
    fn test_flags_select_policies() {
        let cli = Cli::parse_from(["msg-viewer", "--lenient-nicknames", "check", "a.msg"]);
        let options = cli.parse_options();
        assert_eq!(options.nickname_policy, NicknamePolicy::Lenient);
        assert_eq!(options.timestamp_policy, TimestampPolicy::Strict);

        let cli = Cli::parse_from(["msg-viewer", "print", "a.msg", "--any-timestamp", "--json"]);
        let options = cli.parse_options();
        assert_eq!(options.timestamp_policy, TimestampPolicy::AnyNonEmpty);
        assert!(matches!(cli.command, Some(Commands::Print { json: true, .. })));
    }
}
