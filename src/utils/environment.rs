use std::env;
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

/// `EnvFilter` directive for log output, e.g. `debug` or `msg_viewer=trace`
pub const LOG_FILTER_VAR: &str = "MSG_VIEWER_LOG";
/// Append logs to this file instead of stderr
pub const LOG_FILE_VAR: &str = "MSG_VIEWER_LOG_FILE";

const DEFAULT_LOG_FILTER: &str = "warn";

/// Logging settings read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub filter: String,
    pub file: Option<PathBuf>,
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self::from_values(env::var(LOG_FILTER_VAR).ok(), env::var_os(LOG_FILE_VAR).map(PathBuf::from))
    }

    fn from_values(filter: Option<String>, file: Option<PathBuf>) -> Self {
        let filter = filter
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        let file = file.filter(|p| !p.as_os_str().is_empty());
        Self { filter, file }
    }
}

/// Install the global tracing subscriber.
///
/// Without a log file, line-oriented commands log to stderr while the
/// interactive viewer stays silent so the alternate screen is not overwritten.
///
/// # Errors
///
/// Returns an error if the filter directive is invalid, the log file cannot be
/// opened, or a subscriber is already installed.
pub fn init_logging(config: &LogConfig, interactive: bool) -> Result<()> {
    let filter = EnvFilter::try_new(&config.filter)
        .with_context(|| format!("Invalid {} directive: {}", LOG_FILTER_VAR, config.filter))?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match &config.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
        }
        None if interactive => return Ok(()),
        None => builder.with_writer(io::stderr).try_init(),
    };

    installed.map_err(|e| anyhow!("Failed to install log subscriber: {}", e))
}
