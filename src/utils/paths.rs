use std::env;
use std::path::Path;

/// File extension of conversation files
pub const MSG_EXTENSION: &str = "msg";

/// Whether `path` has the `.msg` extension (case-insensitive)
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use msg_viewer::utils::has_msg_extension;
///
/// assert!(has_msg_extension(Path::new("chat.msg")));
/// assert!(!has_msg_extension(Path::new("chat.txt")));
/// ```
pub fn has_msg_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case(MSG_EXTENSION))
}

/// Formats a path with ~ substitution for the home directory
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use msg_viewer::utils::format_path_with_tilde;
///
/// let path = PathBuf::from("/Users/alice/chats/monday.msg");
/// // Returns "~/chats/monday.msg" if HOME=/Users/alice
/// let formatted = format_path_with_tilde(&path);
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, None)
}

/// Internal helper for path formatting with optional home override (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &Path, home_override: Option<&str>) -> String {
    let home_from_env = env::var("HOME").ok();
    let home = home_override.or(home_from_env.as_deref()).filter(|h| !h.is_empty());

    if let Some(home) = home
        && let Ok(rest) = path.strip_prefix(home)
    {
        return if rest.as_os_str().is_empty() {
            "~".to_string()
        } else {
            format!("~/{}", rest.to_string_lossy())
        };
    }

    path.to_string_lossy().into_owned()
}
