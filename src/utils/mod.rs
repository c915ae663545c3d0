pub mod environment;
pub mod paths;
pub mod terminal;

pub use environment::{LogConfig, init_logging};
pub use paths::{format_path_with_tilde, has_msg_extension};
pub use terminal::sanitize_for_terminal;
