// TUI module for the interactive conversation viewer
mod app;
mod events;
mod layout;
mod rendering;

use std::io::{self, Stdout, Write};
use std::path::PathBuf;

use anyhow::Result;
pub use app::App;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::models::Conversation;
use crate::parsers::ParseOptions;

/// Puts the terminal into raw mode on an alternate screen and restores it on drop,
/// including when the event loop returns early with an error
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(e) => {
                restore_screen(&mut io::stdout());
                Err(e.into())
            }
        }
    }
}

/// Leave raw mode and the alternate screen, ignoring failures
fn restore_screen<W: Write>(out: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(out, LeaveAlternateScreen);
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_screen(self.terminal.backend_mut());
        let _ = self.terminal.show_cursor();
    }
}

/// Run the interactive viewer over an already parsed conversation
pub fn run_viewer(path: PathBuf, options: ParseOptions, conversation: Conversation) -> Result<()> {
    let mut guard = TerminalGuard::enter()?;
    let mut app = App::new(path, options, conversation);
    app.run(&mut guard.terminal)
}
