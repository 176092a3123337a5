//! Terminal setup and teardown.
//!
//! Raw mode and (by default) the alternate screen are entered on
//! construction and restored on drop, so a panic or early return still
//! leaves the user's shell intact.

use std::io::{self, Stdout};

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use thiserror::Error;

/// Front-end failures.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// Terminal or event-stream I/O failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    /// The log filter directive did not parse.
    #[error("invalid log filter: {0}")]
    LogFilter(String),
}

/// The backend used in production.
pub type Backend = CrosstermBackend<Stdout>;

/// Owns the raw-mode terminal for the lifetime of the program.
pub struct Tui {
    terminal: Terminal<Backend>,
    alt_screen: bool,
}

impl Tui {
    /// Enter raw mode (and the alternate screen unless disabled) and hand
    /// back a ready terminal.
    pub fn new(alt_screen: bool) -> Result<Self, TerminalError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if alt_screen {
            execute!(stdout, EnterAlternateScreen)?;
        }
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;
        Ok(Self { terminal, alt_screen })
    }

    /// The wrapped ratatui terminal.
    pub fn terminal_mut(&mut self) -> &mut Terminal<Backend> {
        &mut self.terminal
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        if self.alt_screen {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
        }
    }
}
