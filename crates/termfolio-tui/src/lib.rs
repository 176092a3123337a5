//! Terminal UI for the portfolio shell
//!
//! A thin shell over the [`termfolio_core::App`] state machine that provides
//! terminal-specific I/O. All dispatch logic lives in the core; this crate
//! translates crossterm events, renders the screen model with ratatui, and
//! executes the actions the core produces.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod keymap;
pub mod runtime;
pub mod terminal;
pub mod ui;

pub use runtime::Runtime;
pub use terminal::{TerminalError, Tui};
pub use termfolio_core::{App, AppAction, AppEvent, KeyInput};
