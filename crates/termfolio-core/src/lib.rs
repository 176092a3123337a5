//! Portfolio terminal core logic
//!
//! Pure state machine logic for the portfolio terminal, completely decoupled
//! from I/O. This enables deterministic testing of every user-visible
//! behavior without a real terminal.
//!
//! # Architecture
//!
//! All controller logic lives in deterministic state machines that are
//! isolated from rendering, time, and the content source. State transitions
//! produce declarative [`AppAction`]s that describe intended effects rather
//! than executing them directly; a runtime (the ratatui front end in
//! production, a plain test driver otherwise) is responsible for
//! interpreting and executing those actions.
//!
//! # Components
//!
//! - [`App`]: the controller state machine (dispatch, executor, lazy load)
//! - [`registry`]: the static command registry
//! - [`history`]: session command history with a recall cursor
//! - [`input`]: the input-line key-event state machine
//! - [`screen`]: the renderer-agnostic output model
//! - [`content`]: the asynchronous content-source boundary

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
mod event;
pub mod content;
pub mod history;
pub mod input;
pub mod registry;
pub mod screen;
pub mod theme;

pub use action::AppAction;
pub use app::App;
pub use content::{ContentError, ContentSource, ContentTable};
pub use event::AppEvent;
pub use history::History;
pub use input::{InputEffect, InputState, KeyInput};
pub use registry::{CommandKind, Registry};
pub use screen::{Block, BlockRole, DetailSection, Line, Screen};
pub use theme::Theme;
