//! UI events
//!
//! Events fed into the App state machine by the runtime.

use crate::{ContentError, ContentTable, KeyInput};

/// Events consumed by the App state machine.
#[derive(Debug)]
pub enum AppEvent {
    /// A line-editing key on the input field.
    Key(KeyInput),

    /// Clear-screen shortcut (Ctrl+L anywhere).
    ClearScreen,

    /// Toggle the nth visible detail section (zero-based).
    ToggleSection(usize),

    /// The content-source load finished.
    ContentLoaded(Result<ContentTable, ContentError>),

    /// Quit requested by the front end.
    Quit,
}
