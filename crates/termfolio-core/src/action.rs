//! UI actions
//!
//! Actions produced by the App state machine for the runtime to execute.

/// Actions produced by the App state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Redraw the UI.
    Render,

    /// Start loading the content source; deliver the result back as
    /// [`crate::AppEvent::ContentLoaded`]. Emitted at most once while a
    /// load is in flight.
    LoadContent,

    /// Quit the application.
    Quit,
}
