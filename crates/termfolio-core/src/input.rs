//! Input-line key-event state machine.
//!
//! Translates line-editing keys into buffer edits and submissions. The
//! handler reacts per keystroke; there are no persistent modes. Global
//! shortcuts (clear screen, quit, section toggles) are handled before this
//! layer by the front end's keymap.

use crate::{History, Registry};

/// A line-editing key, already translated from the platform event type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// A printable character.
    Char(char),
    /// Delete the character before the cursor.
    Backspace,
    /// Submit the current line.
    Enter,
    /// Recall the previous history entry.
    Up,
    /// Recall the next history entry.
    Down,
    /// Complete the current prefix against the command registry.
    Tab,
}

/// Observable outcome of a keystroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEffect {
    /// The line was submitted. Carries the trimmed text, possibly empty;
    /// the dispatcher decides what (if anything) to do with it.
    Submitted(String),
    /// The buffer changed and the input line needs a redraw.
    Edited,
}

/// Input-line state: the edit buffer plus session history.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    buffer: String,
    history: History,
}

impl InputState {
    /// Current buffer contents.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Session history (read-only).
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Apply one keystroke.
    ///
    /// Returns `None` when the key had no observable effect.
    pub fn handle_key(&mut self, key: KeyInput, registry: &Registry) -> Option<InputEffect> {
        match key {
            KeyInput::Enter => {
                let command = self.buffer.trim().to_owned();
                if !command.is_empty() {
                    self.history.push(command.clone());
                }
                self.buffer.clear();
                Some(InputEffect::Submitted(command))
            },
            KeyInput::Up => {
                let entry = self.history.back()?;
                self.buffer = entry.to_owned();
                Some(InputEffect::Edited)
            },
            KeyInput::Down => {
                match self.history.forward() {
                    Some(entry) => self.buffer = entry.to_owned(),
                    None => self.buffer.clear(),
                }
                Some(InputEffect::Edited)
            },
            KeyInput::Tab => {
                let completed = registry.complete(self.buffer.trim())?;
                self.buffer = completed.to_owned();
                Some(InputEffect::Edited)
            },
            KeyInput::Char(c) => {
                self.buffer.push(c);
                Some(InputEffect::Edited)
            },
            KeyInput::Backspace => self.buffer.pop().map(|_| InputEffect::Edited),
        }
    }
}
