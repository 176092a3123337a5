//! Session command history.
//!
//! An append-only list of submitted commands plus a recall cursor. The
//! cursor is always in `[0, len]`; a cursor equal to `len` represents the
//! "new/empty entry" position past the most recent command.

/// Command history with a recall cursor.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    /// Append a submitted command and reset the cursor past the end.
    pub fn push(&mut self, entry: String) {
        self.entries.push(entry);
        self.cursor = self.entries.len();
    }

    /// Step backward (toward older entries).
    ///
    /// Returns the entry at the new cursor, or `None` when already at the
    /// oldest entry (or the history is empty); the caller leaves the input
    /// unchanged in that case.
    pub fn back(&mut self) -> Option<&str> {
        if self.entries.is_empty() || self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor).map(String::as_str)
    }

    /// Step forward (toward newer entries).
    ///
    /// Returns the entry at the new cursor, or `None` once the cursor moves
    /// past the most recent entry; the caller clears the input in that case.
    pub fn forward(&mut self) -> Option<&str> {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
            self.entries.get(self.cursor).map(String::as_str)
        } else {
            self.cursor = self.entries.len();
            None
        }
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether any command has been submitted this session.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current cursor position, in `[0, len]`.
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
