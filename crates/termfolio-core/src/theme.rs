//! Visual theme flag.
//!
//! Dark is the base state; "light" is the marked state, mirroring the single
//! light-mode class the original styling hangs off the document root. The
//! `light`/`dark` commands key off this one flag, so their already/switched
//! reporting is deliberately asymmetric around it.

/// Current visual theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Base state.
    #[default]
    Dark,
    /// Marked state.
    Light,
}

impl Theme {
    /// Whether light mode is active.
    pub fn is_light(self) -> bool {
        self == Self::Light
    }
}
