//! Logical keys produced by a hit.

use std::fmt;

use serde::Serialize;

/// Logical key on a Commodore keyboard skin.
///
/// Printable keys carry their unshifted character (letters in lower case,
/// `'£'` for the pound key, `' '` for the space bar). Everything else is a
/// named variant. The emulation side maps these onto its own matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Key {
    Char(char),

    // Modifiers
    Control,
    Commodore,
    /// Plus/4 shift (both shift keys share one matrix position).
    Shift,
    ShiftLeft,
    ShiftRight,

    // Toggles
    ShiftLock,
    CommodoreLock,

    // Cursor keys. The C64 has two combined keys that need SHIFT to
    // reverse direction; the Plus/4 has four.
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    CursorUpDown,
    CursorLeftRight,

    /// F1/F3/F5/F7 on the C64 family; F1/F2/F3 on the Plus/4, whose
    /// fourth function key is [`Key::Help`].
    F1,
    F2,
    F3,
    F5,
    F7,

    Return,
    Restore,
    RunStop,
    ClearHome,
    InsertDelete,
    Escape,
    Help,
    /// Left-arrow key in the top-left corner (not a cursor key).
    ArrowLeft,
    /// Up-arrow key next to RESTORE (not a cursor key).
    ArrowUp,
}

impl Key {
    /// Whether this key has two display states and an overlay image.
    #[must_use]
    pub const fn is_toggle(self) -> bool {
        matches!(self, Self::ShiftLock | Self::CommodoreLock)
    }

    /// Whether this key is held alongside others rather than typed.
    #[must_use]
    pub const fn is_modifier(self) -> bool {
        matches!(
            self,
            Self::Control | Self::Commodore | Self::Shift | Self::ShiftLeft | Self::ShiftRight
        )
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(' ') => f.write_str("Space"),
            Self::Char(c) => write!(f, "{c}"),
            other => write!(f, "{other:?}"),
        }
    }
}
