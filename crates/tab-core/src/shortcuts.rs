//! Digit shortcuts for the first ten results.
//!
//! Positions 0..=8 get labels 1..=9, position 9 gets 0, and later positions
//! have no label. Both the renderer and the digit-selection guard go through
//! this module so they always agree.

use std::fmt;

/// Number of positions reachable by a digit shortcut.
pub const MAX_SHORTCUTS: usize = 10;

/// A digit key shown next to a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShortcutLabel(u8);

/// How the platform modifier is spelled in hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierStyle {
    Cmd,
    Ctrl,
}

impl ModifierStyle {
    /// The conventional modifier for the platform this binary targets.
    pub fn platform_default() -> Self {
        if cfg!(target_os = "macos") {
            Self::Cmd
        } else {
            Self::Ctrl
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cmd => "CMD",
            Self::Ctrl => "CTRL",
        }
    }
}

impl ShortcutLabel {
    pub fn digit(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }

    /// Hint text such as "CTRL + 2".
    pub fn hint(self, modifier: ModifierStyle) -> String {
        format!("{} + {}", modifier.as_str(), self.0)
    }
}

impl fmt::Display for ShortcutLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Label shown for the result at `position`, if any.
pub fn label_for_position(position: usize) -> Option<ShortcutLabel> {
    match position {
        0..=8 => Some(ShortcutLabel(position as u8 + 1)),
        9 => Some(ShortcutLabel(0)),
        _ => None,
    }
}

/// Result position selected by pressing `digit` with the modifier held.
pub fn position_for_digit(digit: u8) -> Option<usize> {
    match digit {
        1..=9 => Some(usize::from(digit) - 1),
        0 => Some(9),
        _ => None,
    }
}

/// Labels for every labeled position of `results`.
pub fn bind<T>(results: &[T]) -> Vec<(usize, ShortcutLabel)> {
    (0..results.len().min(MAX_SHORTCUTS))
        .filter_map(|pos| label_for_position(pos).map(|label| (pos, label)))
        .collect()
}
