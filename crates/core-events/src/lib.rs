//! Key event types shared by the input source and the dispatcher.
//!
//! The terminal backend reduces every raw key press to a tagged `KeyEvent`.
//! Only the variants below carry editor meaning; anything else arrives as
//! `KeyCode::Other` and is ignored downstream.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub mods: KeyModifiers,
}

/// Normalized logical key consumed by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Enter,
    Esc,
    Backspace,
    Tab,
    Up,
    Down,
    Left,
    Right,
    /// Any key the editor does not interpret (function keys, Home, Delete, ...).
    Other,
}

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct KeyModifiers: u8 {
        const CTRL = 0b0000_0001;
        const ALT  = 0b0000_0010;
        const SHIFT= 0b0000_0100;
    }
}

impl KeyEvent {
    pub fn new(code: KeyCode, mods: KeyModifiers) -> Self {
        Self { code, mods }
    }

    /// Key with no modifiers held.
    pub fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::empty())
    }

    /// The character this event would insert, if any.
    ///
    /// SHIFT is already folded into the character by the terminal; CTRL/ALT
    /// chords and control characters are not text.
    pub fn printable(&self) -> Option<char> {
        match self.code {
            KeyCode::Char(c)
                if !c.is_control()
                    && !self.mods.intersects(KeyModifiers::CTRL | KeyModifiers::ALT) =>
            {
                Some(c)
            }
            _ => None,
        }
    }
}

impl From<KeyCode> for KeyEvent {
    fn from(code: KeyCode) -> Self {
        Self::plain(code)
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}{:?}", self.code, self.mods)
    }
}
