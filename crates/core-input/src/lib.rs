//! Key event source.
//!
//! `KeySource` is the blocking contract the control loop reads from. The
//! crossterm implementation reduces raw terminal events to `core_events`
//! keys; anything the editor has no use for becomes `KeyCode::Other`.

use anyhow::Result;
use core_events::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::event::{
    Event as CEvent, KeyCode as CKeyCode, KeyEvent as CKeyEvent, KeyEventKind as CKind,
    KeyModifiers as CMods,
};

/// Blocking producer of key events.
pub trait KeySource {
    /// Wait for the next key. `Ok(None)` means the source is exhausted and the
    /// session should end.
    fn next_key(&mut self) -> Result<Option<KeyEvent>>;
}

/// Reads from the controlling terminal. Requires raw mode to be active.
#[derive(Debug, Default)]
pub struct CrosstermKeySource;

impl CrosstermKeySource {
    pub fn new() -> Self {
        Self
    }
}

impl KeySource for CrosstermKeySource {
    fn next_key(&mut self) -> Result<Option<KeyEvent>> {
        loop {
            match crossterm::event::read()? {
                CEvent::Key(key) => {
                    if let Some(ev) = map_key_event(&key) {
                        tracing::trace!(target: "input", code = ?ev.code, mods = ?ev.mods, "key");
                        return Ok(Some(ev));
                    }
                }
                CEvent::Resize(w, h) => {
                    // Surfaces as an uninterpreted key so the loop repaints.
                    tracing::debug!(target: "input", w, h, "resize");
                    return Ok(Some(KeyEvent::plain(KeyCode::Other)));
                }
                other => {
                    tracing::trace!(target: "input", event = ?other, "ignored_event");
                }
            }
        }
    }
}

/// Translate a crossterm key event. Key releases yield `None`.
pub fn map_key_event(key: &CKeyEvent) -> Option<KeyEvent> {
    if key.kind == CKind::Release {
        return None;
    }
    Some(KeyEvent::new(map_code(key.code), map_mods(key.modifiers)))
}

fn map_code(code: CKeyCode) -> KeyCode {
    match code {
        CKeyCode::Char(c) => KeyCode::Char(c),
        CKeyCode::Enter => KeyCode::Enter,
        CKeyCode::Esc => KeyCode::Esc,
        CKeyCode::Backspace => KeyCode::Backspace,
        CKeyCode::Tab => KeyCode::Tab,
        CKeyCode::Up => KeyCode::Up,
        CKeyCode::Down => KeyCode::Down,
        CKeyCode::Left => KeyCode::Left,
        CKeyCode::Right => KeyCode::Right,
        _ => KeyCode::Other,
    }
}

pub(crate) fn map_mods(m: CMods) -> KeyModifiers {
    let mut out = KeyModifiers::empty();
    if m.contains(CMods::CONTROL) {
        out |= KeyModifiers::CTRL;
    }
    if m.contains(CMods::ALT) {
        out |= KeyModifiers::ALT;
    }
    if m.contains(CMods::SHIFT) {
        out |= KeyModifiers::SHIFT;
    }
    out
}
