//! Stateless key -> Action translation.
//!
//! Insert mode:
//! | key | action |
//! |---|---|
//! | Enter | `Edit(InsertNewline)` |
//! | printable char | `Edit(InsertChar)` |
//! | Backspace | `Edit(Backspace)` |
//! | arrows | `Motion(..)` |
//! | Tab | `Edit(Indent)` |
//! | Esc | `CommandStart` |
//!
//! Command mode: printable chars append to the pending command, Enter
//! executes it, Esc restarts it empty. Navigation and editing keys have no
//! meaning there and translate to `None`.

use crate::{Action, EditKind, MotionKind};
use core_events::{KeyCode, KeyEvent, KeyModifiers};
use core_state::Mode;

pub fn translate_key(mode: Mode, key: &KeyEvent) -> Option<Action> {
    tracing::trace!(target: "actions.translate", mode=?mode, key=?key.code, ctrl=key.mods.contains(KeyModifiers::CTRL), "translate_key_attempt");
    if key.code == KeyCode::Esc {
        return Some(Action::CommandStart);
    }
    match mode {
        Mode::Insert => match key.code {
            KeyCode::Enter => Some(Action::Edit(EditKind::InsertNewline)),
            KeyCode::Backspace => Some(Action::Edit(EditKind::Backspace)),
            KeyCode::Tab => Some(Action::Edit(EditKind::Indent)),
            KeyCode::Up => Some(Action::Motion(MotionKind::Up)),
            KeyCode::Down => Some(Action::Motion(MotionKind::Down)),
            KeyCode::Left => Some(Action::Motion(MotionKind::Left)),
            KeyCode::Right => Some(Action::Motion(MotionKind::Right)),
            KeyCode::Char(_) => key
                .printable()
                .map(|c| Action::Edit(EditKind::InsertChar(c))),
            KeyCode::Esc | KeyCode::Other => None,
        },
        Mode::Command => match key.code {
            KeyCode::Enter => Some(Action::CommandExecute),
            KeyCode::Char(_) => key.printable().map(Action::CommandChar),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::plain(code)
    }

    #[test]
    fn insert_mode_table() {
        let m = Mode::Insert;
        assert_eq!(
            translate_key(m, &key(KeyCode::Enter)),
            Some(Action::Edit(EditKind::InsertNewline))
        );
        assert_eq!(
            translate_key(m, &key(KeyCode::Char('x'))),
            Some(Action::Edit(EditKind::InsertChar('x')))
        );
        assert_eq!(
            translate_key(m, &key(KeyCode::Backspace)),
            Some(Action::Edit(EditKind::Backspace))
        );
        assert_eq!(
            translate_key(m, &key(KeyCode::Tab)),
            Some(Action::Edit(EditKind::Indent))
        );
        assert_eq!(
            translate_key(m, &key(KeyCode::Left)),
            Some(Action::Motion(MotionKind::Left))
        );
        assert_eq!(
            translate_key(m, &key(KeyCode::Esc)),
            Some(Action::CommandStart)
        );
        assert_eq!(translate_key(m, &key(KeyCode::Other)), None);
    }

    #[test]
    fn command_mode_table() {
        let m = Mode::Command;
        assert_eq!(
            translate_key(m, &key(KeyCode::Char(':'))),
            Some(Action::CommandChar(':'))
        );
        assert_eq!(
            translate_key(m, &key(KeyCode::Enter)),
            Some(Action::CommandExecute)
        );
        assert_eq!(
            translate_key(m, &key(KeyCode::Esc)),
            Some(Action::CommandStart)
        );
    }

    #[test]
    fn command_mode_ignores_navigation_and_edit_keys() {
        for code in [
            KeyCode::Backspace,
            KeyCode::Tab,
            KeyCode::Up,
            KeyCode::Down,
            KeyCode::Left,
            KeyCode::Right,
            KeyCode::Other,
        ] {
            assert_eq!(translate_key(Mode::Command, &key(code)), None, "{code:?}");
        }
    }

    #[test]
    fn ctrl_chords_do_not_insert() {
        let k = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CTRL);
        assert_eq!(translate_key(Mode::Insert, &k), None);
        assert_eq!(translate_key(Mode::Command, &k), None);
    }
}
