//! Dispatcher applying `Action` to mutable editor state.
//!
//! Decomposed into focused sub-modules:
//! * `motion`  - cursor movement semantics
//! * `mode`    - entering Command mode
//! * `command` - pending command editing & execution (:w, :q, :qw, :q!)
//! * `edit`    - document mutation (insert/backspace/newline/indent)

use crate::Action;
use core_config::Config;
use core_state::EditorState;

mod command;
mod command_parser;
mod edit;
mod mode;
mod motion;

pub use command_parser::{CommandParser, ParsedCommand};

/// Result of dispatching a single `Action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    /// Visible state changed; a repaint would differ from the last frame.
    pub dirty: bool,
    /// A quit command ran; the runtime must leave its loop and shut down.
    pub quit: bool,
}

impl DispatchResult {
    pub fn dirty() -> Self {
        Self {
            dirty: true,
            quit: false,
        }
    }
    pub fn clean() -> Self {
        Self {
            dirty: false,
            quit: false,
        }
    }
    pub fn quit() -> Self {
        Self {
            dirty: true,
            quit: true,
        }
    }
}

/// Apply an action to editor state. Returns `DispatchResult` describing whether
/// a render is needed (`dirty`) or the editor should exit (`quit`).
pub fn dispatch(action: Action, state: &mut EditorState, config: &Config) -> DispatchResult {
    match action {
        Action::Motion(kind) => motion::handle_motion(kind, state),
        Action::Edit(kind) => edit::handle_edit(kind, state),
        Action::CommandStart => mode::enter_command(state),
        Action::CommandChar(_) | Action::CommandExecute => {
            command::handle_command_action(action, state, config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EditKind, MotionKind, translate_key};
    use core_events::{KeyCode, KeyEvent};
    use core_state::{Cursor, Mode};
    use core_text::Document;

    fn press(state: &mut EditorState, code: KeyCode) -> DispatchResult {
        let cfg = Config::default();
        match translate_key(state.mode, &KeyEvent::plain(code)) {
            Some(act) => dispatch(act, state, &cfg),
            None => DispatchResult::clean(),
        }
    }

    #[test]
    fn motion_left_right_dirty() {
        let mut state = EditorState::new(Document::from_lines(["ab", "cd"]));
        assert!(press(&mut state, KeyCode::Right).dirty);
        assert_eq!(state.cursor, Cursor::new(0, 1));
        assert!(press(&mut state, KeyCode::Left).dirty);
        assert_eq!(state.cursor, Cursor::origin());
    }

    #[test]
    fn blocked_motion_is_clean() {
        let mut state = EditorState::new(Document::from_lines(["ab"]));
        assert!(!press(&mut state, KeyCode::Left).dirty);
        assert!(!press(&mut state, KeyCode::Up).dirty);
    }

    #[test]
    fn quit_command_execute() {
        let mut state = EditorState::new(Document::from_lines(["abc"]));
        press(&mut state, KeyCode::Esc);
        press(&mut state, KeyCode::Char(':'));
        press(&mut state, KeyCode::Char('q'));
        let res = press(&mut state, KeyCode::Enter);
        assert!(res.quit && res.dirty);
    }

    #[test]
    fn edits_are_ignored_outside_insert_mode() {
        let cfg = Config::default();
        let mut state = EditorState::new(Document::from_lines(["abc"]));
        state.enter_command_mode();
        let res = dispatch(Action::Edit(EditKind::InsertChar('x')), &mut state, &cfg);
        assert!(!res.dirty);
        assert_eq!(state.document.line(0).as_deref(), Some("abc"));
        let res = dispatch(Action::Motion(MotionKind::Right), &mut state, &cfg);
        assert!(!res.dirty);
        assert_eq!(state.cursor, Cursor::origin());
        assert_eq!(state.mode, Mode::Command);
    }
}
