//! Input interpretation: key events become `Action`s, and `dispatch` applies
//! them to the editing session.
//!
//! Flow per key event (see [`handle_key`]):
//! 1. the previous status notice is dropped,
//! 2. `translate_key` maps `(mode, key)` to an optional `Action`,
//! 3. `dispatch` mutates `EditorState` and reports a `DispatchResult`.
//!
//! A quit command never exits the process from here; it surfaces as
//! `DispatchResult::quit` so the runtime can unwind and release the terminal.

pub mod dispatcher;
pub mod io_ops;
mod key_translator;

pub use dispatcher::{DispatchResult, dispatch};
pub use key_translator::translate_key;

use core_config::Config;
use core_events::KeyEvent;
use core_state::EditorState;

/// Cursor navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionKind {
    Up,
    Down,
    Left,
    Right,
}

/// Document mutation at the cursor (Insert mode only).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    InsertChar(char),
    InsertNewline,
    Backspace,
    Indent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Motion(MotionKind),
    Edit(EditKind),
    /// Esc: enter Command mode with an empty pending command.
    CommandStart,
    /// Printable key typed while in Command mode.
    CommandChar(char),
    /// Enter in Command mode: run the pending command and return to Insert.
    CommandExecute,
}

/// Route one key event through translation and dispatch.
pub fn handle_key(state: &mut EditorState, key: &KeyEvent, config: &Config) -> DispatchResult {
    let had_notice = state.notice.take().is_some();
    match translate_key(state.mode, key) {
        Some(action) => dispatch(action, state, config),
        None if had_notice => DispatchResult::dirty(),
        None => DispatchResult::clean(),
    }
}
