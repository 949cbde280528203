//! Mode transition into Command mode.
//!
//! Esc is the only way in. Pressing it again while already in Command mode
//! discards the partially typed command and leaves document and cursor alone.
//! The way back to Insert is Enter, handled by `command`.

use super::DispatchResult;
use core_state::{EditorState, Mode};

pub(crate) fn enter_command(state: &mut EditorState) -> DispatchResult {
    let was = state.mode;
    let had_pending = !state.command_line.is_empty();
    state.enter_command_mode();
    tracing::debug!(target: "actions.dispatch", from=?was, discarded_pending=had_pending, "enter_command_mode");
    if was == Mode::Command && !had_pending {
        DispatchResult::clean()
    } else {
        DispatchResult::dirty()
    }
}
