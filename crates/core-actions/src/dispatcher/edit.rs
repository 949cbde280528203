//! Text edit action handling (insert/backspace/newline/indent).
//!
//! Responsible for mutating the document through `core_text::Document` and
//! moving the cursor to the position each mutation defines. Edits apply at the
//! clamped cursor so a lazily carried column never reaches the document.

use super::DispatchResult;
use crate::EditKind;
use core_state::{EditorState, Mode};
use core_text::DeleteOutcome;

pub(crate) fn handle_edit(kind: EditKind, state: &mut EditorState) -> DispatchResult {
    if !matches!(state.mode, Mode::Insert) {
        return DispatchResult::clean();
    }
    let before = state.edit_cursor();
    let (row, col) = (before.row, before.col);
    let after = match kind {
        EditKind::InsertChar(ch) => {
            state.document.insert_char(row, col, ch);
            before.after_insert_char()
        }
        EditKind::InsertNewline => {
            state.document.split_line(row, col);
            before.after_split()
        }
        EditKind::Indent => {
            state.document.indent(row, col);
            before.after_indent()
        }
        EditKind::Backspace => {
            let outcome = state.document.delete_char_before(row, col);
            if outcome == DeleteOutcome::Noop {
                tracing::trace!(target: "actions.dispatch", op="backspace", row, col, "noop");
                return DispatchResult::clean();
            }
            before.after_delete(outcome, &state.document)
        }
    };
    state.cursor = after;
    tracing::trace!(target: "actions.dispatch", op=?kind, row, col, to_row=after.row, to_col=after.col, "edit");
    state.mark_dirty();
    DispatchResult::dirty()
}
