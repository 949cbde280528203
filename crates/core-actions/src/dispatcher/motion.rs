//! Cursor motion handling.
//!
//! Motions only apply in Insert mode; Command mode swallows them. Vertical
//! moves honour the session's `VerticalClamp` policy, horizontal moves always
//! start from the clamped column.

use super::DispatchResult;
use crate::MotionKind;
use core_state::{EditorState, Mode};

pub(crate) fn handle_motion(kind: MotionKind, state: &mut EditorState) -> DispatchResult {
    if !matches!(state.mode, Mode::Insert) {
        return DispatchResult::clean();
    }
    let before = state.cursor;
    let doc = &state.document;
    let policy = state.vertical_clamp;
    let after = match kind {
        MotionKind::Up => before.move_up(doc, policy),
        MotionKind::Down => before.move_down(doc, policy),
        MotionKind::Left => before.move_left(doc),
        MotionKind::Right => before.move_right(doc),
    };
    state.cursor = after;
    tracing::trace!(target: "actions.dispatch", op="motion", kind=?kind, row=before.row, col=before.col, to_row=after.row, to_col=after.col, "motion");
    if after != before {
        DispatchResult::dirty()
    } else {
        DispatchResult::clean()
    }
}
