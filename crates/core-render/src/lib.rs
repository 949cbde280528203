//! Full-frame painting of the editor session onto a `Surface`.
//!
//! Every frame is repainted from scratch; there is no diffing or scrolling.
//! Paint order:
//! 1. clear,
//! 2. document line `i` at row `i`, from row 0, for as many rows as fit,
//! 3. status line at row 0,
//! 4. cursor at (col, row) of the document cursor,
//! 5. refresh.
//!
//! Steps 2 and 3 both target row 0, so the status line hides document line 0
//! and the mode stays visible. With `status_last` off the status is painted
//! before step 2 and document line 0 is drawn over it instead.

pub mod status;

pub use status::{StatusContext, build_status};

use anyhow::Result;
use core_state::EditorState;
use core_terminal::Surface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Paint the status line after the document instead of before it.
    pub status_last: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { status_last: true }
    }
}

/// Repaint the whole session.
pub fn render<S: Surface + ?Sized>(
    state: &EditorState,
    opts: RenderOptions,
    surface: &mut S,
) -> Result<()> {
    let status = build_status(&StatusContext::from_state(state));
    let height = usize::from(surface.height());

    surface.clear()?;
    if !opts.status_last {
        surface.put_str(0, 0, &status)?;
    }
    let visible = state.document.line_count().min(height);
    for row in 0..visible {
        if let Some(line) = state.document.line(row) {
            surface.put_str(0, to_cell(row), &line)?;
        }
    }
    if opts.status_last {
        surface.put_str(0, 0, &status)?;
    }
    let shown = state.cursor.clamped(&state.document);
    surface.set_cursor(to_cell(shown.col), to_cell(shown.row))?;
    surface.refresh()?;

    tracing::trace!(
        target: "render",
        lines = state.document.line_count(),
        row = shown.row,
        col = shown.col,
        status_last = opts.status_last,
        "frame"
    );
    Ok(())
}

fn to_cell(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}
