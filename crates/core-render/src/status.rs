//! Status line composition.
//!
//! Format: `<MODE>[ <pending>]  [<notice>  ]<name>[*]  Ln X, Col Y`
//! * `<MODE>` is `INSERT` or `COMMAND`; in Command mode the pending command
//!   text follows after one space.
//! * `<notice>` is the outcome of the last command, prefixed by severity for
//!   warnings and errors.
//! * `<name>` is the base file name or `[No Name]`; `*` marks unsaved changes.
//! * Position is 1-based.
//!
//! Two stages: `compose_status` yields ordered segments, `format_status` joins
//! them. Tests assert on either stage.

use core_state::{EditorState, Mode, Notice, NoticeLevel};
use std::borrow::Cow;
use std::path::Path;

/// Everything the status line shows, borrowed from the session.
pub struct StatusContext<'a> {
    pub mode: Mode,
    pub pending: &'a str,
    pub notice: Option<&'a Notice>,
    pub file_name: Option<&'a Path>,
    pub dirty: bool,
    /// 0-based display row.
    pub line: usize,
    /// 0-based display column.
    pub col: usize,
}

impl<'a> StatusContext<'a> {
    pub fn from_state(state: &'a EditorState) -> Self {
        let shown = state.cursor.clamped(&state.document);
        Self {
            mode: state.mode,
            pending: state.command_line.buffer(),
            notice: state.notice.as_ref(),
            file_name: state.file_name(),
            dirty: state.dirty,
            line: shown.row,
            col: shown.col,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusSegment<'a> {
    /// Mode label plus pending command text (Command mode only).
    Mode {
        label: &'static str,
        pending: Option<&'a str>,
    },
    Notice(Cow<'a, str>),
    /// File name with the dirty marker already applied.
    FileName(Cow<'a, str>),
    Position { line_1: usize, col_1: usize },
}

pub fn compose_status<'a>(ctx: &StatusContext<'a>) -> Vec<StatusSegment<'a>> {
    let mut out = Vec::with_capacity(4);
    let pending = match ctx.mode {
        Mode::Command if !ctx.pending.is_empty() => Some(ctx.pending),
        _ => None,
    };
    out.push(StatusSegment::Mode {
        label: ctx.mode.as_str(),
        pending,
    });
    if let Some(notice) = ctx.notice {
        let text: Cow<'a, str> = match notice.level {
            NoticeLevel::Info => Cow::Borrowed(notice.text.as_str()),
            NoticeLevel::Warn => format!("warning: {}", notice.text).into(),
            NoticeLevel::Error => format!("error: {}", notice.text).into(),
        };
        out.push(StatusSegment::Notice(text));
    }
    let name = ctx
        .file_name
        .and_then(|p| p.file_name())
        .map_or(Cow::Borrowed("[No Name]"), |n| n.to_string_lossy());
    let name = if ctx.dirty {
        Cow::Owned(format!("{name}*"))
    } else {
        name
    };
    out.push(StatusSegment::FileName(name));
    out.push(StatusSegment::Position {
        line_1: ctx.line + 1,
        col_1: ctx.col + 1,
    });
    out
}

pub fn format_status(segments: &[StatusSegment<'_>]) -> String {
    use std::fmt::Write as _;
    let mut s = String::with_capacity(48);
    for (i, seg) in segments.iter().enumerate() {
        if i > 0 {
            s.push_str("  ");
        }
        match seg {
            StatusSegment::Mode { label, pending } => {
                s.push_str(label);
                if let Some(cmd) = pending {
                    s.push(' ');
                    s.push_str(cmd);
                }
            }
            StatusSegment::Notice(text) | StatusSegment::FileName(text) => s.push_str(text),
            StatusSegment::Position { line_1, col_1 } => {
                let _ = write!(s, "Ln {line_1}, Col {col_1}");
            }
        }
    }
    s
}

pub fn build_status(ctx: &StatusContext<'_>) -> String {
    format_status(&compose_status(ctx))
}
