//! Editor session state: document, cursor, mode, pending command and file binding.
//!
//! All mutable editor state lives in one `EditorState` value owned by the
//! runtime loop and handed by `&mut` to the dispatcher; the renderer only ever
//! borrows it immutably. Nothing here is global.
//!
//! Mode machine:
//! - `Insert` is the initial mode.
//! - `Insert --Esc--> Command` clears the pending command.
//! - `Command --Enter--> Insert` after the pending command is dispatched,
//!   recognised or not; the pending command is cleared again.
//! - Esc while already in `Command` stays in `Command` and discards any
//!   partially typed command.

use core_config::VerticalClamp;
use core_text::Document;
use std::path::{Path, PathBuf};

pub mod cursor;
pub use cursor::Cursor;

/// Current editor mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Keys edit the document.
    #[default]
    Insert,
    /// Keys accumulate a command string executed on Enter.
    Command,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Insert => "INSERT",
            Mode::Command => "COMMAND",
        }
    }
}

/// Characters typed while in Command mode, consumed on Enter.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CommandLineState {
    buf: String,
}

impl CommandLineState {
    pub fn buffer(&self) -> &str {
        &self.buf
    }
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
    pub fn push_char(&mut self, ch: char) {
        self.buf.push(ch);
    }
    pub fn clear(&mut self) {
        self.buf.clear();
    }
    /// Hand out the accumulated command, leaving the buffer empty.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.buf)
    }
}

/// Severity of a status notice; picks nothing but the renderer's wording today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warn,
    Error,
}

/// One-line message describing the outcome of the last command.
///
/// Lives until the next key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

/// Top-level editing session.
#[derive(Debug)]
pub struct EditorState {
    pub document: Document,
    pub cursor: Cursor,
    pub mode: Mode,
    pub command_line: CommandLineState,
    /// Save target; `None` until bound by startup args or the first save.
    pub file_name: Option<PathBuf>,
    /// Unsaved changes since load or the last successful save.
    pub dirty: bool,
    pub notice: Option<Notice>,
    pub vertical_clamp: VerticalClamp,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(Document::new())
    }
}

impl EditorState {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            cursor: Cursor::origin(),
            mode: Mode::Insert,
            command_line: CommandLineState::default(),
            file_name: None,
            dirty: false,
            notice: None,
            vertical_clamp: VerticalClamp::default(),
        }
    }

    /// Bind the session to a save target.
    pub fn with_file_name(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_name = Some(path.into());
        self
    }

    pub fn with_vertical_clamp(mut self, policy: VerticalClamp) -> Self {
        self.vertical_clamp = policy;
        self
    }

    pub fn file_name(&self) -> Option<&Path> {
        self.file_name.as_deref()
    }

    /// Escape: switch to Command mode with an empty pending command.
    pub fn enter_command_mode(&mut self) {
        self.mode = Mode::Command;
        self.command_line.clear();
    }

    /// Back to Insert after a command dispatch.
    pub fn leave_command_mode(&mut self) {
        self.mode = Mode::Insert;
        self.command_line.clear();
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn set_notice(&mut self, level: NoticeLevel, text: impl Into<String>) {
        self.notice = Some(Notice {
            level,
            text: text.into(),
        });
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    /// Cursor with the lazy-clamp slack removed; the position edits apply at.
    pub fn edit_cursor(&self) -> Cursor {
        self.cursor.clamped(&self.document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_starts_in_insert_at_origin() {
        let st = EditorState::default();
        assert_eq!(st.mode, Mode::Insert);
        assert_eq!(st.cursor, Cursor::origin());
        assert!(st.command_line.is_empty());
        assert!(st.file_name().is_none());
        assert!(!st.dirty);
    }

    #[test]
    fn entering_command_mode_clears_pending_text() {
        let mut st = EditorState::default();
        st.enter_command_mode();
        st.command_line.push_char(':');
        st.command_line.push_char('w');
        st.enter_command_mode();
        assert_eq!(st.mode, Mode::Command);
        assert_eq!(st.command_line.buffer(), "");
    }

    #[test]
    fn take_empties_command_line() {
        let mut cl = CommandLineState::default();
        cl.push_char(':');
        cl.push_char('q');
        assert_eq!(cl.take(), ":q");
        assert!(cl.is_empty());
    }

    #[test]
    fn mode_labels() {
        assert_eq!(Mode::Insert.as_str(), "INSERT");
        assert_eq!(Mode::Command.as_str(), "COMMAND");
    }

    #[test]
    fn edit_cursor_removes_lazy_slack() {
        let mut st = EditorState::new(Document::from_lines(["ab"]));
        st.cursor = Cursor::new(0, 9);
        assert_eq!(st.edit_cursor(), Cursor::new(0, 2));
    }
}
