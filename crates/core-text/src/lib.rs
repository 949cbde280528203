//! Line-oriented document buffer backed by a `ropey::Rope`.
//!
//! A `Document` is an ordered list of lines, each an ordered sequence of
//! character units (`char`). Columns passed to every operation are character
//! indices; the rope resolves them, never byte offsets.
//!
//! Invariant: `line_count() >= 1` at all times. The rope holds the lines
//! separated by single terminators with none after the last line, so an empty
//! rope is one blank line and `len_lines()` is the line count.
//!
//! Positions are trusted: callers (the cursor owner in `core-state`) guarantee
//! `row < line_count()` and `col <= line_len(row)`. Out-of-range input is a
//! programming error and panics like slice indexing does.

pub mod format;

pub use format::{LineEnding, has_mixed_line_endings};

use format::{content_len, line_ending};
use ropey::{Rope, RopeSlice};

/// Width of the fixed tab surrogate inserted by [`Document::indent`].
pub const INDENT: &str = "  ";

/// Mutable, never-empty sequence of text lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    rope: Rope,
}

/// What `delete_char_before` actually removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// A character at `col - 1` was removed.
    Char,
    /// The (empty) line at `row` was removed from the document.
    Line,
    /// Nothing changed (column 0 of a non-empty line, or the only line).
    Noop,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Single blank line.
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Build from already-split lines. An empty iterator yields the blank document.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rope = Rope::new();
        for (i, line) in lines.into_iter().enumerate() {
            if i > 0 {
                rope.insert_char(rope.len_chars(), '\n');
            }
            rope.insert(rope.len_chars(), line.as_ref());
        }
        Self { rope }
    }

    /// Build from raw file content. `\n`, `\r\n` and `\r` all end a line; the
    /// terminator after the last line is optional.
    pub fn from_text(content: &str) -> Self {
        let mut rope = Rope::from_str(content);
        let last = rope.len_lines() - 1;
        if last > 0 && rope.line(last).len_chars() == 0 {
            let end = rope.len_chars();
            let brk = line_ending(rope.line(last - 1)).map_or(0, LineEnding::len_chars);
            rope.remove(end - brk..end);
        }
        Self { rope }
    }

    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Text of `row` without its terminator.
    pub fn line(&self, row: usize) -> Option<String> {
        self.rope.get_line(row).map(|l| content(l).to_string())
    }

    pub fn lines(&self) -> Vec<String> {
        (0..self.line_count())
            .map(|row| content(self.rope.line(row)).to_string())
            .collect()
    }

    /// Length of `row` in character units; 0 for a missing row.
    pub fn line_len(&self, row: usize) -> usize {
        self.rope.get_line(row).map_or(0, content_len)
    }

    /// Insert `ch` before the character currently at `col`.
    pub fn insert_char(&mut self, row: usize, col: usize, ch: char) {
        let at = self.char_index(row, col);
        self.rope.insert_char(at, ch);
    }

    /// Split `row` at `col`: the prefix stays, the suffix becomes line `row + 1`.
    pub fn split_line(&mut self, row: usize, col: usize) {
        let at = self.char_index(row, col);
        self.rope.insert_char(at, '\n');
    }

    /// Backspace semantics.
    ///
    /// * `col > 0`: removes the character at `col - 1`.
    /// * `col == 0`, line empty, more than one line: removes the line.
    /// * otherwise: no-op. Column 0 of a non-empty line never joins with the
    ///   previous line.
    pub fn delete_char_before(&mut self, row: usize, col: usize) -> DeleteOutcome {
        if col > 0 {
            let at = self.char_index(row, col);
            self.rope.remove(at - 1..at);
            return DeleteOutcome::Char;
        }
        if self.line_len(row) > 0 || self.line_count() == 1 {
            return DeleteOutcome::Noop;
        }
        // An empty line is just a terminator: its own, or the previous line's
        // when it is the last line.
        let range = if row + 1 < self.line_count() {
            self.rope.line_to_char(row)..self.rope.line_to_char(row + 1)
        } else {
            self.rope.line_to_char(row - 1) + self.line_len(row - 1)..self.rope.len_chars()
        };
        self.rope.remove(range);
        DeleteOutcome::Line
    }

    /// Insert the two-space tab surrogate at `col`.
    pub fn indent(&mut self, row: usize, col: usize) {
        let at = self.char_index(row, col);
        self.rope.insert(at, INDENT);
    }

    /// Persisted form: every line followed by `\n`.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.rope.len_bytes() + self.line_count());
        for row in 0..self.line_count() {
            for chunk in content(self.rope.line(row)).chunks() {
                out.push_str(chunk);
            }
            out.push('\n');
        }
        out
    }

    fn char_index(&self, row: usize, col: usize) -> usize {
        let len = self.line_len(row);
        assert!(
            col <= len,
            "column {col} out of range for line of {len} chars"
        );
        self.rope.line_to_char(row) + col
    }
}

fn content(line: RopeSlice<'_>) -> RopeSlice<'_> {
    line.slice(..content_len(line))
}
