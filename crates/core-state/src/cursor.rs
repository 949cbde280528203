//! Cursor position and the movement rules that keep it valid.
//!
//! `Document` trusts the positions it is handed; this type is the single place
//! that enforces `row < line_count` and `col <= line_len(row)`. Every operation
//! is a pure transformation returning the next position.
//!
//! Vertical moves follow the configured [`VerticalClamp`] policy:
//! * `Eager`: the column is clamped to the destination line immediately, so
//!   the invariant holds after every event.
//! * `Lazy`: the column is carried over untouched and may exceed the
//!   destination line length until the next horizontal move or edit, which
//!   clamps first via [`Cursor::clamped`].

use core_config::VerticalClamp;
use core_text::{DeleteOutcome, Document, INDENT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

impl Cursor {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn origin() -> Self {
        Self::default()
    }

    /// Column pulled back onto the current line (and row onto the document).
    pub fn clamped(self, doc: &Document) -> Self {
        let row = self.row.min(doc.line_count() - 1);
        let col = self.col.min(doc.line_len(row));
        Self { row, col }
    }

    /// True when the strict invariant holds against `doc`.
    pub fn is_within(&self, doc: &Document) -> bool {
        self.row < doc.line_count() && self.col <= doc.line_len(self.row)
    }

    pub fn move_up(self, doc: &Document, policy: VerticalClamp) -> Self {
        let moved = Self {
            row: self.row.saturating_sub(1),
            col: self.col,
        };
        moved.apply_vertical(doc, policy)
    }

    pub fn move_down(self, doc: &Document, policy: VerticalClamp) -> Self {
        let last = doc.line_count() - 1;
        let moved = Self {
            row: (self.row + 1).min(last),
            col: self.col,
        };
        moved.apply_vertical(doc, policy)
    }

    pub fn move_left(self, doc: &Document) -> Self {
        let c = self.clamped(doc);
        Self {
            col: c.col.saturating_sub(1),
            ..c
        }
    }

    pub fn move_right(self, doc: &Document) -> Self {
        let c = self.clamped(doc);
        Self {
            col: (c.col + 1).min(doc.line_len(c.row)),
            ..c
        }
    }

    /// Position after a character was inserted at `self`.
    pub fn after_insert_char(self) -> Self {
        Self {
            col: self.col + 1,
            ..self
        }
    }

    /// Position after the tab surrogate was inserted at `self`.
    pub fn after_indent(self) -> Self {
        Self {
            col: self.col + INDENT.chars().count(),
            ..self
        }
    }

    /// Position after the line was split at `self`: start of the new next line.
    pub fn after_split(self) -> Self {
        Self {
            row: self.row + 1,
            col: 0,
        }
    }

    /// Position after a backspace at `self` produced `outcome`.
    ///
    /// Removing an empty line hands the cursor to the end of the previous
    /// line; removing line 0 leaves it at the origin of the new line 0.
    pub fn after_delete(self, outcome: DeleteOutcome, doc: &Document) -> Self {
        match outcome {
            DeleteOutcome::Char => Self {
                col: self.col - 1,
                ..self
            },
            DeleteOutcome::Line if self.row > 0 => {
                let row = self.row - 1;
                Self {
                    row,
                    col: doc.line_len(row),
                }
            }
            DeleteOutcome::Line => Self::origin(),
            DeleteOutcome::Noop => self,
        }
    }

    fn apply_vertical(self, doc: &Document, policy: VerticalClamp) -> Self {
        match policy {
            VerticalClamp::Eager => self.clamped(doc),
            VerticalClamp::Lazy => self,
        }
    }
}
