//! Line terminators and the persisted text format.
//!
//! On disk a document is a plain sequence of lines, each terminated by `\n`.
//! Reading accepts `\n`, `\r\n` and a lone `\r` as terminators; a final line
//! without a terminator is still a line. Writing always emits `\n`, so a
//! load/save cycle is byte-identical apart from terminator normalization.

use ropey::{Rope, RopeSlice};

/// Terminator found at the end of a rope line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    CrLf,
    Cr,
}

impl LineEnding {
    pub fn len_chars(self) -> usize {
        match self {
            LineEnding::CrLf => 2,
            LineEnding::Lf | LineEnding::Cr => 1,
        }
    }
}

/// Terminator at the end of `line`, if it has one.
pub fn line_ending(line: RopeSlice<'_>) -> Option<LineEnding> {
    let len = line.len_chars();
    let last = len.checked_sub(1).map(|i| line.char(i));
    let before = len.checked_sub(2).map(|i| line.char(i));
    match (before, last) {
        (Some('\r'), Some('\n')) => Some(LineEnding::CrLf),
        (_, Some('\n')) => Some(LineEnding::Lf),
        (_, Some('\r')) => Some(LineEnding::Cr),
        _ => None,
    }
}

/// Length of `line` in chars, terminator excluded.
pub fn content_len(line: RopeSlice<'_>) -> usize {
    line.len_chars() - line_ending(line).map_or(0, LineEnding::len_chars)
}

/// True when `content` uses more than one terminator style.
pub fn has_mixed_line_endings(content: &str) -> bool {
    let rope = Rope::from_str(content);
    let mut seen: Option<LineEnding> = None;
    for ending in rope.lines().filter_map(line_ending) {
        match seen {
            Some(first) if first != ending => return true,
            _ => seen = Some(ending),
        }
    }
    false
}
