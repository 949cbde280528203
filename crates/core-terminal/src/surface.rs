//! Drawing surface.
//!
//! Operations are queued and only reach the terminal on `refresh`, so a frame
//! is emitted in one flush and never shows half-painted rows. Positions are
//! absolute with a (0,0) origin at the top-left cell; the caller is
//! responsible for keeping them on screen.

use anyhow::Result;
use crossterm::{
    cursor::{MoveTo, Show},
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use std::io::{Stdout, Write, stdout};

/// What the renderer needs from a screen.
pub trait Surface {
    /// Blank the whole screen.
    fn clear(&mut self) -> Result<()>;
    /// Write `text` starting at column `x` of row `y`.
    fn put_str(&mut self, x: u16, y: u16, text: &str) -> Result<()>;
    /// Place the visible cursor.
    fn set_cursor(&mut self, x: u16, y: u16) -> Result<()>;
    /// Make everything since the last refresh visible.
    fn refresh(&mut self) -> Result<()>;
    /// Visible rows. Unbounded unless the surface knows better.
    fn height(&self) -> u16 {
        u16::MAX
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Clear,
    Print { x: u16, y: u16, text: String },
    Cursor(u16, u16),
}

/// `Surface` over stdout.
pub struct CrosstermSurface {
    out: Stdout,
    cmds: Vec<Command>,
}

impl Default for CrosstermSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl CrosstermSurface {
    pub fn new() -> Self {
        Self {
            out: stdout(),
            cmds: Vec::new(),
        }
    }
}

impl Surface for CrosstermSurface {
    fn clear(&mut self) -> Result<()> {
        // Anything queued before a clear would be wiped anyway.
        self.cmds.clear();
        self.cmds.push(Command::Clear);
        Ok(())
    }

    fn put_str(&mut self, x: u16, y: u16, text: &str) -> Result<()> {
        if !text.is_empty() {
            self.cmds.push(Command::Print {
                x,
                y,
                text: text.to_string(),
            });
        }
        Ok(())
    }

    fn set_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        self.cmds.push(Command::Cursor(x, y));
        Ok(())
    }

    fn height(&self) -> u16 {
        crossterm::terminal::size().map_or(u16::MAX, |(_, rows)| rows)
    }

    fn refresh(&mut self) -> Result<()> {
        let mut cursor = None;
        for cmd in self.cmds.drain(..) {
            match cmd {
                Command::Clear => {
                    queue!(self.out, Clear(ClearType::All))?;
                }
                Command::Print { x, y, text } => {
                    queue!(self.out, MoveTo(x, y), Print(text))?;
                }
                Command::Cursor(x, y) => cursor = Some((x, y)),
            }
        }
        // Cursor placement is applied last so prints cannot displace it.
        if let Some((x, y)) = cursor {
            queue!(self.out, MoveTo(x, y), Show)?;
        }
        self.out.flush()?;
        Ok(())
    }
}

/// In-memory screen: a grid of rows plus the cursor, updated on `refresh`.
///
/// Used headless and in tests; `put_str` overwrites cell by cell exactly like
/// a terminal does, so overlapping writes are observable.
#[derive(Debug, Default)]
pub struct MemorySurface {
    pending: Vec<Command>,
    rows: Vec<String>,
    cursor: (u16, u16),
    refreshes: usize,
    height: Option<u16>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_height(height: u16) -> Self {
        Self {
            height: Some(height),
            ..Self::default()
        }
    }

    /// Screen rows as of the last refresh, trailing blank rows trimmed.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn row(&self, y: usize) -> &str {
        self.rows.get(y).map_or("", String::as_str)
    }

    pub fn cursor(&self) -> (u16, u16) {
        self.cursor
    }

    pub fn refresh_count(&self) -> usize {
        self.refreshes
    }

    fn write_cells(&mut self, x: u16, y: u16, text: &str) {
        let y = usize::from(y);
        if self.rows.len() <= y {
            self.rows.resize(y + 1, String::new());
        }
        let mut cells: Vec<char> = self.rows[y].chars().collect();
        let x = usize::from(x);
        for (i, ch) in text.chars().enumerate() {
            let at = x + i;
            if cells.len() <= at {
                cells.resize(at + 1, ' ');
            }
            cells[at] = ch;
        }
        self.rows[y] = cells.into_iter().collect();
    }
}

impl Surface for MemorySurface {
    fn clear(&mut self) -> Result<()> {
        self.pending.push(Command::Clear);
        Ok(())
    }

    fn put_str(&mut self, x: u16, y: u16, text: &str) -> Result<()> {
        self.pending.push(Command::Print {
            x,
            y,
            text: text.to_string(),
        });
        Ok(())
    }

    fn set_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        self.pending.push(Command::Cursor(x, y));
        Ok(())
    }

    fn height(&self) -> u16 {
        self.height.unwrap_or(u16::MAX)
    }

    fn refresh(&mut self) -> Result<()> {
        for cmd in std::mem::take(&mut self.pending) {
            match cmd {
                Command::Clear => self.rows.clear(),
                Command::Print { x, y, text } => self.write_cells(x, y, &text),
                Command::Cursor(x, y) => self.cursor = (x, y),
            }
        }
        while self.rows.last().is_some_and(|r| r.trim_end().is_empty()) {
            self.rows.pop();
        }
        self.refreshes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_discards_queued_output() {
        let mut s = CrosstermSurface::new();
        s.put_str(0, 0, "stale").unwrap();
        s.set_cursor(3, 0).unwrap();
        s.clear().unwrap();
        s.put_str(0, 1, "fresh").unwrap();
        assert_eq!(
            s.cmds,
            vec![
                Command::Clear,
                Command::Print {
                    x: 0,
                    y: 1,
                    text: "fresh".into()
                }
            ]
        );
    }

    #[test]
    fn empty_text_is_not_queued() {
        let mut s = CrosstermSurface::new();
        s.put_str(4, 2, "").unwrap();
        assert!(s.cmds.is_empty());
    }

    #[test]
    fn memory_surface_overwrites_cells() {
        let mut s = MemorySurface::new();
        s.clear().unwrap();
        s.put_str(0, 0, "INSERT").unwrap();
        s.put_str(0, 0, "ab").unwrap();
        s.put_str(2, 2, "z").unwrap();
        s.set_cursor(1, 2).unwrap();
        assert_eq!(s.row(0), "", "nothing visible before refresh");
        s.refresh().unwrap();
        assert_eq!(s.rows(), &["abSERT", "", "  z"]);
        assert_eq!(s.cursor(), (1, 2));
        assert_eq!(s.refresh_count(), 1);
    }

    #[test]
    fn memory_surface_clear_resets_rows() {
        let mut s = MemorySurface::new();
        s.put_str(0, 0, "old").unwrap();
        s.refresh().unwrap();
        s.clear().unwrap();
        s.put_str(0, 1, "new").unwrap();
        s.refresh().unwrap();
        assert_eq!(s.rows(), &["", "new"]);
    }
}
