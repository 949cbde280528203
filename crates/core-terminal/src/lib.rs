//! Terminal lifecycle and drawing surface, backed by crossterm.
//!
//! Two seams are exposed to the rest of the editor:
//! - `TerminalBackend`: start/stop of raw mode + alternate screen, window title.
//! - `Surface`: clear, absolute-position text, cursor placement, refresh.
//!
//! `CrosstermBackend::enter_guard` returns a `TerminalGuard` that restores the
//! terminal on drop, so every exit path (quit command, closed input, error
//! propagation, panic unwind) leaves the user's shell usable.

use anyhow::Result;
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
    },
};
use std::io::stdout;

pub mod surface;
pub use surface::{CrosstermSurface, MemorySurface, Surface};

pub trait TerminalBackend {
    fn enter(&mut self) -> Result<()>;
    fn leave(&mut self) -> Result<()>;
    fn set_title(&mut self, title: &str) -> Result<()>;
}

pub struct CrosstermBackend {
    entered: bool,
}

/// Leaves the terminal on drop. Failures while leaving are logged, not raised.
pub struct TerminalGuard<'a> {
    backend: &'a mut CrosstermBackend,
}

impl Default for CrosstermBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl CrosstermBackend {
    pub fn new() -> Self {
        Self { entered: false }
    }

    pub fn is_entered(&self) -> bool {
        self.entered
    }

    /// Enter and return a guard that will leave on drop.
    pub fn enter_guard(&mut self) -> Result<TerminalGuard<'_>> {
        self.enter()?;
        Ok(TerminalGuard { backend: self })
    }
}

impl TerminalGuard<'_> {
    pub fn set_title(&mut self, title: &str) -> Result<()> {
        self.backend.set_title(title)
    }
}

impl TerminalBackend for CrosstermBackend {
    fn enter(&mut self) -> Result<()> {
        if !self.entered {
            enable_raw_mode()?;
            // Raw mode is already on; undo it if the screen switch fails.
            if let Err(e) = execute!(stdout(), EnterAlternateScreen, Hide) {
                let _ = disable_raw_mode();
                return Err(e.into());
            }
            self.entered = true;
            tracing::debug!(target: "runtime.startup", "terminal_entered");
        }
        Ok(())
    }

    fn leave(&mut self) -> Result<()> {
        if self.entered {
            self.entered = false;
            // Attempt both steps even if the first fails.
            let screen = execute!(stdout(), LeaveAlternateScreen, Show);
            let raw = disable_raw_mode();
            screen?;
            raw?;
            tracing::debug!(target: "runtime.shutdown", "terminal_left");
        }
        Ok(())
    }

    fn set_title(&mut self, title: &str) -> Result<()> {
        execute!(stdout(), SetTitle(title))?;
        Ok(())
    }
}

impl Drop for CrosstermBackend {
    fn drop(&mut self) {
        if let Err(e) = self.leave() {
            tracing::error!(target: "runtime.shutdown", error = %e, "terminal_leave_failed");
        }
    }
}

impl Drop for TerminalGuard<'_> {
    fn drop(&mut self) {
        if let Err(e) = self.backend.leave() {
            tracing::error!(target: "runtime.shutdown", error = %e, "terminal_leave_failed");
        }
    }
}
