//! Raw-mode terminal handling.
//!
//! `TerminalBackend` performs the raw switch (raw mode plus alternate screen)
//! and its reverse. `Terminal` owns a backend and tracks whether the switch is
//! active, so entering or leaving twice is a no-op. `TerminalGuard` scopes the
//! switch: `release` leaves and reports failures on the normal exit path, drop
//! leaves silently on every other path. `restore_terminal` is the unconditional
//! variant the panic hook calls.

use anyhow::Result;
use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::stdout;

pub mod size;
pub use size::{TerminalError, resolve_size, terminal_size};

pub trait TerminalBackend {
    fn enter(&mut self) -> Result<()>;
    fn leave(&mut self) -> Result<()>;
}

/// Backend driving the process's controlling terminal through crossterm.
#[derive(Debug, Default)]
pub struct CrosstermBackend;

impl TerminalBackend for CrosstermBackend {
    fn enter(&mut self) -> Result<()> {
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen)?;
        Ok(())
    }

    fn leave(&mut self) -> Result<()> {
        execute!(stdout(), LeaveAlternateScreen, Show)?;
        disable_raw_mode()?;
        Ok(())
    }
}

pub struct Terminal<B: TerminalBackend> {
    backend: B,
    entered: bool,
}

impl Terminal<CrosstermBackend> {
    pub fn crossterm() -> Self {
        Self::new(CrosstermBackend)
    }
}

impl<B: TerminalBackend> Terminal<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            entered: false,
        }
    }

    pub fn is_entered(&self) -> bool {
        self.entered
    }

    pub fn enter(&mut self) -> Result<()> {
        if !self.entered {
            self.backend.enter()?;
            self.entered = true;
            tracing::debug!(target: "terminal", "raw_mode_entered");
        }
        Ok(())
    }

    pub fn leave(&mut self) -> Result<()> {
        if self.entered {
            // Cleared first so a failed leave is not retried from drop.
            self.entered = false;
            self.backend.leave()?;
            tracing::debug!(target: "terminal", "raw_mode_left");
        }
        Ok(())
    }

    /// Enter and return a guard that leaves on `release` or drop.
    pub fn enter_guard(&mut self) -> Result<TerminalGuard<'_, B>> {
        self.enter()?;
        Ok(TerminalGuard {
            terminal: Some(self),
        })
    }
}

impl<B: TerminalBackend> Drop for Terminal<B> {
    fn drop(&mut self) {
        let _ = self.leave();
    }
}

pub struct TerminalGuard<'a, B: TerminalBackend> {
    terminal: Option<&'a mut Terminal<B>>,
}

impl<B: TerminalBackend> TerminalGuard<'_, B> {
    /// Leave now, surfacing any restore error to the caller.
    pub fn release(mut self) -> Result<()> {
        match self.terminal.take() {
            Some(terminal) => terminal.leave(),
            None => Ok(()),
        }
    }
}

impl<B: TerminalBackend> Drop for TerminalGuard<'_, B> {
    fn drop(&mut self) {
        if let Some(terminal) = self.terminal.take() {
            let _ = terminal.leave();
        }
    }
}

/// Best-effort restore for paths that cannot reach the `Terminal` (panic hook).
pub fn restore_terminal() {
    let _ = execute!(stdout(), LeaveAlternateScreen, Show);
    let _ = disable_raw_mode();
}
