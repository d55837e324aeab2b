//! Terminal management with RAII cleanup.
//!
//! `TerminalManager` puts the terminal into TUI mode (raw mode, alternate
//! screen, mouse capture, focus reporting) and its guard restores it on
//! drop, whether the app exits normally or unwinds.
//!
//! # Example
//!
//! ```no_run
//! use folio::terminal::TerminalManager;
//!
//! fn main() -> color_eyre::Result<()> {
//!     let mut term_manager = TerminalManager::new()?;
//!     let terminal = term_manager.terminal();
//!     // ... draw frames ...
//!     Ok(())
//! }
//! ```

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use color_eyre::Result;
use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};

/// RAII guard that restores terminal state on drop.
///
/// Cleanup order: raw mode off, focus reporting and mouse capture off,
/// alternate screen left, cursor shown.
pub struct TerminalGuard {
    cleaned_up: bool,
}

impl TerminalGuard {
    fn new() -> Self {
        Self { cleaned_up: false }
    }

    /// Restore the terminal. Subsequent calls are no-ops.
    pub fn cleanup(&mut self) {
        if self.cleaned_up {
            return;
        }
        self.cleaned_up = true;
        leave_tui_mode(&mut io::stdout());
    }

    pub fn is_cleaned_up(&self) -> bool {
        self.cleaned_up
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Owns the ratatui terminal and the guard that restores it.
///
/// Install [`setup_panic_hook`] before creating one: the hook restores the
/// terminal before the panic message is printed.
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    guard: TerminalGuard,
}

impl TerminalManager {
    /// Enter TUI mode and create the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode or any setup command fails. The
    /// terminal is restored before the error is returned.
    pub fn new() -> Result<Self> {
        // Guard first so a failure below still restores the terminal
        let mut guard = TerminalGuard::new();
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(e) = enter_tui_mode(&mut stdout) {
            guard.cleanup();
            return Err(e.into());
        }

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;
        terminal.hide_cursor()?;

        tracing::debug!("Entered TUI mode");
        Ok(Self { terminal, guard })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Current terminal size.
    pub fn size(&self) -> Result<Rect> {
        let size = self.terminal.size()?;
        Ok(Rect::new(0, 0, size.width, size.height))
    }

    /// Restore the terminal now instead of on drop.
    pub fn restore(&mut self) -> Result<()> {
        self.guard.cleanup();
        self.terminal.show_cursor()?;
        tracing::debug!("Left TUI mode");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_cleanup_is_idempotent() {
        let mut guard = TerminalGuard::new();
        assert!(!guard.is_cleaned_up());
        guard.cleanup();
        assert!(guard.is_cleaned_up());
        guard.cleanup();
        assert!(guard.is_cleaned_up());
    }
}
