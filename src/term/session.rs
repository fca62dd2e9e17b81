//! Raw-mode session lifecycle.
//!
//! The controlling terminal's attribute state is process-wide, so entering
//! raw mode is modeled as a scoped acquisition: [`RawSession::enter`]
//! captures the prior attributes and applies raw settings, and the returned
//! guard reapplies the capture on [`RawSession::restore`] or on drop,
//! whichever comes first. There is no way to restore without a live guard.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::terminal;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum TermError {
    #[error("terminal unavailable: {0}")]
    TerminalUnavailable(#[source] io::Error),

    #[error("a raw-mode session is already active")]
    SessionActive,
}

pub type Result<T> = std::result::Result<T, TermError>;

/// Terminal attribute backend.
///
/// `enter_raw` captures the current attributes and applies raw settings:
/// canonical line buffering off, input echo off, reads return after at
/// least one byte with no inter-byte timeout. `restore` reapplies the
/// capture. The real terminal and the in-memory test terminal both live
/// behind this seam.
pub trait TerminalBackend {
    fn enter_raw(&mut self) -> Result<()>;
    fn restore(&mut self) -> Result<()>;
}

impl<B: TerminalBackend + ?Sized> TerminalBackend for &mut B {
    fn enter_raw(&mut self) -> Result<()> {
        (**self).enter_raw()
    }

    fn restore(&mut self) -> Result<()> {
        (**self).restore()
    }
}

// One live snapshot per process. Cleared on restore so a later session can
// start after a clean teardown.
static RAW_ACTIVE: AtomicBool = AtomicBool::new(false);

/// The controlling terminal, backed by crossterm.
///
/// crossterm captures the pre-raw termios state internally on enable and
/// reapplies it on disable, so the attribute snapshot lives for exactly the
/// span between `enter_raw` and `restore`.
#[derive(Debug, Default)]
pub struct CrosstermTerminal;

impl TerminalBackend for CrosstermTerminal {
    fn enter_raw(&mut self) -> Result<()> {
        if RAW_ACTIVE.swap(true, Ordering::SeqCst) {
            return Err(TermError::SessionActive);
        }
        terminal::enable_raw_mode().map_err(|e| {
            RAW_ACTIVE.store(false, Ordering::SeqCst);
            TermError::TerminalUnavailable(e)
        })
    }

    fn restore(&mut self) -> Result<()> {
        let result = terminal::disable_raw_mode().map_err(TermError::TerminalUnavailable);
        RAW_ACTIVE.store(false, Ordering::SeqCst);
        result
    }
}

/// Best-effort restore for abnormal exit paths (the signal watcher thread,
/// the final sweep in `main`). Safe to call at any time, from any thread.
pub fn force_restore() {
    let _ = terminal::disable_raw_mode();
    RAW_ACTIVE.store(false, Ordering::SeqCst);
}

/// A live raw-mode session.
///
/// Every successful entry is paired with exactly one effective restore:
/// explicit calls after the first are no-ops, and drop restores if nothing
/// else has.
pub struct RawSession<B: TerminalBackend> {
    backend: B,
    restored: bool,
}

impl<B: TerminalBackend> RawSession<B> {
    /// Capture the terminal's attributes and switch it to raw mode.
    pub fn enter(mut backend: B) -> Result<Self> {
        backend.enter_raw()?;
        debug!("entered raw mode");
        Ok(Self {
            backend,
            restored: false,
        })
    }

    /// Reapply the attributes captured at entry.
    ///
    /// Idempotent: later calls return `Ok` without touching the terminal.
    /// On failure the session stays unrestored so drop retries.
    pub fn restore(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        self.backend.restore()?;
        self.restored = true;
        debug!("restored terminal mode");
        Ok(())
    }
}

impl<B: TerminalBackend> Drop for RawSession<B> {
    fn drop(&mut self) {
        if !self.restored {
            if let Err(e) = self.backend.restore() {
                warn!("failed to restore terminal mode on drop: {}", e);
            }
            self.restored = true;
        }
    }
}
