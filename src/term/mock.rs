//! In-memory terminal backend for tests.
//!
//! Models the attribute state a real snapshot captures (canonical flag,
//! echo flag, minimum read count, inter-byte timeout) so round-trip and
//! idempotence laws are observable without a controlling terminal.

use std::io;

use super::session::{Result, TermError, TerminalBackend};

/// Observable terminal attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TermAttrs {
    pub canonical: bool,
    pub echo: bool,
    pub min_read: u8,
    pub timeout_ds: u8,
}

impl Default for TermAttrs {
    fn default() -> Self {
        // Cooked-mode values chosen distinct from RAW_ATTRS in every field,
        // so a restore that re-applies raw settings fails the round-trip
        // assertions instead of passing by accident.
        Self {
            canonical: true,
            echo: true,
            min_read: 4,
            timeout_ds: 2,
        }
    }
}

pub(crate) const RAW_ATTRS: TermAttrs = TermAttrs {
    canonical: false,
    echo: false,
    min_read: 1,
    timeout_ds: 0,
};

#[derive(Debug, Default)]
pub(crate) struct MockTerminal {
    pub attrs: TermAttrs,
    saved: Option<TermAttrs>,
    pub enter_calls: usize,
    pub restore_calls: usize,
    pub fail_enter: bool,
    pub fail_restore: bool,
}

impl MockTerminal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_raw(&self) -> bool {
        self.attrs == RAW_ATTRS
    }
}

impl TerminalBackend for MockTerminal {
    fn enter_raw(&mut self) -> Result<()> {
        self.enter_calls += 1;
        if self.fail_enter {
            return Err(TermError::TerminalUnavailable(io::Error::new(
                io::ErrorKind::NotConnected,
                "no controlling terminal",
            )));
        }
        if self.saved.is_some() {
            return Err(TermError::SessionActive);
        }
        self.saved = Some(self.attrs);
        self.attrs = RAW_ATTRS;
        Ok(())
    }

    fn restore(&mut self) -> Result<()> {
        self.restore_calls += 1;
        if self.fail_restore {
            return Err(TermError::TerminalUnavailable(io::Error::new(
                io::ErrorKind::NotConnected,
                "terminal went away",
            )));
        }
        if let Some(saved) = self.saved.take() {
            self.attrs = saved;
        }
        Ok(())
    }
}
