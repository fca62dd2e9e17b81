//! The read-classify-echo loop.
//!
//! Drives one raw-mode session: banner, then one blocking key read per
//! cycle until a quit key or the end of the input stream, then restore and
//! farewell. Generic over the byte streams and the terminal backend so the
//! whole session runs against in-memory ends in tests.

use std::io::{Read, Write};

use anyhow::{Context, Result};
use tracing::{error, info, warn};

use crate::term::input::{self, KeyEvent};
use crate::term::session::{RawSession, TerminalBackend};

/// Why the loop left `Running`.
///
/// The three causes stay distinct through the API and the log so "user
/// quit" never masquerades as "stdin went away", even though all of them
/// end the process with status 0.
#[derive(Debug)]
pub enum ExitReason {
    /// The user pressed `q` or `Q`.
    Quit,
    /// The input stream closed.
    EndOfInput,
    /// The input stream failed.
    ReadError(std::io::Error),
}

/// Messages written around the echo stream. `None` suppresses the write.
#[derive(Debug, Clone, Default)]
pub struct ShellOptions {
    pub banner: Option<String>,
    pub farewell: Option<String>,
}

/// Run one session: acquire raw mode, echo until termination, restore.
///
/// Output bytes appear in exactly the order keys were read. The terminal
/// is restored before the farewell so the farewell prints into a cooked
/// terminal; restore failures are logged and do not abort the exit path.
pub fn run_shell<B, R, W>(
    backend: B,
    input: &mut R,
    output: &mut W,
    opts: &ShellOptions,
) -> Result<ExitReason>
where
    B: TerminalBackend,
    R: Read,
    W: Write,
{
    let mut session = RawSession::enter(backend)?;
    info!("raw-mode session started");

    // Banner prints inside raw mode, so it needs an explicit CR.
    if let Some(banner) = &opts.banner {
        output
            .write_all(banner.as_bytes())
            .and_then(|_| output.write_all(b"\r\n"))
            .and_then(|_| output.flush())
            .context("failed to write banner")?;
    }

    let reason = loop {
        match input::read_key(input) {
            Ok(KeyEvent::Printable(byte)) => {
                output
                    .write_all(&[byte])
                    .and_then(|_| output.flush())
                    .context("failed to echo input")?;
            }
            Ok(KeyEvent::Control(_)) => {}
            Ok(KeyEvent::Quit(_)) => break ExitReason::Quit,
            Ok(KeyEvent::EndOfInput) => break ExitReason::EndOfInput,
            Err(e) => break ExitReason::ReadError(e),
        }
    };

    if let Err(e) = session.restore() {
        // Non-fatal: still say goodbye, but the terminal may be left raw.
        error!("terminal may be left in raw mode: {}", e);
    }

    match &reason {
        ExitReason::Quit => info!("session ended: quit key"),
        ExitReason::EndOfInput => info!("session ended: input stream closed"),
        ExitReason::ReadError(e) => warn!("session ended: read failure: {}", e),
    }

    if let Some(farewell) = &opts.farewell {
        output
            .write_all(b"\n")
            .and_then(|_| output.write_all(farewell.as_bytes()))
            .and_then(|_| output.write_all(b"\n"))
            .and_then(|_| output.flush())
            .context("failed to write farewell")?;
    }

    Ok(reason)
}
