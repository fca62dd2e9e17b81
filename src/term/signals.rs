//! Signal-driven terminal restore (Unix).
//!
//! A raw terminal left behind by an interrupted process is a user-visible
//! defect: the shell prompt comes back with echo off and no line editing.
//! A watcher thread restores the saved mode before the process dies.

use std::io;
use std::thread;

use signal_hook::consts::signal::{SIGHUP, SIGINT, SIGTERM};
use signal_hook::iterator::Signals;
use tracing::info;

use super::session;

/// Spawn the watcher thread.
///
/// On the first SIGINT/SIGTERM/SIGHUP the terminal is force-restored and
/// the process exits with the conventional 128+signo status.
pub fn install() -> io::Result<()> {
    let mut signals = Signals::new([SIGINT, SIGTERM, SIGHUP])?;
    thread::Builder::new()
        .name("rawsh-signals".into())
        .spawn(move || {
            if let Some(sig) = signals.forever().next() {
                session::force_restore();
                info!("terminating on signal {}", sig);
                std::process::exit(128 + sig);
            }
        })?;
    Ok(())
}
