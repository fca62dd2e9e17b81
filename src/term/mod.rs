//! Terminal session and input primitives.
//!
//! This module owns the process's relationship with the controlling
//! terminal:
//!
//! - **session**: raw-mode lifecycle guard with guaranteed restore
//! - **input**: blocking single-byte key reads and classification
//! - **signals**: signal-driven restore on abnormal termination (Unix)
//!
//! # Architecture
//!
//! ```text
//! Shell loop
//! ├── RawSession (attribute snapshot + guaranteed restore)
//! │   └── TerminalBackend (crossterm terminal / in-memory test terminal)
//! └── read_key -> KeyEvent
//! ```

pub mod input;
pub mod session;

#[cfg(unix)]
pub mod signals;

#[cfg(test)]
pub(crate) mod mock;
