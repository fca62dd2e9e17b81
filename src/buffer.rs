//! Bulk byte-move primitive for a future buffer core.
//!
//! Buffer management is not implemented yet; this is the seam an editing
//! core would call for region moves. The contract is the standard
//! non-overlapping bulk copy: `len` bytes from the front of `src` to the
//! front of `dst`. Overlap is impossible here by construction (the
//! destination is an exclusive borrow), and short regions are reported as
//! errors instead of being undefined.

use thiserror::Error;

#[allow(dead_code)]
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CopyError {
    #[error("source region is {len} bytes, need {need}")]
    SourceTooShort { len: usize, need: usize },

    #[error("destination region is {len} bytes, need {need}")]
    DestinationTooShort { len: usize, need: usize },
}

/// Copy `len` bytes from the front of `src` to the front of `dst`.
#[allow(dead_code)]
pub fn copy_region(dst: &mut [u8], src: &[u8], len: usize) -> Result<(), CopyError> {
    if src.len() < len {
        return Err(CopyError::SourceTooShort {
            len: src.len(),
            need: len,
        });
    }
    if dst.len() < len {
        return Err(CopyError::DestinationTooShort {
            len: dst.len(),
            need: len,
        });
    }
    dst[..len].copy_from_slice(&src[..len]);
    Ok(())
}
