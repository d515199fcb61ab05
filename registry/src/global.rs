//! The process-wide registry slot.

use crate::error::{Error, Result};
use std::sync::atomic::{AtomicBool, Ordering};

// Set by the first `Registry::new()` and never cleared.
static CLAIMED: AtomicBool = AtomicBool::new(false);

/// Claims the single process-wide registry slot.
///
/// Succeeds exactly once per process; every later call fails with
/// [`Error::DuplicateSingleton`].
pub(crate) fn claim() -> Result<()> {
  CLAIMED
    .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
    .map(|_| ())
    .map_err(|_| Error::DuplicateSingleton)
}

/// Returns `true` once a process-wide registry has been created.
pub fn is_claimed() -> bool {
  CLAIMED.load(Ordering::SeqCst)
}
