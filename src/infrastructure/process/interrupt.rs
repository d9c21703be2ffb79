//! Ctrl+C handling via the `ctrlc` crate

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::domain::ports::InterruptSource;

/// Records Ctrl+C instead of letting it terminate the launcher
///
/// The handler is process-wide and can only be installed once; arming twice is a no-op.
#[derive(Debug, Default)]
pub struct CtrlcInterrupts {
    hit: Arc<AtomicBool>,
    armed: AtomicBool,
}

impl CtrlcInterrupts {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InterruptSource for CtrlcInterrupts {
    fn arm(&self) -> bool {
        if self.armed.load(Ordering::SeqCst) {
            return true;
        }

        let hit = self.hit.clone();
        match ctrlc::set_handler(move || {
            hit.store(true, Ordering::SeqCst);
        }) {
            Ok(()) => {
                self.armed.store(true, Ordering::SeqCst);
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not install Ctrl+C handler");
                false
            }
        }
    }

    fn interrupted(&self) -> bool {
        self.hit.load(Ordering::SeqCst)
    }
}
