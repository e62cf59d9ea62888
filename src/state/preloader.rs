//! Preloader fade-out sequencing.

#[cfg(test)]
#[path = "preloader_test.rs"]
mod preloader_test;

use crate::consts::PRELOADER_DELAY_MS;

/// What happens to the page-loaded state at startup and on window `load`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreloaderPlan {
    /// No preloader on the page: mark loaded right away, no waiting for `load`.
    MarkLoadedNow,
    /// On `load`, finalize after `delay_ms` (zero under reduced motion).
    FinalizeOnLoad { delay_ms: u32 },
}

#[must_use]
pub fn plan(has_preloader: bool, reduced_motion: bool) -> PreloaderPlan {
    if !has_preloader {
        PreloaderPlan::MarkLoadedNow
    } else if reduced_motion {
        PreloaderPlan::FinalizeOnLoad { delay_ms: 0 }
    } else {
        PreloaderPlan::FinalizeOnLoad { delay_ms: PRELOADER_DELAY_MS }
    }
}

/// Once-only guard shared by the `transitionend` listener and the fallback timer.
#[derive(Debug, Default)]
pub struct RemovalGuard {
    removed: bool,
}

impl RemovalGuard {
    /// Returns `true` exactly once; the caller that wins removes the element.
    pub fn claim(&mut self) -> bool {
        if self.removed {
            return false;
        }
        self.removed = true;
        true
    }

    #[must_use]
    pub fn is_removed(&self) -> bool {
        self.removed
    }
}
