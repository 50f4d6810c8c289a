//! Scoped page-level effects.
//!
//! Opening the detail overlay stops the page behind it from scrolling. Instead
//! of toggling a global flag, the overlay holds a [`ScrollLock`] guard taken
//! from the shared [`BodyScroll`] handle; the lock is released when the guard
//! is dropped, whichever way the overlay goes away.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Shared handle to the page's scroll state.
///
/// Cloning the handle shares the same counter. Scrolling is locked while at
/// least one [`ScrollLock`] is alive.
#[derive(Debug, Clone, Default)]
pub struct BodyScroll {
    holders: Arc<AtomicUsize>,
}

impl BodyScroll {
    /// Creates an unlocked handle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Locks scrolling until the returned guard is dropped.
    #[must_use = "dropping the guard releases the lock immediately"]
    pub fn lock(&self) -> ScrollLock {
        let holders = self.holders.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(holders, "body scroll locked");
        ScrollLock {
            holders: Arc::clone(&self.holders),
        }
    }

    /// Returns `true` while any guard is alive.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.holders.load(Ordering::SeqCst) > 0
    }
}

/// Guard that keeps page scrolling locked.
#[derive(Debug)]
pub struct ScrollLock {
    holders: Arc<AtomicUsize>,
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        let previous = self.holders.fetch_sub(1, Ordering::SeqCst);
        tracing::debug!(holders = previous.saturating_sub(1), "body scroll released");
    }
}
