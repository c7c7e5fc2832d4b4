//! Synchronization primitives for search control.
//!
//! Every search gets a fresh id from [`SearchControl::begin`]. Cancelling is
//! recorded as "every search up to id N is cancelled", so a timer left over
//! from an earlier search can never cancel a later one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Default)]
struct ControlState {
    current: AtomicU64,
    cancelled_through: AtomicU64,
}

/// Shared cancellation state for one engine.
#[derive(Clone, Debug, Default)]
pub struct SearchControl(Arc<ControlState>);

impl SearchControl {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the id of a new search and return its token.
    #[must_use]
    pub fn begin(&self) -> SearchToken {
        let id = self.0.current.fetch_add(1, Ordering::SeqCst) + 1;
        SearchToken {
            control: self.clone(),
            id,
        }
    }

    /// Cancel whatever search is current. Idempotent, and harmless when idle.
    pub fn stop(&self) {
        let current = self.0.current.load(Ordering::SeqCst);
        self.cancel_through(current);
    }

    /// Id of the most recently started search (0 before the first one)
    #[inline]
    #[must_use]
    pub fn current_id(&self) -> u64 {
        self.0.current.load(Ordering::SeqCst)
    }

    #[inline]
    #[must_use]
    pub fn is_cancelled(&self, id: u64) -> bool {
        self.0.cancelled_through.load(Ordering::Relaxed) >= id
    }

    #[inline]
    fn cancel_through(&self, id: u64) {
        self.0.cancelled_through.fetch_max(id, Ordering::SeqCst);
    }
}

/// Handle for one search id.
#[derive(Clone, Debug)]
pub struct SearchToken {
    control: SearchControl,
    id: u64,
}

impl SearchToken {
    #[inline]
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[inline]
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.control.is_cancelled(self.id)
    }

    /// Cancel this search; later searches are unaffected.
    #[inline]
    pub fn cancel(&self) {
        self.control.cancel_through(self.id);
    }
}
