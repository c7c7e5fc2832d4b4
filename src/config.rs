//! Engine configuration.

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default transposition table size in megabytes
pub const DEFAULT_TT_MB: usize = 16;
/// Default iterative deepening ceiling
pub const DEFAULT_MAX_DEPTH: u32 = 64;
/// Default think time per move in milliseconds
pub const DEFAULT_BUDGET_MS: u64 = 5000;
/// Search thread stack size (32 MB)
pub const DEFAULT_STACK_BYTES: usize = 32 * 1024 * 1024;

/// Tunables shared by the searcher and the engine controller.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Transposition table size in megabytes
    pub tt_size_mb: usize,
    /// Deepest iteration to run
    pub max_depth: u32,
    /// Think time used when the caller does not give one
    pub default_budget_ms: u64,
    /// Whether to consult the opening book before searching
    pub use_book: bool,
    /// Stack size of the worker thread running the search
    pub search_stack_bytes: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            tt_size_mb: DEFAULT_TT_MB,
            max_depth: DEFAULT_MAX_DEPTH,
            default_budget_ms: DEFAULT_BUDGET_MS,
            use_book: true,
            search_stack_bytes: DEFAULT_STACK_BYTES,
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn with_tt_size_mb(mut self, mb: usize) -> Self {
        self.tt_size_mb = mb.max(1);
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth.max(1);
        self
    }

    #[must_use]
    pub fn with_default_budget_ms(mut self, ms: u64) -> Self {
        self.default_budget_ms = ms;
        self
    }

    #[must_use]
    pub fn with_book(mut self, use_book: bool) -> Self {
        self.use_book = use_book;
        self
    }

    #[must_use]
    pub fn with_search_stack_bytes(mut self, bytes: usize) -> Self {
        self.search_stack_bytes = bytes;
        self
    }

    #[inline]
    #[must_use]
    pub fn default_budget(&self) -> Duration {
        Duration::from_millis(self.default_budget_ms)
    }
}
