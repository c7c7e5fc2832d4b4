//! Engine controller for running searches off the caller's thread.
//!
//! The controller owns the game position and one [`Searcher`](crate::board::Searcher).
//! Searches run on a dedicated worker; `stop()` may be called from any point
//! while they do.

mod controller;

pub use controller::{EngineController, EngineError, SearchJob};
