//! Engine controller implementation.

use std::fmt;
use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use parking_lot::Mutex;

use crate::board::{Board, Move, Searcher};
use crate::book::BookSource;
use crate::config::EngineConfig;
use crate::sync::{SearchControl, SearchToken};

/// Error type for controller failures
#[derive(Debug)]
pub enum EngineError {
    /// The search thread could not be started
    Spawn(io::Error),
    /// The search thread panicked before producing a move
    WorkerPanicked,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Spawn(err) => write!(f, "Failed to spawn search thread: {err}"),
            EngineError::WorkerPanicked => write!(f, "Search thread panicked"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Spawn(err) => Some(err),
            EngineError::WorkerPanicked => None,
        }
    }
}

/// Active search job state
pub struct SearchJob {
    /// Token of the search running on the worker
    token: SearchToken,
    /// Handle to the search thread
    handle: JoinHandle<Option<Move>>,
}

impl SearchJob {
    /// Id of the search this job runs
    #[must_use]
    pub fn id(&self) -> u64 {
        self.token.id()
    }

    /// Signal stop without waiting
    pub fn signal_stop(&self) {
        self.token.cancel();
    }

    /// Wait for the worker and return its move
    fn join(self) -> Result<Option<Move>, EngineError> {
        self.handle.join().map_err(|_| EngineError::WorkerPanicked)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Engine controller managing search and game state
pub struct EngineController {
    /// Current board position
    board: Board,
    /// Searcher shared with the worker thread
    searcher: Arc<Mutex<Searcher>>,
    /// Cancellation handle shared with the searcher
    control: SearchControl,
    /// Active search job (if any)
    current_job: Option<SearchJob>,
    config: EngineConfig,
}

impl Default for EngineController {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineController {
    /// Create a controller with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        let control = SearchControl::new();
        let searcher = Searcher::with_control(config.clone(), control.clone());
        EngineController {
            board: Board::new(),
            searcher: Arc::new(Mutex::new(searcher)),
            control,
            current_job: None,
            config,
        }
    }

    /// Get a reference to the current board
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Set the board position, stopping any search first
    pub fn set_board(&mut self, board: Board) {
        self.stop_and_join();
        self.board = board;
    }

    /// Play `mv` on the controller's board. Returns false if it is illegal.
    pub fn make_move(&mut self, mv: Move) -> bool {
        self.stop_and_join();
        self.board.make_move(mv)
    }

    /// Install an opening book. Waits for a running search to finish.
    pub fn set_book(&mut self, book: Box<dyn BookSource>) {
        self.stop_and_join();
        self.searcher.lock().set_book(book);
    }

    /// Reseed the book draw, for reproducible selection
    pub fn seed_book_rng(&mut self, seed: u64) {
        self.stop_and_join();
        self.searcher.lock().seed_book_rng(seed);
    }

    /// Execute a closure with access to the searcher once no search is running.
    pub fn with_searcher<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut Searcher) -> R,
    {
        self.stop_and_join();
        f(&mut self.searcher.lock())
    }

    /// Check if there's an active search
    #[must_use]
    pub fn is_searching(&self) -> bool {
        self.current_job
            .as_ref()
            .is_some_and(|job| !job.is_finished())
    }

    /// Start searching the current position for at most `budget`.
    ///
    /// Any previous search is stopped and joined first. The new search id is
    /// allocated here, before the worker starts, so a `stop()` issued right
    /// after this call always reaches it.
    pub fn start_search(&mut self, budget: Duration) -> Result<(), EngineError> {
        self.stop_and_join();

        let token = self.control.begin();
        let worker_token = token.clone();
        let mut search_board = self.board.clone();
        let searcher = Arc::clone(&self.searcher);

        log::debug!(
            "starting search {} for {} ms",
            token.id(),
            budget.as_millis()
        );
        let handle = thread::Builder::new()
            .name("search".to_string())
            .stack_size(self.config.search_stack_bytes)
            .spawn(move || {
                let mut guard = searcher.lock();
                guard.search_with_token(worker_token, budget, &mut search_board)
            })
            .map_err(EngineError::Spawn)?;

        self.current_job = Some(SearchJob { token, handle });
        Ok(())
    }

    /// Cancel the current search, if any. Does not block.
    pub fn stop(&self) {
        if let Some(job) = &self.current_job {
            log::debug!("stop requested for search {}", job.id());
            job.signal_stop();
        }
        self.control.stop();
    }

    /// Block until the current search finishes and return its move.
    ///
    /// Returns `Ok(None)` when no search was started or the position has no
    /// legal move.
    pub fn wait(&mut self) -> Result<Option<Move>, EngineError> {
        match self.current_job.take() {
            Some(job) => job.join(),
            None => Ok(None),
        }
    }

    /// Search the current position and block until a move is chosen.
    pub fn best_move(&mut self, budget: Duration) -> Result<Option<Move>, EngineError> {
        self.start_search(budget)?;
        self.wait()
    }

    fn stop_and_join(&mut self) {
        if let Some(job) = self.current_job.take() {
            job.signal_stop();
            if let Err(err) = job.join() {
                log::warn!("discarding previous search: {err}");
            }
        }
    }
}

impl Drop for EngineController {
    fn drop(&mut self) {
        self.stop_and_join();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Square;

    fn controller() -> EngineController {
        EngineController::with_config(EngineConfig::default().with_tt_size_mb(1))
    }

    #[test]
    fn test_wait_without_search_is_none() {
        let mut engine = controller();
        assert!(!engine.is_searching());
        assert!(matches!(engine.wait(), Ok(None)));
    }

    #[test]
    fn test_best_move_is_legal() {
        let mut engine = controller();
        let mv = engine
            .best_move(Duration::from_millis(50))
            .unwrap()
            .expect("start position has moves");
        let mut board = engine.board().clone();
        assert!(board.legal_moves().contains(&mv));
        assert_eq!(engine.board().ply_count(), 0);
    }

    #[test]
    fn test_make_move_updates_board() {
        let mut engine = controller();
        let e4 = engine
            .board()
            .build_move(
                Square::from_algebraic("e2").unwrap(),
                Square::from_algebraic("e4").unwrap(),
                None,
            )
            .unwrap();
        assert!(engine.make_move(e4));
        assert_eq!(
            engine.board().to_fen(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1"
        );
    }

    #[test]
    fn test_set_board_during_search_stops_it() {
        let mut engine = controller();
        engine.start_search(Duration::from_secs(60)).unwrap();
        let board = Board::try_from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").unwrap();
        engine.set_board(board);
        assert!(!engine.is_searching());
        assert!(matches!(engine.wait(), Ok(None)));
    }
}
