//! Search module implementing alpha-beta with iterative deepening.
//!
//! Features:
//! - Iterative deepening, seeding each iteration with the previous best move
//! - Negamax alpha-beta search
//! - Fail-hard quiescence search with stand-pat
//! - Capture-first move ordering by victim value
//! - Transposition table cutoffs
//! - Cooperative cancellation through a time budget or an explicit stop

pub mod constants;
mod move_order;
mod negamax;
mod quiescence;

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::book::{select_weighted, BookSource};
use crate::config::EngineConfig;
use crate::sync::{SearchControl, SearchToken};
use crate::timer::DeadlineTimer;
use crate::tt::TranspositionTable;

use super::{Board, Move};
pub use constants::{is_mate_score, Score, INF, MATE};

/// Best move and score of a searched node
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, `None` when the node had no legal move
    pub best_move: Option<Move>,
    /// Score from the side to move's point of view
    pub score: Score,
}

/// Lifecycle of the searcher's most recent search
///
/// `Completed` and `Cancelled` persist after the search ends and describe the
/// last search until the next one starts, which moves straight to `Searching`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// No search has run yet
    Idle,
    Searching,
    /// Finished by a mate score, the depth limit, a book move or a position with no moves
    Completed,
    /// Stopped by the time budget or an explicit stop
    Cancelled,
}

/// Summary of one completed deepening iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchReport {
    pub depth: u32,
    pub score: Score,
    pub best_move: Option<Move>,
    pub nodes: u64,
    pub elapsed: Duration,
    pub hashfull: u32,
}

/// Single-threaded iterative deepening searcher.
///
/// Owns the transposition table and the optional opening book. A searcher
/// runs one search at a time; other threads cancel it through the
/// [`SearchControl`] returned by [`Searcher::control`].
pub struct Searcher {
    pub(crate) tt: TranspositionTable,
    config: EngineConfig,
    control: SearchControl,
    token: Option<SearchToken>,
    book: Option<Box<dyn BookSource>>,
    rng: StdRng,
    status: SearchStatus,
    pub(crate) nodes: u64,
    last_report: Option<SearchReport>,
}

impl Searcher {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self::with_control(config, SearchControl::new())
    }

    /// Create a searcher that shares an existing cancellation handle.
    #[must_use]
    pub fn with_control(config: EngineConfig, control: SearchControl) -> Self {
        Searcher {
            tt: TranspositionTable::new(config.tt_size_mb),
            config,
            control,
            token: None,
            book: None,
            rng: StdRng::from_entropy(),
            status: SearchStatus::Idle,
            nodes: 0,
            last_report: None,
        }
    }

    /// Install an opening book consulted before each search.
    pub fn set_book(&mut self, book: Box<dyn BookSource>) {
        self.book = Some(book);
    }

    #[must_use]
    pub fn has_book(&self) -> bool {
        self.book.is_some()
    }

    /// Reseed the generator used for book draws.
    pub fn seed_book_rng(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Handle other threads use to stop the search.
    #[must_use]
    pub fn control(&self) -> SearchControl {
        self.control.clone()
    }

    /// Cancel the current search, if any.
    pub fn stop(&self) {
        self.control.stop();
    }

    #[must_use]
    pub fn status(&self) -> SearchStatus {
        self.status
    }

    /// Report of the deepest iteration completed by the last search
    #[must_use]
    pub fn last_report(&self) -> Option<SearchReport> {
        self.last_report
    }

    /// Nodes visited by the last search
    #[must_use]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    #[inline]
    pub(crate) fn is_cancelled(&self) -> bool {
        self.token.as_ref().map_or(true, SearchToken::is_cancelled)
    }

    /// Search `board` for at most `budget` and return the best move found.
    ///
    /// Returns `None` only when the side to move has no legal move. The board
    /// is left as it was given.
    pub fn get_best_move(&mut self, budget: Duration, board: &mut Board) -> Option<Move> {
        let token = self.control.begin();
        self.search_with_token(token, budget, board)
    }

    /// Like [`Searcher::get_best_move`] for a search id allocated by the caller.
    pub fn search_with_token(
        &mut self,
        token: SearchToken,
        budget: Duration,
        board: &mut Board,
    ) -> Option<Move> {
        let start = Instant::now();
        self.status = SearchStatus::Searching;
        self.nodes = 0;
        self.last_report = None;
        self.token = Some(token.clone());
        let _timer = DeadlineTimer::start(budget, token.clone());
        log::debug!(
            "search {} started, budget {} ms",
            token.id(),
            budget.as_millis()
        );

        if let Some(mv) = self.book_move(board) {
            log::debug!("search {} played book move {mv:?}", token.id());
            self.finish(&token, SearchStatus::Completed);
            return Some(mv);
        }

        self.tt.clear();

        // fallback so a search stopped before depth 1 still answers
        let Some(mut best) = board.legal_moves().first() else {
            self.finish(&token, SearchStatus::Completed);
            return None;
        };

        let mut hint = None;
        for depth in 1..=self.config.max_depth {
            let result = self.negamax(depth, -INF, INF, board, hint);
            if token.is_cancelled() {
                log::debug!("search {} cancelled during depth {depth}", token.id());
                break;
            }
            if let Some(mv) = result.best_move {
                best = mv;
                hint = Some(mv);
            }

            let report = SearchReport {
                depth,
                score: result.score,
                best_move: result.best_move,
                nodes: self.nodes,
                elapsed: start.elapsed(),
                hashfull: self.tt.hashfull_per_mille(),
            };
            log::info!(
                "depth {} score {} nodes {} time {} ms hashfull {} best {:?}",
                report.depth,
                report.score,
                report.nodes,
                report.elapsed.as_millis(),
                report.hashfull,
                report.best_move
            );
            self.last_report = Some(report);

            if is_mate_score(result.score) {
                break;
            }
        }

        let status = if token.is_cancelled() {
            SearchStatus::Cancelled
        } else {
            SearchStatus::Completed
        };
        self.finish(&token, status);
        Some(best)
    }

    /// One fixed-depth negamax from `board` with an empty table and no time limit.
    pub fn search_depth(&mut self, board: &mut Board, depth: u32) -> SearchResult {
        let token = self.control.begin();
        self.status = SearchStatus::Searching;
        self.nodes = 0;
        self.token = Some(token.clone());
        self.tt.clear();

        let result = self.negamax(depth.max(1), -INF, INF, board, None);

        let status = if token.is_cancelled() {
            SearchStatus::Cancelled
        } else {
            SearchStatus::Completed
        };
        self.finish(&token, status);
        result
    }

    fn finish(&mut self, token: &SearchToken, status: SearchStatus) {
        self.status = status;
        self.token = None;
        log::debug!(
            "search {} finished {:?} after {} nodes",
            token.id(),
            status,
            self.nodes
        );
    }

    /// Draw a legal book move for the position, if the book has one.
    ///
    /// A failing book is dropped for the rest of this searcher's life.
    fn book_move(&mut self, board: &mut Board) -> Option<Move> {
        if !self.config.use_book {
            return None;
        }
        let source = self.book.as_ref()?;
        match source.candidates(board) {
            Ok(candidates) => {
                let mv = select_weighted(&candidates, &mut self.rng)?;
                if board.legal_moves().contains(&mv) {
                    Some(mv)
                } else {
                    log::debug!("ignoring book move {mv:?}, not legal here");
                    None
                }
            }
            Err(err) => {
                log::warn!("{err}; continuing without the opening book");
                self.book = None;
                None
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn arm_for_test(&mut self) {
        self.token = Some(self.control.begin());
    }
}
