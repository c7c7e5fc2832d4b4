use super::constants::{Score, INF, MATE};
use super::move_order::ordered_moves;
use super::{SearchResult, Searcher};
use crate::board::{Board, Move};
use crate::tt::{BoundType, TTEntry};

impl Searcher {
    /// Depth-limited negamax with alpha-beta pruning.
    ///
    /// `hint` is tried first when it is one of the generated moves. Children at
    /// the last ply are scored by quiescence. When the search has been
    /// cancelled the result is meaningless and nothing is stored.
    pub fn negamax(
        &mut self,
        depth: u32,
        mut alpha: Score,
        mut beta: Score,
        board: &mut Board,
        hint: Option<Move>,
    ) -> SearchResult {
        if self.is_cancelled() {
            return SearchResult::default();
        }
        self.nodes += 1;

        let alpha_orig = alpha;
        let key = board.hash();

        if let Some(entry) = self.tt.probe(key) {
            if entry.depth >= depth {
                let cached = SearchResult {
                    best_move: entry.best_move,
                    score: entry.score,
                };
                match entry.bound {
                    BoundType::Exact => return cached,
                    BoundType::LowerBound => alpha = alpha.max(entry.score),
                    BoundType::UpperBound => beta = beta.min(entry.score),
                }
                if alpha >= beta {
                    return cached;
                }
            }
        }

        let color = board.side_to_move();
        let mut best = SearchResult {
            best_move: None,
            score: -INF,
        };
        let mut legal_moves = 0;

        for mv in ordered_moves(board, hint) {
            if !board.make_move(mv) {
                continue;
            }
            legal_moves += 1;

            let score = if board.is_draw() {
                0
            } else if depth <= 1 {
                -self.quiescence(-beta, -alpha, board)
            } else {
                -self.negamax(depth - 1, -beta, -alpha, board, None).score
            };
            board.undo_move(mv);

            if score > best.score {
                best = SearchResult {
                    best_move: Some(mv),
                    score,
                };
            }
            alpha = alpha.max(best.score);
            if alpha >= beta {
                break;
            }
        }

        if legal_moves == 0 {
            best.score = if board.in_check(color) {
                -(MATE + depth as Score)
            } else {
                0
            };
        }

        if !self.is_cancelled() {
            let bound = if best.score <= alpha_orig {
                BoundType::UpperBound
            } else if best.score >= beta {
                BoundType::LowerBound
            } else {
                BoundType::Exact
            };
            self.tt
                .store(key, TTEntry::new(bound, best.best_move, best.score, depth));
        }

        best
    }
}
