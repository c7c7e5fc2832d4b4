use super::constants::Score;
use super::move_order::ordered_captures;
use super::Searcher;
use crate::board::Board;

impl Searcher {
    /// Capture-only search at the horizon, fail-hard.
    ///
    /// The static evaluation stands in for "no capture" and raises alpha; a
    /// score at or above beta returns beta.
    pub fn quiescence(&mut self, mut alpha: Score, beta: Score, board: &mut Board) -> Score {
        if self.is_cancelled() {
            return alpha;
        }
        self.nodes += 1;

        let stand_pat = board.side_to_move().sign() * board.evaluate();
        alpha = alpha.max(stand_pat);
        if alpha >= beta {
            return beta;
        }

        let captures = ordered_captures(board);
        for &mv in captures.iter() {
            if !board.make_move(mv) {
                continue;
            }
            let score = -self.quiescence(-beta, -alpha, board);
            board.undo_move(mv);

            alpha = alpha.max(score);
            if alpha >= beta {
                return beta;
            }
        }
        alpha
    }
}

#[cfg(test)]
mod tests {
    use crate::board::search::constants::INF;
    use crate::board::{Board, Searcher};
    use crate::config::EngineConfig;

    fn searcher() -> Searcher {
        Searcher::new(EngineConfig::default().with_tt_size_mb(1))
    }

    #[test]
    fn test_quiet_position_returns_stand_pat() {
        let mut board = Board::try_from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").unwrap();
        let expected = board.evaluate();
        let mut s = searcher();
        s.arm_for_test();
        assert_eq!(s.quiescence(-INF, INF, &mut board), expected);
    }

    #[test]
    fn test_sees_hanging_queen() {
        // white to move can win the undefended queen
        let mut board = Board::try_from_fen("4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1").unwrap();
        let stand_pat = board.evaluate();
        let mut s = searcher();
        s.arm_for_test();
        let score = s.quiescence(-INF, INF, &mut board);
        assert!(score > stand_pat + 800, "score {score} vs stand pat {stand_pat}");
        assert_eq!(board.hash(), board.compute_hash());
    }

    #[test]
    fn test_fail_hard_returns_beta() {
        let mut board = Board::try_from_fen("4k3/8/8/8/8/8/8/3QK3 w - - 0 1").unwrap();
        let mut s = searcher();
        s.arm_for_test();
        assert_eq!(s.quiescence(-INF, 100, &mut board), 100);
    }
}
