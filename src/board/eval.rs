use super::{Board, Color, Piece};

/// Centipawns per move of mobility difference
const MOBILITY_WEIGHT: i32 = 10;

impl Board {
    /// Static evaluation in centipawns from White's point of view.
    ///
    /// Material plus a mobility term counting pseudo-legal moves for each side.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        let material = self.material(Color::White) - self.material(Color::Black);
        let white_moves = self.generate_moves(Color::White).len() as i32;
        let black_moves = self.generate_moves(Color::Black).len() as i32;
        material + MOBILITY_WEIGHT * (white_moves - black_moves)
    }

    /// Material of one side from the tracked piece counts
    #[must_use]
    pub fn material(&self, color: Color) -> i32 {
        Piece::ALL
            .iter()
            .map(|&p| i32::from(self.piece_count(color, p)) * p.value())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, Color};

    #[test]
    fn test_start_position_is_balanced() {
        let board = Board::new();
        assert_eq!(board.evaluate(), 0);
        assert_eq!(board.material(Color::White), 8 * 100 + 2 * 300 + 2 * 300 + 2 * 500 + 900 + 5000);
    }

    #[test]
    fn test_extra_queen_favours_owner() {
        let board = Board::try_from_fen("4k3/8/8/8/8/8/8/3QK3 w - - 0 1").unwrap();
        assert!(board.evaluate() > 900);
        let mirrored = Board::try_from_fen("3qk3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        assert!(mirrored.evaluate() < -900);
    }

    #[test]
    fn test_mobility_term() {
        // lone kings: white king in the corner has 3 moves, black king in the middle has 8
        let board = Board::try_from_fen("8/8/8/3k4/8/8/8/K7 w - - 0 1").unwrap();
        assert_eq!(board.evaluate(), 10 * (3 - 8));
    }
}
