//! Check and threat queries.

use super::movegen::{DIAGONALS, KING_OFFSETS, KNIGHT_OFFSETS, ORTHOGONALS};
use super::{Board, Color, Move, Piece, Square};

impl Board {
    /// Whether any piece of `by` attacks `square`.
    ///
    /// Scans outward from the target square, which gives the same answer as
    /// asking whether any pseudo-legal capture of `by` lands there.
    #[must_use]
    pub fn is_attacked(&self, square: Square, by: Color) -> bool {
        let forward = by.pawn_step().signum();
        for df in [-1, 1] {
            if let Some(from) = square.offset(-forward, df) {
                if self.piece_at(from) == Some((by, Piece::Pawn)) {
                    return true;
                }
            }
        }

        let hits = |offsets: &[(i8, i8)], piece: Piece| {
            offsets.iter().any(|&(dr, df)| {
                square
                    .offset(dr, df)
                    .is_some_and(|s| self.piece_at(s) == Some((by, piece)))
            })
        };
        if hits(&KNIGHT_OFFSETS[..], Piece::Knight) || hits(&KING_OFFSETS[..], Piece::King) {
            return true;
        }

        self.ray_hits(square, by, &ORTHOGONALS, Piece::Rook)
            || self.ray_hits(square, by, &DIAGONALS, Piece::Bishop)
    }

    /// First piece along each ray is `by`'s `slider` or queen.
    fn ray_hits(&self, square: Square, by: Color, rays: &[(i8, i8)], slider: Piece) -> bool {
        for &(dr, df) in rays {
            let mut cursor = square;
            while let Some(next) = cursor.offset(dr, df) {
                if let Some((owner, piece)) = self.piece_at(next) {
                    if owner == by && (piece == slider || piece == Piece::Queen) {
                        return true;
                    }
                    break;
                }
                cursor = next;
            }
        }
        false
    }

    /// Whether the king of `color` is attacked. A side without a king is never in check.
    #[must_use]
    pub fn in_check(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|king| self.is_attacked(king, color.opponent()))
    }

    /// Whether any opponent move of `player` lands on `square`, counting an
    /// en-passant capture as a threat to the pawn it removes.
    #[must_use]
    pub fn is_threatened(&self, player: Color, square: Square) -> bool {
        let opponent_moves = self.generate_moves(player.opponent());
        self.is_threatened_by(player, square, opponent_moves.as_slice())
    }

    /// Like [`Board::is_threatened`] but against a precomputed opponent move list.
    #[must_use]
    pub fn is_threatened_by(&self, player: Color, square: Square, opponent_moves: &[Move]) -> bool {
        let pawn_here = self.piece_at(square) == Some((player, Piece::Pawn));
        let ep = self.en_passant_target();
        opponent_moves.iter().any(|m| {
            m.to == square
                || (pawn_here
                    && m.piece == Piece::Pawn
                    && Some(m.to) == ep
                    && m.to.index().abs_diff(square.index()) == 8)
        })
    }
}
