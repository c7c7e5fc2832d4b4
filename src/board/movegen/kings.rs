use super::super::{Board, Color, Move, MoveList, Piece, Square};
use super::GenKind;

pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Board {
    pub(super) fn king_moves(&self, from: Square, color: Color, kind: GenKind, moves: &mut MoveList) {
        for (dr, df) in KING_OFFSETS {
            if let Some(to) = from.offset(dr, df) {
                self.push_step(from, to, color, Piece::King, kind, moves);
            }
        }
        if kind == GenKind::Quiets {
            self.castling_moves(from, color, moves);
        }
    }

    /// Castling needs the right, the rook on its corner and every square
    /// between king and rook empty. Attacked squares are checked in `make_move`.
    fn castling_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        let row = color.back_row();
        if from != Square::at(row, 4) {
            return;
        }
        let rights = self.castling_rights();
        for kingside in [true, false] {
            if !rights.has(color, kingside) {
                continue;
            }
            let (rook_file, between, king_to) = if kingside {
                (7, 5..7, 6)
            } else {
                (0, 1..4, 2)
            };
            if self.piece_at(Square::at(row, rook_file)) != Some((color, Piece::Rook)) {
                continue;
            }
            if between
                .into_iter()
                .any(|file| self.piece_at(Square::at(row, file)).is_some())
            {
                continue;
            }
            moves.push(Move::new(
                color,
                from,
                Square::at(row, king_to),
                Piece::King,
                None,
                None,
            ));
        }
    }
}
