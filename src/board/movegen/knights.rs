use super::super::{Board, Color, MoveList, Piece, Square};
use super::GenKind;

pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

impl Board {
    pub(super) fn knight_moves(
        &self,
        from: Square,
        color: Color,
        kind: GenKind,
        moves: &mut MoveList,
    ) {
        for (dr, df) in KNIGHT_OFFSETS {
            if let Some(to) = from.offset(dr, df) {
                self.push_step(from, to, color, Piece::Knight, kind, moves);
            }
        }
    }
}
