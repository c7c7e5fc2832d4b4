use super::super::{Board, Color, Move, MoveList, Piece, Square};
use super::GenKind;

pub(crate) const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Ray directions for a sliding piece
fn slider_directions(piece: Piece) -> &'static [(i8, i8)] {
    const QUEEN: [(i8, i8); 8] = [
        (1, 1),
        (1, -1),
        (-1, 1),
        (-1, -1),
        (1, 0),
        (-1, 0),
        (0, 1),
        (0, -1),
    ];
    match piece {
        Piece::Bishop => &DIAGONALS,
        Piece::Rook => &ORTHOGONALS,
        Piece::Queen => &QUEEN,
        _ => &[],
    }
}

impl Board {
    pub(super) fn slider_moves(
        &self,
        from: Square,
        color: Color,
        piece: Piece,
        kind: GenKind,
        moves: &mut MoveList,
    ) {
        for &(dr, df) in slider_directions(piece) {
            let mut cursor = from;
            while let Some(to) = cursor.offset(dr, df) {
                match self.piece_at(to) {
                    None => {
                        if kind == GenKind::Quiets {
                            moves.push(Move::new(color, from, to, piece, None, None));
                        }
                    }
                    Some((owner, victim)) => {
                        if owner != color && kind == GenKind::Captures {
                            moves.push(Move::new(color, from, to, piece, None, Some(victim)));
                        }
                        break;
                    }
                }
                cursor = to;
            }
        }
    }
}
