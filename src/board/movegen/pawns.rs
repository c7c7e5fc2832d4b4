use super::super::{Board, Color, Move, MoveList, Piece, Square, PROMOTION_PIECES};
use super::GenKind;

impl Board {
    pub(super) fn pawn_moves(&self, from: Square, color: Color, kind: GenKind, moves: &mut MoveList) {
        let forward = color.pawn_step().signum();
        match kind {
            GenKind::Captures => {
                for df in [-1, 1] {
                    let Some(to) = from.offset(forward, df) else {
                        continue;
                    };
                    match self.piece_at(to) {
                        Some((owner, victim)) if owner != color => {
                            push_pawn_move(moves, color, from, to, Some(victim));
                        }
                        None if color == self.side_to_move
                            && self.en_passant_target() == Some(to) =>
                        {
                            push_pawn_move(moves, color, from, to, None);
                        }
                        _ => {}
                    }
                }
            }
            GenKind::Quiets => {
                let Some(one) = from.offset(forward, 0) else {
                    return;
                };
                if self.piece_at(one).is_some() {
                    return;
                }
                push_pawn_move(moves, color, from, one, None);
                if from.row() == color.pawn_start_row() {
                    if let Some(two) = one.offset(forward, 0) {
                        if self.piece_at(two).is_none() {
                            push_pawn_move(moves, color, from, two, None);
                        }
                    }
                }
            }
        }
    }
}

/// Push a pawn move, expanding it into one move per promotion piece on the last row.
fn push_pawn_move(
    moves: &mut MoveList,
    color: Color,
    from: Square,
    to: Square,
    captured: Option<Piece>,
) {
    if to.row() == color.promotion_row() {
        for promo in PROMOTION_PIECES {
            moves.push(Move::new(color, from, to, Piece::Pawn, Some(promo), captured));
        }
    } else {
        moves.push(Move::new(color, from, to, Piece::Pawn, None, captured));
    }
}
