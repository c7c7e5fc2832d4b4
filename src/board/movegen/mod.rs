//! Pseudo-legal move generation.
//!
//! Moves are generated without regard to whether they leave the mover's king
//! attacked; `Board::make_move` rejects those. En-passant captures are only
//! produced for the side to move.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, Color, Move, MoveList, Piece, Square};

pub(crate) use kings::KING_OFFSETS;
pub(crate) use knights::KNIGHT_OFFSETS;
pub(crate) use sliders::{DIAGONALS, ORTHOGONALS};

/// Which subset of moves to produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum GenKind {
    Captures,
    Quiets,
}

impl Board {
    /// Every pseudo-legal move for `color`, captures first.
    #[must_use]
    pub fn generate_moves(&self, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        self.generate_into(color, GenKind::Captures, &mut moves);
        self.generate_into(color, GenKind::Quiets, &mut moves);
        moves
    }

    /// Pseudo-legal captures for `color`, including en passant.
    #[must_use]
    pub fn generate_captures(&self, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        self.generate_into(color, GenKind::Captures, &mut moves);
        moves
    }

    fn generate_into(&self, color: Color, kind: GenKind, moves: &mut MoveList) {
        for from in Square::all() {
            let Some((owner, piece)) = self.piece_at(from) else {
                continue;
            };
            if owner != color {
                continue;
            }
            match piece {
                Piece::Pawn => self.pawn_moves(from, color, kind, moves),
                Piece::Knight => self.knight_moves(from, color, kind, moves),
                Piece::Bishop | Piece::Rook | Piece::Queen => {
                    self.slider_moves(from, color, piece, kind, moves);
                }
                Piece::King => self.king_moves(from, color, kind, moves),
            }
        }
    }

    /// Push a move to `to` for a stepping piece if it is the right kind.
    #[inline]
    fn push_step(
        &self,
        from: Square,
        to: Square,
        color: Color,
        piece: Piece,
        kind: GenKind,
        moves: &mut MoveList,
    ) {
        match (self.piece_at(to), kind) {
            (None, GenKind::Quiets) => {
                moves.push(Move::new(color, from, to, piece, None, None));
            }
            (Some((owner, victim)), GenKind::Captures) if owner != color => {
                moves.push(Move::new(color, from, to, piece, None, Some(victim)));
            }
            _ => {}
        }
    }
}
