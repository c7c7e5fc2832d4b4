use crate::zobrist::ZOBRIST;

use super::{Board, Color, Move, Piece, Square, CASTLING_SIDES};

impl Board {
    /// Apply a pseudo-legal move.
    ///
    /// Returns `false` and leaves the board untouched if the move would leave
    /// the mover's king attacked, or if a castling king starts on, passes
    /// through or lands on an attacked square. Do not call `undo_move` after
    /// a `false` result.
    pub fn make_move(&mut self, mv: Move) -> bool {
        let us = mv.color;
        let them = us.opponent();
        let castling = mv.is_castling();

        if castling && self.is_attacked(mv.from, them) {
            return false;
        }

        let keys = &*ZOBRIST;
        let mut frame = *self.frame();
        let mut hash = frame.hash;

        let mut rights = frame.castling;
        if mv.piece == Piece::King {
            rights.remove_color(us);
            frame.king_squares[us.index()] = Some(mv.to);
        }
        if mv.piece == Piece::Rook {
            if let Some(kingside) = rook_home_side(mv.from, us) {
                rights.remove(us, kingside);
            }
        }
        if mv.captured == Some(Piece::Rook) {
            if let Some(kingside) = rook_home_side(mv.to, them) {
                rights.remove(them, kingside);
            }
        }
        for (color, kingside) in CASTLING_SIDES {
            if frame.castling.has(color, kingside) != rights.has(color, kingside) {
                hash ^= keys.castling(color, kingside);
            }
        }
        frame.castling = rights;

        if let Some(old) = frame.en_passant.take() {
            hash ^= keys.en_passant(old);
        }
        if mv.is_double_pawn_push() && self.has_pawn_beside(mv.to, them) {
            let target = mv.from.shift(us.pawn_step());
            frame.en_passant = Some(target);
            hash ^= keys.en_passant(target);
        }

        if mv.piece == Piece::Pawn || mv.captured.is_some() {
            frame.halfmove_clock = 0;
        } else {
            frame.halfmove_clock += 1;
        }

        if let Some(victim) = mv.captured {
            hash ^= keys.piece(them, victim, mv.to);
            frame.piece_counts[them.index()][victim.index()] -= 1;
            if victim == Piece::King {
                frame.king_squares[them.index()] = None;
            }
        }
        if mv.is_en_passant() {
            let victim = mv.en_passant_victim();
            self.squares[victim.index()] = None;
            hash ^= keys.piece(them, Piece::Pawn, victim);
            frame.piece_counts[them.index()][Piece::Pawn.index()] -= 1;
        }
        if castling {
            let (rook_from, rook_to) = mv.castling_rook_squares();
            self.squares[rook_from.index()] = None;
            self.squares[rook_to.index()] = Some((us, Piece::Rook));
            hash ^= keys.piece(us, Piece::Rook, rook_from) ^ keys.piece(us, Piece::Rook, rook_to);
        }
        if let Some(promo) = mv.promotion {
            frame.piece_counts[us.index()][Piece::Pawn.index()] -= 1;
            frame.piece_counts[us.index()][promo.index()] += 1;
        }

        let end_piece = mv.end_piece();
        hash ^= keys.piece(us, mv.piece, mv.from) ^ keys.piece(us, end_piece, mv.to);
        self.squares[mv.from.index()] = None;
        self.squares[mv.to.index()] = Some((us, end_piece));

        self.side_to_move = them;
        hash ^= keys.black_to_move_key;

        frame.hash = hash;
        self.frames.push(frame);

        // after castling the rook stands on the square the king passed over
        let legal = !self.in_check(us)
            && !(castling && self.is_attacked(mv.castling_rook_squares().1, them));
        if !legal {
            self.undo_move(mv);
        }
        legal
    }

    /// Reverse the most recent successful `make_move`, which must have been `mv`.
    ///
    /// # Panics
    ///
    /// Panics if no move has been made since construction.
    pub fn undo_move(&mut self, mv: Move) {
        assert!(
            self.frames.len() > 1,
            "undo_move called with no move to undo"
        );
        self.frames.pop();

        let us = mv.color;
        let them = us.opponent();
        self.side_to_move = us;
        self.squares[mv.from.index()] = Some((us, mv.piece));
        self.squares[mv.to.index()] = mv.captured.map(|victim| (them, victim));

        if mv.is_en_passant() {
            self.squares[mv.en_passant_victim().index()] = Some((them, Piece::Pawn));
        }
        if mv.is_castling() {
            let (rook_from, rook_to) = mv.castling_rook_squares();
            self.squares[rook_to.index()] = None;
            self.squares[rook_from.index()] = Some((us, Piece::Rook));
        }
    }

    pub(super) fn has_pawn_beside(&self, square: Square, color: Color) -> bool {
        [-1, 1].into_iter().any(|df| {
            square
                .offset(0, df)
                .is_some_and(|s| self.piece_at(s) == Some((color, Piece::Pawn)))
        })
    }
}

/// Castling side whose rook starts on `square`, if it is one of `color`'s corners.
fn rook_home_side(square: Square, color: Color) -> Option<bool> {
    if square.row() != color.back_row() {
        return None;
    }
    match square.file() {
        0 => Some(false),
        7 => Some(true),
        _ => None,
    }
}
