//! Move types and move list.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece};
use super::square::Square;

/// A fully described move.
///
/// Carries everything needed to apply the move and to reverse it exactly:
/// the mover's color, the piece type before the move, an optional promotion
/// and the piece that stood on the destination beforehand. En-passant and
/// castling are recognised from the squares and piece type.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub color: Color,
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub promotion: Option<Piece>,
    pub captured: Option<Piece>,
}

impl Move {
    /// Create a move; `captured` is the piece on `to` before the move
    #[inline]
    #[must_use]
    pub const fn new(
        color: Color,
        from: Square,
        to: Square,
        piece: Piece,
        promotion: Option<Piece>,
        captured: Option<Piece>,
    ) -> Self {
        Move {
            color,
            from,
            to,
            piece,
            promotion,
            captured,
        }
    }

    /// Piece type standing on `to` after the move
    #[inline]
    #[must_use]
    pub const fn end_piece(self) -> Piece {
        match self.promotion {
            Some(p) => p,
            None => self.piece,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_castling(self) -> bool {
        self.piece == Piece::King && self.from.file().abs_diff(self.to.file()) == 2
    }

    #[inline]
    #[must_use]
    pub fn is_en_passant(self) -> bool {
        self.piece == Piece::Pawn && self.from.file() != self.to.file() && self.captured.is_none()
    }

    #[inline]
    #[must_use]
    pub fn is_double_pawn_push(self) -> bool {
        self.piece == Piece::Pawn && self.from.row().abs_diff(self.to.row()) == 2
    }

    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub fn is_capture(self) -> bool {
        self.captured.is_some() || self.is_en_passant()
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }

    /// Type of the piece removed from the board, counting en passant as a pawn
    #[inline]
    #[must_use]
    pub fn victim(self) -> Option<Piece> {
        if self.is_en_passant() {
            Some(Piece::Pawn)
        } else {
            self.captured
        }
    }

    /// Square of the pawn removed by an en-passant capture
    #[inline]
    #[must_use]
    pub(crate) fn en_passant_victim(self) -> Square {
        self.to.shift(-self.color.pawn_step())
    }

    /// Rook (from, to) squares for a castling move
    #[inline]
    #[must_use]
    pub(crate) fn castling_rook_squares(self) -> (Square, Square) {
        let kingside = self.to.file() > self.from.file();
        let rook_from = if kingside {
            self.from.shift(3)
        } else {
            self.from.shift(-4)
        };
        let rook_to = if kingside {
            self.from.shift(1)
        } else {
            self.from.shift(-1)
        };
        (rook_from, rook_to)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Move({} {}{}{}",
            self.color,
            self.piece.to_char().to_ascii_uppercase(),
            self.from,
            self.to
        )?;
        if let Some(promo) = self.promotion {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        if let Some(cap) = self.captured {
            write!(f, " x{}", cap.to_char())?;
        }
        if self.is_castling() {
            write!(f, " castle")?;
        }
        if self.is_en_passant() {
            write!(f, " ep")?;
        }
        write!(f, ")")
    }
}

pub(crate) const MAX_MOVES: usize = 256;

const FILLER: Move = Move {
    color: Color::White,
    from: Square::A8,
    to: Square::A8,
    piece: Piece::Pawn,
    promotion: None,
    captured: None,
};

/// List of moves with a fixed-size backing array.
///
/// Positions with more than `MAX_MOVES` moves move the whole list into
/// `spill` and keep growing there.
#[derive(Clone, Debug)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
    spill: Vec<Move>,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList {
            moves: [FILLER; MAX_MOVES],
            len: 0,
            spill: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, mv: Move) {
        if self.len < MAX_MOVES {
            self.moves[self.len] = mv;
        } else {
            if self.spill.is_empty() {
                self.spill.reserve(MAX_MOVES * 2);
                self.spill.extend_from_slice(&self.moves);
            }
            self.spill.push(mv);
        }
        self.len += 1;
    }

    fn spilled(&self) -> bool {
        self.len > MAX_MOVES
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        if self.spilled() {
            &self.spill
        } else {
            &self.moves[..self.len]
        }
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Move] {
        if self.spilled() {
            &mut self.spill
        } else {
            &mut self.moves[..self.len]
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        self.as_slice().get(idx).copied()
    }

    #[must_use]
    pub fn first(&self) -> Option<Move> {
        self.get(0)
    }

    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.as_slice().contains(mv)
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "MoveList index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.as_slice()[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn test_castling_rook_squares() {
        let short = Move::new(Color::White, sq("e1"), sq("g1"), Piece::King, None, None);
        assert!(short.is_castling());
        assert_eq!(short.castling_rook_squares(), (sq("h1"), sq("f1")));

        let long = Move::new(Color::Black, sq("e8"), sq("c8"), Piece::King, None, None);
        assert!(long.is_castling());
        assert_eq!(long.castling_rook_squares(), (sq("a8"), sq("d8")));
    }

    #[test]
    fn test_en_passant_detection() {
        let ep = Move::new(Color::Black, sq("d4"), sq("e3"), Piece::Pawn, None, None);
        assert!(ep.is_en_passant());
        assert!(ep.is_capture());
        assert_eq!(ep.victim(), Some(Piece::Pawn));
        assert_eq!(ep.en_passant_victim(), sq("e4"));

        let push = Move::new(Color::White, sq("e2"), sq("e4"), Piece::Pawn, None, None);
        assert!(!push.is_en_passant());
        assert!(push.is_double_pawn_push());
    }

    #[test]
    fn test_end_piece_after_promotion() {
        let promo = Move::new(
            Color::White,
            sq("a7"),
            sq("a8"),
            Piece::Pawn,
            Some(Piece::Queen),
            None,
        );
        assert_eq!(promo.end_piece(), Piece::Queen);
        assert!(promo.is_promotion());
    }

    #[test]
    fn test_move_list_push_and_get() {
        let mut list = MoveList::new();
        assert!(list.is_empty());
        let mv = Move::new(Color::White, sq("g1"), sq("f3"), Piece::Knight, None, None);
        list.push(mv);
        assert_eq!(list.len(), 1);
        assert_eq!(list.first(), Some(mv));
        assert_eq!(list.get(1), None);
        assert!(list.contains(&mv));
    }

    #[test]
    fn test_move_list_grows_past_fixed_capacity() {
        let mut list = MoveList::new();
        let total = MAX_MOVES + 40;
        for i in 0..total {
            let to = Square::new((i % 64) as u8).unwrap();
            list.push(Move::new(Color::White, sq("d4"), to, Piece::Queen, None, None));
        }
        assert_eq!(list.len(), total);
        assert_eq!(list.iter().count(), total);
        assert_eq!(list[0].to, Square::new(0).unwrap());
        assert_eq!(list[MAX_MOVES].to, Square::new((MAX_MOVES % 64) as u8).unwrap());
        assert_eq!(list.get(total), None);
        list.as_mut_slice().reverse();
        assert_eq!(list.first().map(|m| m.to), Square::new(((total - 1) % 64) as u8));
    }
}
