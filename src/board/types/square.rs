//! Square type.
//!
//! Squares are numbered 0-63 starting at a8 and running file-first down to h1,
//! so row 0 is rank 8 and row 7 is rank 1.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A square on the chess board (0 = a8, 7 = h8, 56 = a1, 63 = h1).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    pub(crate) const A8: Square = Square(0);

    /// Create a square from an index, or `None` if out of range
    #[inline]
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Create a square from (row, file), where row 0 is rank 8
    #[inline]
    #[must_use]
    pub const fn from_coords(row: u8, file: u8) -> Option<Self> {
        if row < 8 && file < 8 {
            Some(Square(row * 8 + file))
        } else {
            None
        }
    }

    /// Square from coordinates the caller knows are on the board
    #[inline]
    #[must_use]
    pub(crate) const fn at(row: u8, file: u8) -> Self {
        Square(row * 8 + file)
    }

    /// Parse algebraic notation such as `e4`
    #[must_use]
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].checked_sub(b'a')?;
        let rank = bytes[1].checked_sub(b'1')?;
        if file >= 8 || rank >= 8 {
            return None;
        }
        Square::from_coords(7 - rank, file)
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Row 0-7, where row 0 is rank 8
    #[inline]
    #[must_use]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    /// File 0-7, where 0 is file a
    #[inline]
    #[must_use]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// Step by (row, file) deltas, returning `None` when the result leaves the board
    #[inline]
    #[must_use]
    pub const fn offset(self, drow: i8, dfile: i8) -> Option<Self> {
        let row = self.row() as i8 + drow;
        let file = self.file() as i8 + dfile;
        if row < 0 || row >= 8 || file < 0 || file >= 8 {
            None
        } else {
            Some(Square((row * 8 + file) as u8))
        }
    }

    /// Step by a raw index delta. Callers guarantee the result stays on the board.
    #[inline]
    #[must_use]
    pub(crate) const fn shift(self, delta: i8) -> Self {
        Square((self.0 as i8 + delta) as u8)
    }

    /// Iterate over all 64 squares in index order
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file()) as char, 8 - self.row())
    }
}
