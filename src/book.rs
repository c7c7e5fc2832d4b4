//! Opening-book move selection.
//!
//! Reading and decoding book files belongs to a [`BookSource`]. This module
//! only picks among the `(move, weight)` candidates a source reports for the
//! current position.

use std::collections::HashMap;
use std::fmt;

use rand::Rng;

use crate::board::{Board, Move};

/// A decoded book entry for the current position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BookCandidate {
    pub mv: Move,
    pub weight: u16,
}

/// Error type for book access failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// The book could not be opened or is not loaded
    Unavailable(String),
    /// The book data could not be decoded
    Corrupt(String),
}

impl fmt::Display for BookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookError::Unavailable(reason) => write!(f, "Opening book unavailable: {reason}"),
            BookError::Corrupt(reason) => write!(f, "Opening book corrupt: {reason}"),
        }
    }
}

impl std::error::Error for BookError {}

/// Supplies book candidates for a position.
///
/// Implementations own their hashing scheme and file format, including any
/// special encoding of castling moves. An empty list means the position is
/// out of book.
pub trait BookSource: Send {
    fn candidates(&self, board: &Board) -> Result<Vec<BookCandidate>, BookError>;
}

/// Cumulative-weight draw over `candidates`.
///
/// Draws `r` uniformly from `0..total` and returns the first candidate whose
/// running weight exceeds `r`, so zero-weight entries are never chosen.
/// Returns `None` when the total weight is zero.
pub fn select_weighted<R: Rng + ?Sized>(candidates: &[BookCandidate], rng: &mut R) -> Option<Move> {
    let total: u64 = candidates.iter().map(|c| u64::from(c.weight)).sum();
    if total == 0 {
        return None;
    }

    let pick = rng.gen_range(0..total);
    let mut cumulative = 0;
    for candidate in candidates {
        cumulative += u64::from(candidate.weight);
        if pick < cumulative {
            return Some(candidate.mv);
        }
    }
    None
}

/// In-memory book keyed by this crate's position fingerprint.
#[derive(Debug, Clone, Default)]
pub struct MemoryBook {
    by_hash: HashMap<u64, Vec<BookCandidate>>,
}

impl MemoryBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a candidate for the position `board` is in.
    pub fn insert(&mut self, board: &Board, mv: Move, weight: u16) {
        self.by_hash
            .entry(board.hash())
            .or_default()
            .push(BookCandidate { mv, weight });
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_hash.is_empty()
    }
}

impl BookSource for MemoryBook {
    fn candidates(&self, board: &Board) -> Result<Vec<BookCandidate>, BookError> {
        Ok(self.by_hash.get(&board.hash()).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::board::Square;

    fn start_move(board: &Board, from: &str, to: &str) -> Move {
        board
            .build_move(
                Square::from_algebraic(from).unwrap(),
                Square::from_algebraic(to).unwrap(),
                None,
            )
            .unwrap()
    }

    #[test]
    fn test_zero_total_weight_selects_nothing() {
        let board = Board::new();
        let candidates = [BookCandidate {
            mv: start_move(&board, "e2", "e4"),
            weight: 0,
        }];
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(select_weighted(&candidates, &mut rng), None);
        assert_eq!(select_weighted(&[], &mut rng), None);
    }

    #[test]
    fn test_zero_weight_entries_never_chosen() {
        let board = Board::new();
        let e4 = start_move(&board, "e2", "e4");
        let d4 = start_move(&board, "d2", "d4");
        let candidates = [
            BookCandidate { mv: d4, weight: 0 },
            BookCandidate { mv: e4, weight: 5 },
        ];
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            assert_eq!(select_weighted(&candidates, &mut rng), Some(e4));
        }
    }

    #[test]
    fn test_weights_shape_the_draw() {
        let board = Board::new();
        let e4 = start_move(&board, "e2", "e4");
        let d4 = start_move(&board, "d2", "d4");
        let candidates = [
            BookCandidate { mv: e4, weight: 3 },
            BookCandidate { mv: d4, weight: 1 },
        ];
        let mut rng = StdRng::seed_from_u64(7);
        let e4_count = (0..4000)
            .filter(|_| select_weighted(&candidates, &mut rng) == Some(e4))
            .count();
        assert!((2700..3300).contains(&e4_count), "e4 drawn {e4_count} times");
    }

    #[test]
    fn test_memory_book_lookup() {
        let mut board = Board::new();
        let e4 = start_move(&board, "e2", "e4");
        let mut book = MemoryBook::new();
        book.insert(&board, e4, 10);

        let found = book.candidates(&board).unwrap();
        assert_eq!(found, vec![BookCandidate { mv: e4, weight: 10 }]);

        assert!(board.make_move(e4));
        assert!(book.candidates(&board).unwrap().is_empty());
    }

    #[test]
    fn test_book_error_display() {
        let err = BookError::Unavailable("missing.bin".to_string());
        assert!(err.to_string().contains("missing.bin"));
    }
}
