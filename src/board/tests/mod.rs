//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move generation correctness by node counts
//! - `movegen.rs` - Generated move sets in specific positions
//! - `draw.rs` - Draw detection (50-move, repetition)
//! - `make_unmake.rs` - Make/undo correctness
//! - `edge_cases.rs` - Special positions and edge cases
//! - `proptest.rs` - Property-based tests

use crate::board::{Board, Move, Piece, Square};

mod edge_cases;

/// Build a move from coordinate notation such as `e2e4` or `a7a8q`.
pub(super) fn coord_move(board: &Board, text: &str) -> Move {
    let from = Square::from_algebraic(&text[0..2]).expect("from square");
    let to = Square::from_algebraic(&text[2..4]).expect("to square");
    let promotion = text[4..].chars().next().and_then(Piece::from_char);
    board
        .build_move(from, to, promotion)
        .unwrap_or_else(|| panic!("no piece of the side to move on {}", &text[0..2]))
}

/// Play a sequence of coordinate moves, asserting each one is legal.
pub(super) fn play(board: &mut Board, moves: &[&str]) {
    for text in moves {
        let mv = coord_move(board, text);
        assert!(board.make_move(mv), "{text} should be legal");
    }
}
