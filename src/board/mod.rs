//! Chess board representation and game logic.
//!
//! A mailbox board with a stack of per-ply state frames, so moves can be made
//! and undone incrementally during search. Supports full chess rules including
//! castling, en passant and promotions.
//!
//! # Example
//! ```
//! use chess_search::board::Board;
//!
//! let mut board = Board::new();
//! let moves = board.legal_moves();
//! assert_eq!(moves.len(), 20);
//! ```

mod attacks;
mod error;
mod eval;
mod fen;
mod make_unmake;
mod movegen;
pub mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::FenError;
pub use fen::START_FEN;
pub use search::{SearchReport, SearchResult, SearchStatus, Searcher};
pub use state::Board;
pub use types::{CastlingRights, Color, Move, MoveList, Piece, Square};

pub(crate) use types::{CASTLING_SIDES, PROMOTION_PIECES};
