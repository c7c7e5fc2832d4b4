pub mod board;
pub mod book;
pub mod config;
pub mod engine;
pub mod sync;
pub mod timer;
pub mod tt;
mod zobrist;

pub use board::{Board, Color, FenError, Move, Piece, Searcher, Square};
pub use book::{BookCandidate, BookError, BookSource, MemoryBook};
pub use config::EngineConfig;
pub use engine::{EngineController, EngineError};
pub use tt::TranspositionTable;
