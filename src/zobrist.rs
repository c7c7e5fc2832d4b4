//! Zobrist hashing for chess positions.
//!
//! Keys are drawn once per process from an entropy-seeded generator, so
//! fingerprints are stable within a run but not across runs.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{CastlingRights, Color, Piece, Square};

pub(crate) struct ZobristKeys {
    // piece_keys[piece][color][square]
    pub(crate) piece_keys: [[[u64; 64]; 2]; 6],
    pub(crate) black_to_move_key: u64,
    // indexed by CastlingRights::key_index
    pub(crate) castling_keys: [u64; 4],
    // en_passant_keys[file]
    pub(crate) en_passant_keys: [u64; 8],
}

impl ZobristKeys {
    fn new() -> Self {
        Self::from_rng(&mut StdRng::from_entropy())
    }

    fn from_rng<R: Rng>(rng: &mut R) -> Self {
        let mut piece_keys = [[[0; 64]; 2]; 6];
        for piece in &mut piece_keys {
            for color in piece.iter_mut() {
                for key in color.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        let black_to_move_key = rng.gen();

        let mut castling_keys = [0; 4];
        for key in &mut castling_keys {
            *key = rng.gen();
        }

        let mut en_passant_keys = [0; 8];
        for key in &mut en_passant_keys {
            *key = rng.gen();
        }

        ZobristKeys {
            piece_keys,
            black_to_move_key,
            castling_keys,
            en_passant_keys,
        }
    }

    #[inline]
    pub(crate) fn piece(&self, color: Color, piece: Piece, sq: Square) -> u64 {
        self.piece_keys[piece.index()][color.index()][sq.index()]
    }

    #[inline]
    pub(crate) fn castling(&self, color: Color, kingside: bool) -> u64 {
        self.castling_keys[CastlingRights::key_index(color, kingside)]
    }

    #[inline]
    pub(crate) fn en_passant(&self, sq: Square) -> u64 {
        self.en_passant_keys[sq.file() as usize]
    }
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);
