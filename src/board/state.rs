use crate::zobrist::ZOBRIST;

use super::{CastlingRights, Color, Move, MoveList, Piece, Square, CASTLING_SIDES};

/// Per-ply side data.
///
/// One frame exists for the constructed position and one more is pushed by
/// every successful `make_move`; `undo_move` pops it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct StateFrame {
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) king_squares: [Option<Square>; 2],
    pub(crate) piece_counts: [[u8; 6]; 2],
    pub(crate) hash: u64,
}

impl StateFrame {
    fn empty() -> Self {
        StateFrame {
            castling: CastlingRights::none(),
            en_passant: None,
            halfmove_clock: 0,
            king_squares: [None; 2],
            piece_counts: [[0; 6]; 2],
            hash: 0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) squares: [Option<(Color, Piece)>; 64],
    pub(crate) side_to_move: Color,
    pub(crate) frames: Vec<StateFrame>,
}

impl Board {
    /// Standard starting position
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in (0u8..).zip(back_rank) {
            board.place(Square::at(0, file), Color::Black, piece);
            board.place(Square::at(1, file), Color::Black, Piece::Pawn);
            board.place(Square::at(6, file), Color::White, Piece::Pawn);
            board.place(Square::at(7, file), Color::White, piece);
        }
        board.frame_mut().castling = CastlingRights::all();
        board.frame_mut().hash = board.compute_hash();
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            squares: [None; 64],
            side_to_move: Color::White,
            frames: vec![StateFrame::empty()],
        }
    }

    /// Put a piece on an empty square, keeping king squares and piece counts
    /// in step. Used while setting up a position; does not touch the hash.
    pub(crate) fn place(&mut self, square: Square, color: Color, piece: Piece) {
        self.squares[square.index()] = Some((color, piece));
        let frame = self.frame_mut();
        frame.piece_counts[color.index()][piece.index()] += 1;
        if piece == Piece::King {
            frame.king_squares[color.index()] = Some(square);
        }
    }

    #[inline]
    pub(crate) fn frame(&self) -> &StateFrame {
        // the construction frame is never popped
        &self.frames[self.frames.len() - 1]
    }

    #[inline]
    pub(crate) fn frame_mut(&mut self) -> &mut StateFrame {
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<(Color, Piece)> {
        self.squares[square.index()]
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.frame().castling
    }

    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.frame().en_passant
    }

    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.frame().halfmove_clock
    }

    #[inline]
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.frame().king_squares[color.index()]
    }

    #[inline]
    #[must_use]
    pub fn piece_count(&self, color: Color, piece: Piece) -> u8 {
        self.frame().piece_counts[color.index()][piece.index()]
    }

    /// Zobrist fingerprint of the current position
    #[inline]
    #[must_use]
    pub fn hash(&self) -> u64 {
        self.frame().hash
    }

    /// Number of plies applied since the position was constructed
    #[inline]
    #[must_use]
    pub fn ply_count(&self) -> usize {
        self.frames.len() - 1
    }

    /// Recompute the fingerprint from scratch.
    #[must_use]
    pub fn compute_hash(&self) -> u64 {
        let keys = &*ZOBRIST;
        let mut hash = 0;
        for square in Square::all() {
            if let Some((color, piece)) = self.piece_at(square) {
                hash ^= keys.piece(color, piece, square);
            }
        }
        if self.side_to_move == Color::Black {
            hash ^= keys.black_to_move_key;
        }
        let castling = self.castling_rights();
        for (color, kingside) in CASTLING_SIDES {
            if castling.has(color, kingside) {
                hash ^= keys.castling(color, kingside);
            }
        }
        if let Some(ep) = self.en_passant_target() {
            hash ^= keys.en_passant(ep);
        }
        hash
    }

    /// True when the current position occurred at least twice before
    /// with the same side to move since the last irreversible move.
    #[must_use]
    pub fn is_threefold_repetition(&self) -> bool {
        let clock = self.halfmove_clock() as usize;
        if clock < 4 {
            return false;
        }
        let current = self.hash();
        let last = self.frames.len() - 1;
        let mut seen = 1;
        let mut back = 4;
        while back <= clock && back <= last {
            if self.frames[last - back].hash == current {
                seen += 1;
                if seen >= 3 {
                    return true;
                }
            }
            back += 2;
        }
        false
    }

    /// Fifty-move rule or threefold repetition
    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.halfmove_clock() >= 100 || self.is_threefold_repetition()
    }

    /// Moves of the side to move that do not leave its own king attacked
    pub fn legal_moves(&mut self) -> MoveList {
        let color = self.side_to_move;
        let mut legal = MoveList::new();
        for &mv in self.generate_moves(color).iter() {
            if self.make_move(mv) {
                self.undo_move(mv);
                legal.push(mv);
            }
        }
        legal
    }

    #[must_use]
    pub fn is_checkmate(&mut self) -> bool {
        self.in_check(self.side_to_move) && self.legal_moves().is_empty()
    }

    #[must_use]
    pub fn is_stalemate(&mut self) -> bool {
        !self.in_check(self.side_to_move) && self.legal_moves().is_empty()
    }

    /// Count leaf nodes of the legal move tree to the given depth
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }
        let color = self.side_to_move;
        let moves = self.generate_moves(color);
        let mut nodes = 0;
        for &mv in moves.iter() {
            if self.make_move(mv) {
                nodes += self.perft(depth - 1);
                self.undo_move(mv);
            }
        }
        nodes
    }

    /// Fill in a move from the pieces on the board.
    ///
    /// Returns `None` when `from` is empty or does not hold a piece of the side
    /// to move. The result is not checked for legality.
    #[must_use]
    pub fn build_move(&self, from: Square, to: Square, promotion: Option<Piece>) -> Option<Move> {
        let (color, piece) = self.piece_at(from)?;
        if color != self.side_to_move {
            return None;
        }
        let captured = self
            .piece_at(to)
            .filter(|&(c, _)| c != color)
            .map(|(_, p)| p);
        Some(Move::new(color, from, to, piece, promotion, captured))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

