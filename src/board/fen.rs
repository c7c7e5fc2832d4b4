use std::fmt::Write as _;
use std::str::FromStr;

use super::error::FenError;
use super::{Board, Color, Piece, Square};

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Board {
    /// Parse a board position from six-field FEN notation.
    ///
    /// An en-passant field is kept only when the pawn that just double-pushed
    /// is present and a pawn of the side to move stands beside it; otherwise it
    /// is treated as `-`.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() != 6 {
            return Err(FenError::WrongFieldCount { found: parts.len() });
        }

        let mut board = Board::empty();

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRankCount { found: ranks.len() });
        }
        for (row, rank_str) in (0u8..).zip(&ranks) {
            let mut file: u32 = 0;
            for c in rank_str.chars() {
                if let Some(run) = c.to_digit(10) {
                    if !(1..=8).contains(&run) {
                        return Err(FenError::InvalidPiece { char: c });
                    }
                    file += run;
                } else {
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    let color = if c.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    if file < 8 {
                        board.place(Square::at(row, file as u8), color, piece);
                    }
                    file += 1;
                }
            }
            if file != 8 {
                return Err(FenError::InvalidRankLength {
                    rank: 8 - row as usize,
                    files: file as usize,
                });
            }
        }

        board.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        if parts[2] != "-" {
            let castling = &mut board.frame_mut().castling;
            for c in parts[2].chars() {
                match c {
                    'K' => castling.set(Color::White, true),
                    'Q' => castling.set(Color::White, false),
                    'k' => castling.set(Color::Black, true),
                    'q' => castling.set(Color::Black, false),
                    _ => return Err(FenError::InvalidCastling { char: c }),
                }
            }
        }

        if parts[3] != "-" {
            let target = Square::from_algebraic(parts[3]).ok_or_else(|| {
                FenError::InvalidEnPassant {
                    found: parts[3].to_string(),
                }
            })?;
            if board.en_passant_capturable(target) {
                board.frame_mut().en_passant = Some(target);
            }
        }

        board.frame_mut().halfmove_clock =
            parts[4]
                .parse()
                .map_err(|_| FenError::InvalidHalfmoveClock {
                    found: parts[4].to_string(),
                })?;
        parts[5]
            .parse::<u32>()
            .map_err(|_| FenError::InvalidFullmoveNumber {
                found: parts[5].to_string(),
            })?;

        let hash = board.compute_hash();
        board.frame_mut().hash = hash;
        Ok(board)
    }

    /// Whether the side to move could capture onto `target` en passant.
    fn en_passant_capturable(&self, target: Square) -> bool {
        let us = self.side_to_move;
        let them = us.opponent();
        let Some(victim) = target.offset(-us.pawn_step().signum(), 0) else {
            return false;
        };
        if self.piece_at(victim) != Some((them, Piece::Pawn)) {
            return false;
        }
        self.has_pawn_beside(victim, us)
    }

    /// Serialize the position as FEN. The full-move number is not tracked and
    /// is derived from the plies applied since construction.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut fen = String::with_capacity(90);
        for row in 0..8u8 {
            let mut empty = 0;
            for file in 0..8u8 {
                match self.piece_at(Square::at(row, file)) {
                    Some((color, piece)) => {
                        if empty > 0 {
                            let _ = write!(fen, "{empty}");
                            empty = 0;
                        }
                        fen.push(piece.to_fen_char(color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                let _ = write!(fen, "{empty}");
            }
            if row < 7 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(if self.side_to_move == Color::White { 'w' } else { 'b' });
        fen.push(' ');

        let castling = self.castling_rights();
        let before = fen.len();
        for (color, kingside, c) in [
            (Color::White, true, 'K'),
            (Color::White, false, 'Q'),
            (Color::Black, true, 'k'),
            (Color::Black, false, 'q'),
        ] {
            if castling.has(color, kingside) {
                fen.push(c);
            }
        }
        if fen.len() == before {
            fen.push('-');
        }

        match self.en_passant_target() {
            Some(ep) => {
                let _ = write!(fen, " {ep}");
            }
            None => fen.push_str(" -"),
        }

        let _ = write!(
            fen,
            " {} {}",
            self.halfmove_clock(),
            1 + self.ply_count() / 2
        );
        fen
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}
