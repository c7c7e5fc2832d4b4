//! Edge case tests for special chess positions and moves.

use super::{coord_move, play};
use crate::board::{Board, Color, FenError, Piece, Square, START_FEN};

fn sq(s: &str) -> Square {
    Square::from_algebraic(s).unwrap()
}

#[test]
fn test_start_position_accessors() {
    let board = Board::new();
    assert_eq!(board.to_fen(), START_FEN);
    assert_eq!(board.side_to_move(), Color::White);
    assert_eq!(board.king_square(Color::White), Some(sq("e1")));
    assert_eq!(board.king_square(Color::Black), Some(sq("e8")));
    assert_eq!(board.piece_count(Color::Black, Piece::Pawn), 8);
    assert_eq!(board.piece_count(Color::White, Piece::Queen), 1);
    assert_eq!(board.castling_rights().as_u8(), 0b1111);
    assert_eq!(board.en_passant_target(), None);
    assert_eq!(board.ply_count(), 0);
    assert_eq!(board.hash(), board.compute_hash());
}

#[test]
fn test_fen_parse_errors() {
    assert!(matches!(
        Board::try_from_fen("8/8/8/8/8/8/8/8 w - - 0"),
        Err(FenError::WrongFieldCount { found: 5 })
    ));
    assert!(matches!(
        Board::try_from_fen("8/8/8/8/8/8/8 w - - 0 1"),
        Err(FenError::InvalidRankCount { found: 7 })
    ));
    assert!(matches!(
        Board::try_from_fen("8/8/8/8/8/8/8/7 w - - 0 1"),
        Err(FenError::InvalidRankLength { rank: 1, files: 7 })
    ));
    assert!(matches!(
        Board::try_from_fen("8/8/8/8/8/8/8/7x w - - 0 1"),
        Err(FenError::InvalidPiece { char: 'x' })
    ));
    assert!(matches!(
        Board::try_from_fen("8/8/8/8/8/8/8/8 x - - 0 1"),
        Err(FenError::InvalidSideToMove { .. })
    ));
    assert!(matches!(
        Board::try_from_fen("8/8/8/8/8/8/8/8 w KX - 0 1"),
        Err(FenError::InvalidCastling { char: 'X' })
    ));
    assert!(matches!(
        Board::try_from_fen("8/8/8/8/8/8/8/8 w - z9 0 1"),
        Err(FenError::InvalidEnPassant { .. })
    ));
    assert!(matches!(
        Board::try_from_fen("8/8/8/8/8/8/8/8 w - - x 1"),
        Err(FenError::InvalidHalfmoveClock { .. })
    ));
    assert!(matches!(
        Board::try_from_fen("8/8/8/8/8/8/8/8 w - - 0 y"),
        Err(FenError::InvalidFullmoveNumber { .. })
    ));
}

#[test]
fn test_uncapturable_en_passant_field_dropped() {
    let board = Board::try_from_fen(
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
    )
    .unwrap();
    assert_eq!(board.en_passant_target(), None);
    assert!(board.to_fen().contains(" - 0 1"));
}

#[test]
fn test_from_str_matches_try_from_fen() {
    let fen = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";
    let parsed: Board = fen.parse().unwrap();
    assert_eq!(parsed.hash(), Board::try_from_fen(fen).unwrap().hash());
    assert_eq!(parsed.to_fen(), fen);
}

#[test]
fn test_full_move_number_follows_plies() {
    let mut board = Board::new();
    play(&mut board, &["e2e4", "e7e5", "g1f3"]);
    assert_eq!(
        board.to_fen(),
        "rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2"
    );
}

#[test]
fn test_build_move_requires_own_piece() {
    let board = Board::new();
    assert!(board.build_move(sq("e4"), sq("e5"), None).is_none());
    assert!(board.build_move(sq("e7"), sq("e5"), None).is_none());
    let mv = board.build_move(sq("b1"), sq("c3"), None).unwrap();
    assert_eq!(mv.piece, Piece::Knight);
    assert_eq!(mv.captured, None);
}

#[test]
fn test_underpromotion_to_knight() {
    let mut board = Board::try_from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
    let mv = coord_move(&board, "a7a8n");
    assert!(board.legal_moves().contains(&mv));
    assert!(board.make_move(mv));
    assert_eq!(board.piece_at(sq("a8")), Some((Color::White, Piece::Knight)));
    assert_eq!(board.piece_count(Color::White, Piece::Knight), 1);
}

#[test]
fn test_king_cannot_capture_defended_piece() {
    // queen on d2 checks and is covered by the bishop on c1
    let mut board = Board::try_from_fen("4k3/8/8/8/8/8/3q4/2b1K3 w - - 0 1").unwrap();
    let takes_queen = coord_move(&board, "e1d2");
    assert!(!board.make_move(takes_queen));

    let legal = board.legal_moves();
    assert_eq!(legal.len(), 1);
    assert_eq!(legal[0].to, sq("f1"));
}

#[test]
fn test_material_evaluation() {
    let board = Board::try_from_fen("4k3/8/8/8/8/8/8/3QK3 w - - 0 1").unwrap();
    assert_eq!(board.material(Color::White) - board.material(Color::Black), 900);
    assert!(board.evaluate() > 900);
    assert_eq!(Board::new().evaluate(), 0);
}

#[test]
fn test_empty_board_is_not_check() {
    let mut board = Board::try_from_fen("8/8/8/8/8/8/8/8 w - - 0 1").unwrap();
    assert!(!board.in_check(Color::White));
    assert!(board.legal_moves().is_empty());
    assert!(board.is_stalemate());
    assert_eq!(board.evaluate(), 0);
}

#[test]
fn test_position_with_more_moves_than_list_capacity() {
    let mut board =
        Board::try_from_fen("QQQ1QQQQ/3Q4/1Q4Q1/Q7/Q1Q4Q/Q4Q1Q/3Q3Q/QQ2QnQ1 w - - 0 1").unwrap();
    let moves = board.generate_moves(Color::White);
    assert!(moves.len() > 256);
    assert!(moves.iter().all(|m| m.color == Color::White && m.piece == Piece::Queen));
    assert!(moves[0].is_capture());

    let legal = board.legal_moves();
    assert_eq!(legal.len(), moves.len());
    assert!(board.evaluate() > 0);
    assert_eq!(board.hash(), board.compute_hash());
}
