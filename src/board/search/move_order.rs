//! Move ordering.
//!
//! Captures come first, most valuable victim first, then everything else in
//! generation order.

use std::cmp::Reverse;

use crate::board::{Board, Move, MoveList};

/// Sort key: 0 for quiet moves, victim value + 1 for captures.
#[inline]
fn capture_rank(mv: &Move) -> i32 {
    mv.victim().map_or(0, |victim| victim.value() + 1)
}

/// Stable sort of `moves` into search order.
pub(crate) fn order_moves(moves: &mut [Move]) {
    moves.sort_by_key(|mv| Reverse(capture_rank(mv)));
}

/// All pseudo-legal moves for the side to move, ordered, with `hint` tried first.
///
/// The hint is only used if it is among the generated moves. It is not
/// removed from its normal place in the list.
pub(crate) fn ordered_moves(board: &Board, hint: Option<Move>) -> Vec<Move> {
    let mut list: MoveList = board.generate_moves(board.side_to_move());
    order_moves(list.as_mut_slice());

    let mut moves = Vec::with_capacity(list.len() + 1);
    if let Some(hint) = hint {
        if list.contains(&hint) {
            moves.push(hint);
        }
    }
    moves.extend_from_slice(list.as_slice());
    moves
}

/// Pseudo-legal captures for the side to move, ordered.
pub(crate) fn ordered_captures(board: &Board) -> MoveList {
    let mut list = board.generate_captures(board.side_to_move());
    order_moves(list.as_mut_slice());
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Piece, Square};

    #[test]
    fn test_captures_sorted_by_victim_value() {
        // white queen on d4 can take a pawn, a knight and a rook
        let board = Board::try_from_fen("4k3/3r4/8/2n5/3Q4/4p3/8/4K3 w - - 0 1").unwrap();
        let moves = ordered_moves(&board, None);
        let victims: Vec<Option<Piece>> = moves.iter().take(4).map(|m| m.captured).collect();
        assert_eq!(
            victims,
            vec![Some(Piece::Rook), Some(Piece::Knight), Some(Piece::Pawn), None]
        );
    }

    #[test]
    fn test_hint_goes_first_and_stays_in_list() {
        let board = Board::new();
        let hint = board
            .build_move(
                Square::from_algebraic("g1").unwrap(),
                Square::from_algebraic("f3").unwrap(),
                None,
            )
            .unwrap();
        let moves = ordered_moves(&board, Some(hint));
        assert_eq!(moves.len(), 21);
        assert_eq!(moves[0], hint);
        assert_eq!(moves.iter().filter(|&&m| m == hint).count(), 2);
    }

    #[test]
    fn test_foreign_hint_ignored() {
        let board = Board::new();
        let bogus = Move::new(
            crate::board::Color::Black,
            Square::from_algebraic("e7").unwrap(),
            Square::from_algebraic("e5").unwrap(),
            Piece::Pawn,
            None,
            None,
        );
        assert_eq!(ordered_moves(&board, Some(bogus)).len(), 20);
    }

    #[test]
    fn test_en_passant_counts_as_pawn_capture() {
        let board = Board::try_from_fen("8/8/8/3pP3/8/8/8/8 b - e4 0 1").unwrap();
        let captures = ordered_captures(&board);
        assert_eq!(captures.len(), 1);
        assert!(captures[0].is_en_passant());
    }
}
