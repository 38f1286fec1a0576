//! Full legal move generation pipeline.
//!
//! Dispatches each piece to its movement rule for the pseudo-legal set, adds
//! castles, then simulates every candidate and drops the ones that leave the
//! mover's own king attacked.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_castling::castle_moves;
use crate::moves::move_descriptions::Move;
use crate::moves::{bishop_moves, king_moves, knight_moves, pawn_moves, queen_moves, rook_moves};

/// Candidate moves of a single piece, ignoring checks and castling.
pub fn candidate_moves(board: &Board, piece: Piece) -> Vec<Move> {
    match piece.kind {
        PieceKind::Pawn => pawn_moves::candidate_moves(board, piece),
        PieceKind::Knight => knight_moves::candidate_moves(board, piece),
        PieceKind::Bishop => bishop_moves::candidate_moves(board, piece),
        PieceKind::Rook => rook_moves::candidate_moves(board, piece),
        PieceKind::Queen => queen_moves::candidate_moves(board, piece),
        PieceKind::King => king_moves::candidate_moves(board, piece),
    }
}

pub fn pseudo_legal_moves(board: &Board, side: Side) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    for piece in board.pieces_for(side) {
        out.extend(candidate_moves(board, *piece));
    }
    out
}

/// Legal moves of `side`, castles included.
pub fn legal_moves(board: &Board, side: Side) -> Result<Vec<Move>, ChessErrors> {
    let in_check = is_king_in_check(board, side);

    let mut candidates = board.standard_moves_for(side).to_vec();
    candidates.extend(castle_moves(board, side, in_check));

    let mut legal = Vec::with_capacity(candidates.len());
    for mv in candidates {
        // A king is never taken; the position before such a move is already lost.
        if mv.captured_piece().is_some_and(|piece| piece.kind == PieceKind::King) {
            continue;
        }

        let next = apply_move(board, &mv)?;

        // Illegal if own king is in check after move.
        if is_king_in_check(&next, side) {
            continue;
        }

        legal.push(mv);
    }

    Ok(legal)
}

#[cfg(test)]
mod tests {
    use super::{legal_moves, pseudo_legal_moves};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;
    use crate::utils::text_layout::parse_text_layout;

    #[test]
    fn starting_board_has_twenty_moves_per_side() {
        let board = Board::standard().expect("standard board should build");
        assert_eq!(pseudo_legal_moves(&board, Side::White).len(), 20);
        assert_eq!(
            legal_moves(&board, Side::White)
                .expect("legal move generation should succeed")
                .len(),
            20
        );
        assert_eq!(
            legal_moves(&board, Side::Black)
                .expect("legal move generation should succeed")
                .len(),
            20
        );
    }

    #[test]
    fn pinned_piece_may_only_move_along_the_pin() {
        let position = parse_text_layout(
            "- - - - r - - k
             - - - - - - - -
             - - - - - - - -
             - - - - - - - -
             - - - - - - - -
             - - - - R - - -
             - - - - - - - -
             - - - - K - - -",
            Side::White,
        )
        .expect("layout should parse");
        let board = position.board();
        let legal = legal_moves(board, Side::White).expect("legal move generation should succeed");

        let rook_destinations: Vec<Square> = legal
            .iter()
            .filter(|mv| mv.origin() == Some(20))
            .filter_map(|mv| mv.destination())
            .collect();
        assert!(rook_destinations.iter().all(|sq| sq % 8 == 4));
        assert!(rook_destinations.contains(&60));
        assert!(rook_destinations.contains(&12));
    }

    #[test]
    fn king_cannot_step_onto_attacked_squares() {
        let position = parse_text_layout(
            "- - - - k - - -
             - - - - - - - -
             - - - - - - - -
             - - - - - - - -
             - - - - - - - -
             - - - - - - - -
             - - - r - - - -
             - - - - K - - -",
            Side::White,
        )
        .expect("layout should parse");
        let legal = legal_moves(position.board(), Side::White)
            .expect("legal move generation should succeed");

        // d1, e2 and f2 are covered by the d2 rook.
        let mut destinations: Vec<Square> =
            legal.iter().filter_map(|mv| mv.destination()).collect();
        destinations.sort_unstable();
        assert_eq!(destinations, vec![5, 11]);
    }

    #[test]
    fn moves_that_take_the_king_are_never_legal() {
        let position = parse_text_layout(
            "- - - - k - - -
             - - - - - - - -
             - - - - - - - -
             - - - - - - - -
             - - - - - - - -
             - - - - - - - -
             - - - - - - - -
             - - - - R - K -",
            Side::White,
        )
        .expect("layout should parse");
        let board = position.board();
        assert!(board
            .standard_moves_for(Side::White)
            .iter()
            .any(|mv| mv.destination() == Some(60)));

        let legal = legal_moves(board, Side::White).expect("legal move generation should succeed");
        assert!(legal.iter().all(|mv| mv.destination() != Some(60)));
    }
}
