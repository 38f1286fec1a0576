//! Castling rule.
//!
//! Castling needs attack information about the opponent, so it is computed on
//! top of both sides' pseudo-legal moves rather than by the king's own
//! movement rule.

use crate::game_state::board::Board;
use crate::game_state::board_utils::square_at;
use crate::game_state::chess_rules::{KINGSIDE_ROOK_FILE, KING_FILE, QUEENSIDE_ROOK_FILE};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::attacked_squares;
use crate::moves::move_descriptions::Move;

/// Castles available to `side`. `in_check` is the side's current check state.
pub fn castle_moves(board: &Board, side: Side, in_check: bool) -> Vec<Move> {
    let mut out = Vec::new();
    let home = side.home_rank();

    let Some(king) = board.king_of(side) else {
        return out;
    };
    if king.has_moved || in_check || king.square != square_at(KING_FILE, home) {
        return out;
    }

    let attacked = attacked_squares(board, side.opposite());
    let is_safe = |files: &[u8]| files.iter().all(|&f| !attacked[square_at(f, home) as usize]);
    let is_empty = |files: &[u8]| files.iter().all(|&f| !board.is_occupied(square_at(f, home)));

    // Kingside: f and g empty and unattacked.
    if let Some(rook) = unmoved_rook(board, side, square_at(KINGSIDE_ROOK_FILE, home)) {
        if is_empty(&[5, 6]) && is_safe(&[5, 6]) {
            out.push(Move::KingsideCastle {
                king,
                destination: square_at(6, home),
                rook,
                rook_destination: square_at(5, home),
            });
        }
    }

    // Queenside: b, c and d empty; only d and c are crossed by the king.
    if let Some(rook) = unmoved_rook(board, side, square_at(QUEENSIDE_ROOK_FILE, home)) {
        if is_empty(&[1, 2, 3]) && is_safe(&[3, 2]) {
            out.push(Move::QueensideCastle {
                king,
                destination: square_at(2, home),
                rook,
                rook_destination: square_at(3, home),
            });
        }
    }

    out
}

fn unmoved_rook(board: &Board, side: Side, square: Square) -> Option<Piece> {
    board
        .piece_at(square)
        .filter(|piece| piece.kind == PieceKind::Rook && piece.side == side && !piece.has_moved)
}
