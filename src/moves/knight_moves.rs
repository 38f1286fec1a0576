//! Knight movement rule.

use crate::game_state::board::Board;
use crate::game_state::board_utils::{
    is_valid_square, EIGHTH_COLUMN, FIRST_COLUMN, SECOND_COLUMN, SEVENTH_COLUMN,
};
use crate::game_state::chess_types::{Piece, Square};
use crate::move_generation::legal_move_shared::standard_move_to;
use crate::moves::move_descriptions::Move;

pub const KNIGHT_OFFSETS: [i32; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];

pub fn candidate_moves(board: &Board, piece: Piece) -> Vec<Move> {
    let mut out = Vec::with_capacity(8);

    for offset in KNIGHT_OFFSETS {
        if is_column_exclusion(piece.square, offset) {
            continue;
        }
        let destination = piece.square as i32 + offset;
        if !is_valid_square(destination) {
            continue;
        }
        if let Some(mv) = standard_move_to(board, piece, destination as Square) {
            out.push(mv);
        }
    }

    out
}

/// Offsets that would wrap across the board edge from the given file.
const fn is_column_exclusion(square: Square, offset: i32) -> bool {
    let sq = square as usize;
    (FIRST_COLUMN[sq] && (offset == -17 || offset == -10 || offset == 6 || offset == 15))
        || (SECOND_COLUMN[sq] && (offset == -10 || offset == 6))
        || (SEVENTH_COLUMN[sq] && (offset == -6 || offset == 10))
        || (EIGHTH_COLUMN[sq] && (offset == -15 || offset == -6 || offset == 10 || offset == 17))
}
