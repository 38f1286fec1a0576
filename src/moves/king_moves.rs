//! King movement rule.
//!
//! Single steps in all eight directions. Castling is not generated here: it
//! depends on attack information and lives in the legality layer.

use crate::game_state::board::Board;
use crate::game_state::board_utils::step;
use crate::game_state::chess_types::Piece;
use crate::move_generation::legal_move_shared::standard_move_to;
use crate::moves::move_descriptions::Move;

pub const KING_OFFSETS: [i32; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

pub fn candidate_moves(board: &Board, piece: Piece) -> Vec<Move> {
    KING_OFFSETS
        .iter()
        .filter_map(|&offset| step(piece.square, offset))
        .filter_map(|destination| standard_move_to(board, piece, destination))
        .collect()
}
