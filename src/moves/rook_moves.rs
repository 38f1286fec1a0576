//! Rook movement rule: slides along files and ranks.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Piece;
use crate::move_generation::legal_move_shared::sliding_moves;
use crate::moves::move_descriptions::Move;

pub const ROOK_OFFSETS: [i32; 4] = [-8, -1, 1, 8];

pub fn candidate_moves(board: &Board, piece: Piece) -> Vec<Move> {
    sliding_moves(board, piece, &ROOK_OFFSETS)
}
