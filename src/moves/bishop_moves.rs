//! Bishop movement rule: slides along diagonals.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Piece;
use crate::move_generation::legal_move_shared::sliding_moves;
use crate::moves::move_descriptions::Move;

pub const BISHOP_OFFSETS: [i32; 4] = [-9, -7, 7, 9];

pub fn candidate_moves(board: &Board, piece: Piece) -> Vec<Move> {
    sliding_moves(board, piece, &BISHOP_OFFSETS)
}
