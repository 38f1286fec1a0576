//! Queen movement rule: rook and bishop rays combined.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Piece;
use crate::move_generation::legal_move_shared::sliding_moves;
use crate::moves::move_descriptions::Move;

pub const QUEEN_OFFSETS: [i32; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

pub fn candidate_moves(board: &Board, piece: Piece) -> Vec<Move> {
    sliding_moves(board, piece, &QUEEN_OFFSETS)
}
