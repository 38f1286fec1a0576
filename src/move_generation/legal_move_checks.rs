//! Attack and check detection.
//!
//! A square is attacked by a side if one of that side's pseudo-legal moves
//! lands on it, or if one of its pawns covers it diagonally. The pawn term
//! matters for empty squares (castling transit squares): a diagonal pawn
//! capture is only generated when something stands on the target.

use crate::game_state::board::Board;
use crate::game_state::board_utils::step;
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;

/// Squares covered by `attacker`, indexed by square.
pub fn attacked_squares(board: &Board, attacker: Side) -> [bool; 64] {
    let mut attacked = [false; 64];

    for mv in board.standard_moves_for(attacker) {
        if is_attacking_move(mv) {
            if let Some(destination) = mv.destination() {
                attacked[destination as usize] = true;
            }
        }
    }

    for pawn in board
        .pieces_for(attacker)
        .iter()
        .filter(|piece| piece.kind == PieceKind::Pawn)
    {
        for square in pawn_attack_squares(*pawn) {
            attacked[square as usize] = true;
        }
    }

    attacked
}

#[inline]
pub fn is_square_attacked(board: &Board, square: Square, attacker: Side) -> bool {
    attacked_squares(board, attacker)
        .get(square as usize)
        .copied()
        .unwrap_or(false)
}

/// True if `side`'s king stands on a square attacked by the opponent.
pub fn is_king_in_check(board: &Board, side: Side) -> bool {
    let Some(king) = board.king_of(side) else {
        return false;
    };
    !attackers_to_square(board, king.square, side.opposite()).is_empty()
}

/// Pieces of `attacker` whose pseudo-legal moves land on `square`.
pub fn attackers_to_square(board: &Board, square: Square, attacker: Side) -> Vec<Piece> {
    let mut attackers: Vec<Piece> = board
        .standard_moves_for(attacker)
        .iter()
        .filter(|mv| is_attacking_move(mv) && mv.destination() == Some(square))
        .filter_map(|mv| mv.moved_piece())
        .collect();

    for pawn in board
        .pieces_for(attacker)
        .iter()
        .filter(|piece| piece.kind == PieceKind::Pawn)
    {
        if pawn_attack_squares(*pawn).contains(&square) && !attackers.contains(pawn) {
            attackers.push(*pawn);
        }
    }

    attackers.dedup();
    attackers
}

/// Diagonal squares a pawn attacks, whether or not anything stands there.
pub fn pawn_attack_squares(pawn: Piece) -> Vec<Square> {
    let direction = pawn.side.direction();
    [7 * direction, 9 * direction]
        .iter()
        .filter_map(|&offset| step(pawn.square, offset))
        .collect()
}

/// Pawn pushes move onto squares without attacking them.
#[inline]
fn is_attacking_move(mv: &Move) -> bool {
    match mv {
        Move::PawnPush { .. } | Move::PawnDoubleStep { .. } => false,
        Move::PawnPromotion { captured, .. } => captured.is_some(),
        _ => true,
    }
}
