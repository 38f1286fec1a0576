use crate::game_state::board::Board;
use crate::game_state::board_utils::step;
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;

/// Quiet move or capture of `piece` onto `destination`, or `None` if a piece
/// of the same side stands there.
#[inline]
pub fn standard_move_to(board: &Board, piece: Piece, destination: Square) -> Option<Move> {
    match board.piece_at(destination) {
        None => Some(Move::Quiet { piece, destination }),
        Some(occupant) if occupant.side != piece.side => Some(Move::Capture {
            piece,
            destination,
            captured: occupant,
        }),
        Some(_) => None,
    }
}

/// Moves of a sliding piece along `offsets`, one square at a time, stopping
/// at the first occupied square (which is captured if it holds an enemy).
///
/// The edge-wrap check runs on every step, not only at the origin, because a
/// ray can cross several ranks before reaching the edge.
pub fn sliding_moves(board: &Board, piece: Piece, offsets: &[i32]) -> Vec<Move> {
    let mut out = Vec::new();

    for &offset in offsets {
        let mut current = piece.square;
        while let Some(destination) = step(current, offset) {
            match board.piece_at(destination) {
                None => out.push(Move::Quiet { piece, destination }),
                Some(occupant) => {
                    if occupant.side != piece.side {
                        out.push(Move::Capture {
                            piece,
                            destination,
                            captured: occupant,
                        });
                    }
                    break;
                }
            }
            current = destination;
        }
    }

    out
}
