//! Successor construction.
//!
//! This is the single place where a move turns one board into the next.
//! Nothing is edited in place: the builder is fed every surviving piece,
//! the moved piece (and castling rook) in their new squares, and the turn
//! passes to the opponent.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::{Board, BoardBuilder};
use crate::game_state::position::Position;
use crate::moves::move_descriptions::Move;

/// Builds the board that follows `mv`. The turn always passes to the
/// opponent of the moved piece.
pub fn apply_move(board: &Board, mv: &Move) -> Result<Board, ChessErrors> {
    let moved_piece = mv.moved_piece().ok_or(ChessErrors::NullMoveExecuted)?;
    let destination = mv.destination().ok_or(ChessErrors::NullMoveExecuted)?;
    let captured = mv.captured_piece();
    let castle_rook = mv.castle_rook();
    let mover = moved_piece.side;

    let mut builder = BoardBuilder::new();

    for piece in board.pieces_for(mover) {
        let is_castle_rook = castle_rook.is_some_and(|(rook, _)| rook == *piece);
        if *piece != moved_piece && !is_castle_rook {
            builder.set_piece(*piece);
        }
    }

    // En passant removes the pawn beside the destination, which is exactly
    // the captured piece value the move carries.
    for piece in board.pieces_for(mover.opposite()) {
        if Some(*piece) != captured {
            builder.set_piece(*piece);
        }
    }

    let mut landed = moved_piece.move_to(destination);
    if let Some(kind) = mv.promotion() {
        landed.kind = kind;
    }
    builder.set_piece(landed);

    if let Some((rook, rook_destination)) = castle_rook {
        builder.set_piece(rook.move_to(rook_destination));
    }

    let en_passant_pawn = match mv {
        Move::PawnDoubleStep { .. } => Some(landed),
        _ => None,
    };

    builder
        .set_en_passant_pawn(en_passant_pawn)
        .set_move_maker(mover.opposite())
        .build()
}

impl Move {
    /// Applies this move to `position`, producing the next position with
    /// both players rebuilt.
    pub fn execute(&self, position: &Position) -> Result<Position, ChessErrors> {
        Position::new(apply_move(position.board(), self)?)
    }
}
