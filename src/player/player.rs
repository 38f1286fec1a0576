//! One side's view of a board.
//!
//! A `Player` is rebuilt with every position and never mutated. It holds the
//! side's legal moves and check state, and is the gate through which a move
//! becomes a new position.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::move_descriptions::Move;
use crate::player::move_transition::MoveTransition;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    side: Side,
    king: Piece,
    legal_moves: Vec<Move>,
    in_check: bool,
}

impl Player {
    pub fn new(board: &Board, side: Side) -> Result<Self, ChessErrors> {
        let king = board.king_of(side).ok_or(ChessErrors::MissingKing(side))?;
        Ok(Self {
            side,
            king,
            legal_moves: legal_moves(board, side)?,
            in_check: is_king_in_check(board, side),
        })
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    #[inline]
    pub fn king(&self) -> Piece {
        self.king
    }

    #[inline]
    pub fn legal_moves(&self) -> &[Move] {
        &self.legal_moves
    }

    pub fn is_move_legal(&self, mv: &Move) -> bool {
        self.legal_moves.contains(mv)
    }

    #[inline]
    pub fn is_in_check(&self) -> bool {
        self.in_check
    }

    #[inline]
    pub fn has_escape_moves(&self) -> bool {
        !self.legal_moves.is_empty()
    }

    pub fn is_in_checkmate(&self) -> bool {
        self.in_check && !self.has_escape_moves()
    }

    pub fn is_in_stalemate(&self) -> bool {
        !self.in_check && !self.has_escape_moves()
    }

    /// Applies `mv` to `board` if it is one of this player's legal moves.
    pub fn make_move(&self, board: &Board, mv: &Move) -> Result<MoveTransition, ChessErrors> {
        if !self.is_move_legal(mv) {
            return Ok(MoveTransition::IllegalMove);
        }

        let next = apply_move(board, mv)?;
        if is_king_in_check(&next, self.side) {
            return Ok(MoveTransition::LeavesPlayerInCheck);
        }

        Ok(MoveTransition::Done(Position::new(next)?))
    }
}
