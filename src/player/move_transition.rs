//! Outcome of asking a player to make a move.

use std::fmt;

use crate::game_state::position::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveTransition {
    /// The move was legal; holds the successor position.
    Done(Position),
    /// The move is not among the player's legal moves. Nothing changed.
    IllegalMove,
    /// The move was found legal but its result still has the mover in check.
    LeavesPlayerInCheck,
}

impl MoveTransition {
    pub fn into_position(self) -> Option<Position> {
        match self {
            MoveTransition::Done(position) => Some(position),
            _ => None,
        }
    }
}

impl fmt::Display for MoveTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveTransition::Done(_) => write!(f, "done"),
            MoveTransition::IllegalMove => write!(f, "illegal move"),
            MoveTransition::LeavesPlayerInCheck => write!(f, "leaves player in check"),
        }
    }
}
