//! A game in progress: the current position plus every move applied so far.

use std::fmt;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;
use crate::game_state::position::{create_initial_position, Position};
use crate::moves::move_descriptions::Move;
use crate::player::move_factory::create_move;
use crate::player::move_transition::MoveTransition;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// The side to move is in check but has a way out.
    Check,
    /// Holds the winning side.
    Checkmate(Side),
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate(_) | GameStatus::Stalemate)
    }

    pub fn of(position: &Position) -> Self {
        if position.is_checkmate() {
            GameStatus::Checkmate(position.side_to_move().opposite())
        } else if position.is_stalemate() {
            GameStatus::Stalemate
        } else if position.is_in_check() {
            GameStatus::Check
        } else {
            GameStatus::InProgress
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Check => write!(f, "check"),
            GameStatus::Checkmate(winner) => write!(f, "checkmate, {winner} wins"),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameSession {
    position: Position,
    history: Vec<Move>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(create_initial_position())
    }
}

impl GameSession {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            history: Vec::new(),
        }
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn status(&self) -> GameStatus {
        GameStatus::of(&self.position)
    }

    /// Plays the legal move matching the request. On failure the position is
    /// left as it was.
    ///
    /// A request matching no legal move is `IllegalMoveRequest`. Any other
    /// error from playing the move is returned unchanged.
    pub fn request_move(
        &mut self,
        origin: Square,
        destination: Square,
        promotion: Option<PieceKind>,
    ) -> Result<&Position, ChessErrors> {
        let mv = create_move(&self.position, origin, destination, promotion);
        if mv.is_null() {
            return Err(ChessErrors::IllegalMoveRequest {
                origin,
                destination,
            });
        }
        self.play(mv)
    }

    /// Plays a move already taken from the current legal set.
    pub fn play(&mut self, mv: Move) -> Result<&Position, ChessErrors> {
        if mv.is_null() {
            return Err(ChessErrors::NullMoveExecuted);
        }

        match self.position.make_move(&mv)? {
            MoveTransition::Done(next) => {
                self.position = next;
                self.history.push(mv);
                Ok(&self.position)
            }
            _ => {
                let (Some(origin), Some(destination)) = (mv.origin(), mv.destination()) else {
                    return Err(ChessErrors::NullMoveExecuted);
                };
                Err(ChessErrors::IllegalMoveRequest {
                    origin,
                    destination,
                })
            }
        }
    }

    /// One `info string` line describing the last move and the new status.
    pub fn info_line(&self) -> String {
        let last = self
            .history
            .last()
            .map_or_else(|| "none".to_owned(), |mv| mv.to_string());
        format!(
            "info string ply {} move {} status {} to_move {}",
            self.history.len(),
            last,
            self.status(),
            self.position.side_to_move()
        )
    }
}
