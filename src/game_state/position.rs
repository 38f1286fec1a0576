//! The value a front-end holds between turns.
//!
//! A `Position` pairs a `Board` with both sides' players, all computed when
//! the position is built. Applying a move never edits a position; it returns
//! the next one.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;
use crate::player::move_transition::MoveTransition;
use crate::player::player::Player;
use crate::utils::render_game_state::render_as_text;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    board: Board,
    white_player: Player,
    black_player: Player,
}

impl Position {
    pub fn new(board: Board) -> Result<Self, ChessErrors> {
        let white_player = Player::new(&board, Side::White)?;
        let black_player = Player::new(&board, Side::Black)?;
        Ok(Self {
            board,
            white_player,
            black_player,
        })
    }

    pub fn standard() -> Result<Self, ChessErrors> {
        Self::new(Board::standard()?)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Side {
        self.board.side_to_move()
    }

    pub fn player(&self, side: Side) -> &Player {
        match side {
            Side::White => &self.white_player,
            Side::Black => &self.black_player,
        }
    }

    #[inline]
    pub fn current_player(&self) -> &Player {
        self.player(self.side_to_move())
    }

    #[inline]
    pub fn legal_moves_for(&self, side: Side) -> &[Move] {
        self.player(side).legal_moves()
    }

    #[inline]
    pub fn tile_at(&self, square: i32) -> Result<Option<Piece>, ChessErrors> {
        self.board.tile_at(square)
    }

    /// Hands `mv` to the player whose turn it is.
    pub fn make_move(&self, mv: &Move) -> Result<MoveTransition, ChessErrors> {
        self.current_player().make_move(&self.board, mv)
    }

    pub fn is_in_check(&self) -> bool {
        self.current_player().is_in_check()
    }

    pub fn is_checkmate(&self) -> bool {
        self.current_player().is_in_checkmate()
    }

    pub fn is_stalemate(&self) -> bool {
        self.current_player().is_in_stalemate()
    }

    pub fn render_as_text(&self) -> String {
        render_as_text(&self.board)
    }
}

/// Standard starting position, White to move.
pub fn create_initial_position() -> Position {
    Position::standard().expect("standard starting position should always build")
}
