//! Crate root module declarations for the Tile Chess rules engine.
//!
//! This file exposes all top-level subsystems (board state, piece movement
//! rules, legality checking, players, and utility helpers) so the command-line
//! front-end, benchmarks and external collaborators can import stable module
//! paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod board_utils;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_session;
    pub mod position;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_castling;
    pub mod perft;
}

pub mod player {
    pub mod move_factory;
    pub mod move_transition;
    pub mod player;
}

pub mod utils {
    pub mod algebraic;
    pub mod long_algebraic;
    pub mod random_playout;
    pub mod render_game_state;
    pub mod text_layout;
}

pub use game_state::position::{create_initial_position, Position};
pub use player::move_factory::make_move;
