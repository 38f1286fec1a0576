//! Seeded random self-play.
//!
//! Picks uniformly among the legal moves of the side to move until the game
//! ends or the ply cap is reached. Used by the command-line front-end and as a
//! broad legality check in tests.

use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, SeedableRng};

use crate::chess_errors::ChessErrors;
use crate::game_state::game_session::{GameSession, GameStatus};
use crate::game_state::position::Position;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone)]
pub struct PlayoutReport {
    pub moves: Vec<Move>,
    pub final_position: Position,
    pub status: GameStatus,
    pub info_lines: Vec<String>,
}

pub fn random_playout(
    start: &Position,
    max_plies: usize,
    seed: u64,
) -> Result<PlayoutReport, ChessErrors> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut session = GameSession::new(start.clone());
    let mut info_lines = vec![format!(
        "info string random_playout seed {seed} max_plies {max_plies}"
    )];

    while session.history().len() < max_plies && !session.status().is_over() {
        let Some(mv) = session
            .position()
            .current_player()
            .legal_moves()
            .choose(&mut rng)
            .copied()
        else {
            break;
        };
        session.play(mv)?;
        info_lines.push(session.info_line());
    }

    let status = session.status();
    info_lines.push(format!(
        "info string random_playout finished plies {} status {status}",
        session.history().len()
    ));

    Ok(PlayoutReport {
        moves: session.history().to_vec(),
        final_position: session.position().clone(),
        status,
        info_lines,
    })
}
