use std::thread;

use crate::chess_errors::ChessErrors;
use crate::game_state::position::Position;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }

    fn record_leaf(&mut self, mv: &Move, after: &Position) {
        self.nodes += 1;

        if mv.is_capture() {
            self.captures += 1;
        }
        if mv.is_en_passant() {
            self.en_passant += 1;
        }
        if mv.is_castle() {
            self.castles += 1;
        }
        if mv.promotion().is_some() {
            self.promotions += 1;
        }
        if after.is_in_check() {
            self.checks += 1;
        }
        if after.is_checkmate() {
            self.checkmates += 1;
        }
    }
}

/// Counts the legal-move tree below `position` to `depth` plies.
pub fn perft(position: &Position, depth: u8) -> Result<PerftCounts, ChessErrors> {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return Ok(counts);
    }

    perft_recurse(position, depth, &mut counts)?;
    Ok(counts)
}

/// Same counts as `perft`, with one worker thread per root move.
pub fn perft_multi_threaded(position: &Position, depth: u8) -> Result<PerftCounts, ChessErrors> {
    if depth <= 1 {
        return perft(position, depth);
    }

    let mut children = Vec::new();
    for mv in position.current_player().legal_moves() {
        children.push(mv.execute(position)?);
    }

    let handles: Vec<_> = children
        .into_iter()
        .map(|child| thread::spawn(move || perft(&child, depth - 1)))
        .collect();

    let mut total = PerftCounts::default();
    for handle in handles {
        // Worker panics are re-raised on this thread.
        let local = handle.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic))?;
        total.merge(local);
    }

    Ok(total)
}

fn perft_recurse(
    position: &Position,
    depth: u8,
    counts: &mut PerftCounts,
) -> Result<(), ChessErrors> {
    for mv in position.current_player().legal_moves() {
        let next = mv.execute(position)?;
        if depth == 1 {
            counts.record_leaf(mv, &next);
        } else {
            perft_recurse(&next, depth - 1, counts)?;
        }
    }

    Ok(())
}
