//! Board geometry lookup tables.
//!
//! Squares are raw indices, so an offset such as `+1` from h1 lands on a2
//! instead of falling off the board. Movement rules consult these tables to
//! reject such wrap-around moves before touching the board.

use crate::game_state::chess_types::Square;

pub const NUM_SQUARES: i32 = 64;

pub const FIRST_COLUMN: [bool; 64] = init_column(0);
pub const SECOND_COLUMN: [bool; 64] = init_column(1);
pub const SEVENTH_COLUMN: [bool; 64] = init_column(6);
pub const EIGHTH_COLUMN: [bool; 64] = init_column(7);

const fn init_column(file: usize) -> [bool; 64] {
    let mut table = [false; 64];
    let mut sq = file;

    while sq < 64 {
        table[sq] = true;
        sq += 8;
    }

    table
}

#[inline]
pub const fn is_valid_square(coordinate: i32) -> bool {
    coordinate >= 0 && coordinate < NUM_SQUARES
}

#[inline]
pub const fn file_of(square: Square) -> u8 {
    square % 8
}

#[inline]
pub const fn rank_of(square: Square) -> u8 {
    square / 8
}

#[inline]
pub const fn square_at(file: u8, rank: u8) -> Square {
    rank * 8 + file
}

/// True if stepping by `offset` from `square` would leave the board sideways
/// (file A to the left or file H to the right).
///
/// Covers single-file steps only: king, pawn and slider offsets
/// `{-9, -7, -1, 1, 7, 9}`. Rank-only offsets never wrap.
#[inline]
pub const fn is_edge_wrap(square: Square, offset: i32) -> bool {
    let sq = square as usize;
    (FIRST_COLUMN[sq] && (offset == -9 || offset == -1 || offset == 7))
        || (EIGHTH_COLUMN[sq] && (offset == -7 || offset == 1 || offset == 9))
}

/// Destination of `square + offset`, or `None` if it wraps or leaves the board.
#[inline]
pub fn step(square: Square, offset: i32) -> Option<Square> {
    if is_edge_wrap(square, offset) {
        return None;
    }
    let destination = square as i32 + offset;
    if is_valid_square(destination) {
        Some(destination as Square)
    } else {
        None
    }
}
