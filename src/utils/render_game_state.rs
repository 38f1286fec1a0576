//! Plain-text board renderer.
//!
//! Assumes square indexing where `0 == a1`, `7 == h1`, and `63 == h8`. Rank 8
//! is printed first so White sits at the bottom.

use crate::game_state::board::Board;
use crate::game_state::board_utils::square_at;

const EMPTY_GLYPH: char = '-';

/// Eight lines of eight cells, each cell a space followed by the glyph.
pub fn render_as_text(board: &Board) -> String {
    let mut out = String::with_capacity(8 * 17);

    for rank in (0..8u8).rev() {
        push_rank(&mut out, board, rank);
        if rank > 0 {
            out.push('\n');
        }
    }

    out
}

/// `render_as_text` framed by file letters and rank numbers.
pub fn render_with_coordinates(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("   a b c d e f g h\n");

    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));
        out.push(' ');
        push_rank(&mut out, board, rank);
        out.push(' ');
        out.push(' ');
        out.push(char::from(b'1' + rank));
        out.push('\n');
    }

    out.push_str("   a b c d e f g h");

    out
}

fn push_rank(out: &mut String, board: &Board, rank: u8) {
    for file in 0..8u8 {
        out.push(' ');
        out.push(
            board
                .piece_at(square_at(file, rank))
                .map_or(EMPTY_GLYPH, |piece| piece.glyph()),
        );
    }
}
