//! Text layout parser.
//!
//! Reads the format written by `render_as_text`: eight non-empty lines, rank 8
//! first, eight whitespace-separated glyphs per line. Uppercase letters are
//! White, lowercase Black, `-` is an empty square.
//!
//! The layout carries no history, so a piece counts as unmoved exactly when it
//! stands on an original square for its kind and side. No en-passant pawn is
//! ever set.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::BoardBuilder;
use crate::game_state::board_utils::square_at;
use crate::game_state::chess_rules::{is_original_square, STARTING_LAYOUT};
use crate::game_state::chess_types::*;
use crate::game_state::position::Position;

pub fn parse_text_layout(text: &str, side_to_move: Side) -> Result<Position, ChessErrors> {
    let rows: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if rows.len() != 8 {
        return Err(ChessErrors::InvalidLayoutForm(format!(
            "expected 8 rows, found {}",
            rows.len()
        )));
    }

    let mut builder = BoardBuilder::new();
    builder.set_move_maker(side_to_move);

    for (row_index, row) in rows.iter().enumerate() {
        let rank = 7 - row_index as u8;
        let tokens: Vec<&str> = row.split_whitespace().collect();
        if tokens.len() != 8 {
            return Err(ChessErrors::InvalidLayoutForm(format!(
                "rank {} has {} squares",
                rank + 1,
                tokens.len()
            )));
        }

        for (file, token) in tokens.iter().enumerate() {
            if let Some(piece) = parse_glyph(token, square_at(file as u8, rank))? {
                builder.set_piece(piece);
            }
        }
    }

    Position::new(builder.build()?)
}

/// The standard starting position, read through the same parser.
pub fn starting_position() -> Result<Position, ChessErrors> {
    parse_text_layout(STARTING_LAYOUT, Side::White)
}

fn parse_glyph(token: &str, square: Square) -> Result<Option<Piece>, ChessErrors> {
    let mut chars = token.chars();
    let (Some(glyph), None) = (chars.next(), chars.next()) else {
        return Err(ChessErrors::InvalidLayoutToken(token.to_owned()));
    };
    if glyph == '-' {
        return Ok(None);
    }

    let kind = PieceKind::from_letter(glyph)
        .ok_or_else(|| ChessErrors::InvalidLayoutToken(token.to_owned()))?;
    let side = if glyph.is_ascii_uppercase() {
        Side::White
    } else {
        Side::Black
    };

    let has_moved = !is_original_square(kind, side, square);
    Ok(Some(Piece::new(kind, side, square).with_moved(has_moved)))
}
