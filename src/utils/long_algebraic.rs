//! Long algebraic move strings such as `e2e4` or `e7e8q`.
//!
//! Parsing only yields coordinates and an optional promotion kind. Turning
//! them into a move is left to the move factory, which knows the legal set.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

/// Castles are written as the king's two squares (`e1g1`).
pub fn move_to_long_algebraic(mv: &Move) -> Result<String, ChessErrors> {
    let (Some(origin), Some(destination)) = (mv.origin(), mv.destination()) else {
        return Err(ChessErrors::NullMoveExecuted);
    };

    let mut out = String::with_capacity(5);
    out.push_str(&square_to_algebraic(origin)?);
    out.push_str(&square_to_algebraic(destination)?);
    if let Some(kind) = mv.promotion() {
        out.push(promotion_to_char(kind)?);
    }

    Ok(out)
}

pub fn parse_long_algebraic(
    text: &str,
) -> Result<(Square, Square, Option<PieceKind>), ChessErrors> {
    let text = text.trim();
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(ChessErrors::InvalidAlgebraicString(text.to_owned()));
    }

    let origin = algebraic_to_square(&text[0..2])?;
    let destination = algebraic_to_square(&text[2..4])?;
    let promotion = match text[4..].chars().next() {
        Some(ch) => Some(
            char_to_promotion(ch)
                .ok_or_else(|| ChessErrors::InvalidAlgebraicString(text.to_owned()))?,
        ),
        None => None,
    };

    Ok((origin, destination, promotion))
}

fn promotion_to_char(kind: PieceKind) -> Result<char, ChessErrors> {
    match kind {
        PieceKind::Knight => Ok('n'),
        PieceKind::Bishop => Ok('b'),
        PieceKind::Rook => Ok('r'),
        PieceKind::Queen => Ok('q'),
        _ => Err(ChessErrors::InvalidAlgebraicString(format!("{kind:?}"))),
    }
}

fn char_to_promotion(ch: char) -> Option<PieceKind> {
    match ch.to_ascii_lowercase() {
        'n' => Some(PieceKind::Knight),
        'b' => Some(PieceKind::Bishop),
        'r' => Some(PieceKind::Rook),
        'q' => Some(PieceKind::Queen),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{move_to_long_algebraic, parse_long_algebraic};
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_types::*;
    use crate::moves::move_descriptions::Move;

    #[test]
    fn parses_plain_and_promotion_moves() {
        assert_eq!(
            parse_long_algebraic("e2e4").expect("e2e4 should parse"),
            (12, 28, None)
        );
        assert_eq!(
            parse_long_algebraic(" a7a8N ").expect("a7a8N should parse"),
            (48, 56, Some(PieceKind::Knight))
        );
    }

    #[test]
    fn rejects_bad_promotion_letters_and_lengths() {
        assert!(matches!(
            parse_long_algebraic("a7a8k"),
            Err(ChessErrors::InvalidAlgebraicString(_))
        ));
        assert!(parse_long_algebraic("e2").is_err());
        assert!(parse_long_algebraic("e2e9").is_err());
    }

    #[test]
    fn castles_are_written_as_king_squares() {
        let king = Piece::new(PieceKind::King, Side::Black, 60);
        let rook = Piece::new(PieceKind::Rook, Side::Black, 56);
        let castle = Move::QueensideCastle {
            king,
            destination: 58,
            rook,
            rook_destination: 59,
        };

        assert_eq!(
            move_to_long_algebraic(&castle).expect("castle should convert"),
            "e8c8"
        );
        assert_eq!(
            move_to_long_algebraic(&Move::Null),
            Err(ChessErrors::NullMoveExecuted)
        );
    }
}
