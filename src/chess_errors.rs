//! Errors used throughout the rules engine.
//!
//! `ChessErrors` is the single error type returned by board construction,
//! move application, coordinate conversion and layout parsing. Variants carry
//! the offending square or text so front-ends can print precise diagnostics.
//!
//! Usage guidelines:
//! - `MissingKing`, `TooManyKings` and `NullMoveExecuted` signal a bug in the
//!   caller (a malformed board or applying the sentinel move). They are not
//!   meant to be recovered from during normal play.
//! - `IllegalMoveRequest` is the only game-level failure. The position is left
//!   untouched and the caller may simply pick another move.
//! - Parsing variants (`InvalidAlgebraicString`, `InvalidLayoutToken`,
//!   `InvalidLayoutForm`) are suitable for showing to end users.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{Side, Square};

/// Unified error type for the rules engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// A square index outside `0..64` reached a board accessor.
    ///
    /// Payload: the raw index as given by the caller.
    InvalidCoordinate(i32),

    /// A board was built without a king for the given side.
    MissingKing(Side),

    /// A board was built with more than one king for the given side.
    TooManyKings(Side),

    /// The `Null` sentinel move was applied.
    NullMoveExecuted,

    /// The requested coordinates do not correspond to any legal move.
    IllegalMoveRequest { origin: Square, destination: Square },

    /// A coordinate or move string could not be parsed.
    ///
    /// Payload: the original text.
    InvalidAlgebraicString(String),

    /// A glyph in a text layout was not a known piece letter or `-`.
    InvalidLayoutToken(String),

    /// A text layout did not have 8 rows of 8 glyphs.
    InvalidLayoutForm(String),
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::InvalidCoordinate(index) => {
                write!(f, "square index {index} is outside the board")
            }
            ChessErrors::MissingKing(side) => write!(f, "no {side} king on the board"),
            ChessErrors::TooManyKings(side) => write!(f, "more than one {side} king on the board"),
            ChessErrors::NullMoveExecuted => write!(f, "cannot execute the null move"),
            ChessErrors::IllegalMoveRequest {
                origin,
                destination,
            } => write!(
                f,
                "no legal move from square {origin} to square {destination}"
            ),
            ChessErrors::InvalidAlgebraicString(text) => {
                write!(f, "invalid algebraic notation: {text}")
            }
            ChessErrors::InvalidLayoutToken(token) => write!(f, "invalid layout glyph: {token}"),
            ChessErrors::InvalidLayoutForm(msg) => write!(f, "malformed layout: {msg}"),
        }
    }
}

impl Error for ChessErrors {}
