//! Move values.
//!
//! A `Move` describes one state transition: which piece moves, where to, and
//! which special rule applies. The enum is closed so every consumer that
//! matches on it is forced to handle new variants. Moves hold pieces by value
//! and never refer back to the board they were generated from.

use std::fmt;

use crate::game_state::chess_types::{Piece, PieceKind, Square};
use crate::utils::algebraic::square_to_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Sentinel for "no move resolved". Applying it is an error.
    Null,
    /// Non-pawn move to an empty square.
    Quiet { piece: Piece, destination: Square },
    /// Non-pawn move capturing the piece on the destination.
    Capture {
        piece: Piece,
        destination: Square,
        captured: Piece,
    },
    /// Single-square pawn advance.
    PawnPush { piece: Piece, destination: Square },
    /// Two-square pawn advance from the starting rank.
    PawnDoubleStep { piece: Piece, destination: Square },
    /// Diagonal pawn capture.
    PawnCapture {
        piece: Piece,
        destination: Square,
        captured: Piece,
    },
    /// Pawn capture of a pawn that just double-stepped past it. `captured`
    /// stands beside `piece`, not on `destination`.
    PawnEnPassant {
        piece: Piece,
        destination: Square,
        captured: Piece,
    },
    /// Pawn reaching the last rank, by push or by capture.
    PawnPromotion {
        piece: Piece,
        destination: Square,
        promote_to: PieceKind,
        captured: Option<Piece>,
    },
    KingsideCastle {
        king: Piece,
        destination: Square,
        rook: Piece,
        rook_destination: Square,
    },
    QueensideCastle {
        king: Piece,
        destination: Square,
        rook: Piece,
        rook_destination: Square,
    },
}

impl Move {
    /// The piece that moves (the king for castles).
    pub fn moved_piece(&self) -> Option<Piece> {
        match *self {
            Move::Null => None,
            Move::Quiet { piece, .. }
            | Move::Capture { piece, .. }
            | Move::PawnPush { piece, .. }
            | Move::PawnDoubleStep { piece, .. }
            | Move::PawnCapture { piece, .. }
            | Move::PawnEnPassant { piece, .. }
            | Move::PawnPromotion { piece, .. } => Some(piece),
            Move::KingsideCastle { king, .. } | Move::QueensideCastle { king, .. } => Some(king),
        }
    }

    pub fn origin(&self) -> Option<Square> {
        self.moved_piece().map(|piece| piece.square)
    }

    pub fn destination(&self) -> Option<Square> {
        match *self {
            Move::Null => None,
            Move::Quiet { destination, .. }
            | Move::Capture { destination, .. }
            | Move::PawnPush { destination, .. }
            | Move::PawnDoubleStep { destination, .. }
            | Move::PawnCapture { destination, .. }
            | Move::PawnEnPassant { destination, .. }
            | Move::PawnPromotion { destination, .. }
            | Move::KingsideCastle { destination, .. }
            | Move::QueensideCastle { destination, .. } => Some(destination),
        }
    }

    pub fn captured_piece(&self) -> Option<Piece> {
        match *self {
            Move::Capture { captured, .. }
            | Move::PawnCapture { captured, .. }
            | Move::PawnEnPassant { captured, .. } => Some(captured),
            Move::PawnPromotion { captured, .. } => captured,
            _ => None,
        }
    }

    pub fn promotion(&self) -> Option<PieceKind> {
        match *self {
            Move::PawnPromotion { promote_to, .. } => Some(promote_to),
            _ => None,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Move::Null)
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured_piece().is_some()
    }

    #[inline]
    pub fn is_castle(&self) -> bool {
        matches!(
            self,
            Move::KingsideCastle { .. } | Move::QueensideCastle { .. }
        )
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        matches!(self, Move::PawnEnPassant { .. })
    }

    /// Rook taking part in a castle, as it stood before the move.
    pub fn castle_rook(&self) -> Option<(Piece, Square)> {
        match *self {
            Move::KingsideCastle {
                rook,
                rook_destination,
                ..
            }
            | Move::QueensideCastle {
                rook,
                rook_destination,
                ..
            } => Some((rook, rook_destination)),
            _ => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Null => write!(f, "null"),
            Move::KingsideCastle { .. } => write!(f, "0-0"),
            Move::QueensideCastle { .. } => write!(f, "0-0-0"),
            _ => {
                let (Some(origin), Some(destination)) = (self.origin(), self.destination()) else {
                    return Err(fmt::Error);
                };
                let origin = square_to_algebraic(origin).map_err(|_| fmt::Error)?;
                let destination = square_to_algebraic(destination).map_err(|_| fmt::Error)?;
                write!(f, "{origin}{destination}")?;
                if let Some(kind) = self.promotion() {
                    write!(f, "{}", kind.letter().to_ascii_lowercase())?;
                }
                Ok(())
            }
        }
    }
}
