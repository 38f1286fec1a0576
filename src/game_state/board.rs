//! Immutable board snapshot.
//!
//! `Board` is the sole source of truth for square occupancy. It is built once
//! through `BoardBuilder` and never edited afterwards: moves produce new
//! boards. Construction scans the squares once to cache each side's pieces and
//! computes both sides' pseudo-legal moves up front.

use crate::chess_errors::ChessErrors;
use crate::game_state::board_utils::is_valid_square;
use crate::game_state::chess_rules::standard_pieces;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::pseudo_legal_moves;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
    white_pieces: Vec<Piece>,
    black_pieces: Vec<Piece>,
    side_to_move: Side,
    en_passant_pawn: Option<Piece>,
    // [side][..]
    standard_moves: [Vec<Move>; 2],
}

impl Board {
    /// Board with the 32 pieces of a new game, White to move.
    pub fn standard() -> Result<Self, ChessErrors> {
        let mut builder = BoardBuilder::new();
        for piece in standard_pieces() {
            builder.set_piece(piece);
        }
        builder.set_move_maker(Side::White).build()
    }

    /// Occupant of `square`, rejecting indices outside the board.
    pub fn tile_at(&self, square: i32) -> Result<Option<Piece>, ChessErrors> {
        if !is_valid_square(square) {
            return Err(ChessErrors::InvalidCoordinate(square));
        }
        Ok(self.squares[square as usize])
    }

    /// Occupant of an already validated square.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares.get(square as usize).copied().flatten()
    }

    #[inline]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.piece_at(square).is_some()
    }

    #[inline]
    pub fn pieces_for(&self, side: Side) -> &[Piece] {
        match side {
            Side::White => &self.white_pieces,
            Side::Black => &self.black_pieces,
        }
    }

    #[inline]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// Pawn that double-stepped on the previous ply, if any.
    #[inline]
    pub fn en_passant_pawn(&self) -> Option<Piece> {
        self.en_passant_pawn
    }

    /// Pseudo-legal moves of `side`, without castles and without the
    /// self-check filter.
    #[inline]
    pub fn standard_moves_for(&self, side: Side) -> &[Move] {
        &self.standard_moves[side.index()]
    }

    pub fn king_of(&self, side: Side) -> Option<Piece> {
        self.pieces_for(side)
            .iter()
            .copied()
            .find(|piece| piece.kind == PieceKind::King)
    }
}

/// Collects pieces and turn state, then builds a validated `Board`.
#[derive(Debug, Clone)]
pub struct BoardBuilder {
    squares: [Option<Piece>; 64],
    move_maker: Side,
    en_passant_pawn: Option<Piece>,
    /// First off-board square passed to `set_piece`.
    invalid_square: Option<Square>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self {
            squares: [None; 64],
            move_maker: Side::White,
            en_passant_pawn: None,
            invalid_square: None,
        }
    }
}

impl BoardBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `piece` on its own square, replacing any previous occupant.
    /// An off-board square makes the next `build` fail.
    pub fn set_piece(&mut self, piece: Piece) -> &mut Self {
        match self.squares.get_mut(piece.square as usize) {
            Some(slot) => *slot = Some(piece),
            None => {
                self.invalid_square.get_or_insert(piece.square);
            }
        }
        self
    }

    pub fn set_move_maker(&mut self, side: Side) -> &mut Self {
        self.move_maker = side;
        self
    }

    pub fn set_en_passant_pawn(&mut self, pawn: Option<Piece>) -> &mut Self {
        self.en_passant_pawn = pawn;
        self
    }

    /// Builds the board, failing on any off-board piece or unless each side
    /// has exactly one king.
    pub fn build(&self) -> Result<Board, ChessErrors> {
        if let Some(square) = self.invalid_square {
            return Err(ChessErrors::InvalidCoordinate(square as i32));
        }

        let mut white_pieces = Vec::with_capacity(16);
        let mut black_pieces = Vec::with_capacity(16);
        for piece in self.squares.iter().flatten() {
            match piece.side {
                Side::White => white_pieces.push(*piece),
                Side::Black => black_pieces.push(*piece),
            }
        }

        for (side, pieces) in [(Side::White, &white_pieces), (Side::Black, &black_pieces)] {
            match pieces.iter().filter(|p| p.kind == PieceKind::King).count() {
                0 => return Err(ChessErrors::MissingKing(side)),
                1 => {}
                _ => return Err(ChessErrors::TooManyKings(side)),
            }
        }

        let mut board = Board {
            squares: self.squares,
            white_pieces,
            black_pieces,
            side_to_move: self.move_maker,
            en_passant_pawn: self.en_passant_pawn,
            standard_moves: [Vec::new(), Vec::new()],
        };
        board.standard_moves = [
            pseudo_legal_moves(&board, Side::White),
            pseudo_legal_moves(&board, Side::Black),
        ];

        Ok(board)
    }
}
