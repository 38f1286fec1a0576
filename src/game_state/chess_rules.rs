//! Canonical chess-rule constants.
//!
//! Stores the standard starting layout and the fixed squares castling relies
//! on.

use crate::game_state::board_utils::square_at;
use crate::game_state::chess_types::{Piece, PieceKind, Side, Square};

/// Back-rank piece order from the a-file to the h-file.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Standard starting position in the text layout format.
pub const STARTING_LAYOUT: &str = "\
 r n b q k b n r
 p p p p p p p p
 - - - - - - - -
 - - - - - - - -
 - - - - - - - -
 - - - - - - - -
 P P P P P P P P
 R N B Q K B N R";

pub const KING_FILE: u8 = 4;
pub const KINGSIDE_ROOK_FILE: u8 = 7;
pub const QUEENSIDE_ROOK_FILE: u8 = 0;

/// All 32 pieces of the standard starting position, none of them moved.
pub fn standard_pieces() -> Vec<Piece> {
    let mut pieces = Vec::with_capacity(32);
    for side in [Side::White, Side::Black] {
        let home = side.home_rank();
        let pawns = side.pawn_start_rank();
        for (file, kind) in BACK_RANK.iter().enumerate() {
            let file = file as u8;
            pieces.push(Piece::new(*kind, side, square_at(file, home)));
            pieces.push(Piece::new(PieceKind::Pawn, side, square_at(file, pawns)));
        }
    }
    pieces
}

/// True if `square` is where a piece of this kind and side starts the game.
pub fn is_original_square(kind: PieceKind, side: Side, square: Square) -> bool {
    let file = square % 8;
    let rank = square / 8;
    match kind {
        PieceKind::Pawn => rank == side.pawn_start_rank(),
        _ => rank == side.home_rank() && BACK_RANK[file as usize] == kind,
    }
}
