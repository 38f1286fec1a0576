//! Resolves front-end coordinates into one of the precomputed legal moves.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::moves::move_descriptions::Move;
use crate::player::move_transition::MoveTransition;

/// Legal move of the side to move matching the request, or `Move::Null`.
///
/// A promotion move only matches when `promotion` names its kind.
pub fn create_move(
    position: &Position,
    origin: Square,
    destination: Square,
    promotion: Option<PieceKind>,
) -> Move {
    position
        .current_player()
        .legal_moves()
        .iter()
        .copied()
        .find(|mv| {
            mv.origin() == Some(origin)
                && mv.destination() == Some(destination)
                && mv.promotion() == promotion
        })
        .unwrap_or(Move::Null)
}

/// Resolves the request and hands the move to the side to move.
pub fn make_move(
    position: &Position,
    origin: Square,
    destination: Square,
    promotion: Option<PieceKind>,
) -> Result<MoveTransition, ChessErrors> {
    let mv = create_move(position, origin, destination, promotion);
    if mv.is_null() {
        return Ok(MoveTransition::IllegalMove);
    }
    position.make_move(&mv)
}

#[cfg(test)]
mod tests {
    use super::{create_move, make_move};
    use crate::game_state::chess_types::*;
    use crate::game_state::position::{create_initial_position, Position};
    use crate::moves::move_descriptions::Move;
    use crate::player::move_transition::MoveTransition;
    use crate::utils::text_layout::parse_text_layout;

    fn play(position: &Position, origin: Square, destination: Square) -> Position {
        make_move(position, origin, destination, None)
            .expect("make_move should not fail")
            .into_position()
            .expect("move should be legal")
    }

    #[test]
    fn unknown_requests_resolve_to_null() {
        let position = create_initial_position();
        assert_eq!(create_move(&position, 12, 36, None), Move::Null);
        assert_eq!(create_move(&position, 52, 36, None), Move::Null);
        assert_eq!(
            make_move(&position, 0, 8, None).expect("make_move should not fail"),
            MoveTransition::IllegalMove
        );
        assert!(matches!(
            create_move(&position, 12, 28, None),
            Move::PawnDoubleStep { .. }
        ));
    }

    #[test]
    fn promotion_needs_an_explicit_kind() {
        let position = parse_text_layout(
            "- - - - k - - -
             - P - - - - - -
             - - - - - - - -
             - - - - - - - -
             - - - - - - - -
             - - - - - - - -
             - - - - - - - -
             - - - - K - - -",
            Side::White,
        )
        .expect("layout should parse");

        assert_eq!(create_move(&position, 49, 57, None), Move::Null);
        let rook = create_move(&position, 49, 57, Some(PieceKind::Rook));
        assert_eq!(rook.promotion(), Some(PieceKind::Rook));

        let next = make_move(&position, 49, 57, Some(PieceKind::Queen))
            .expect("make_move should not fail")
            .into_position()
            .expect("promotion should be legal");
        let queen = next.board().piece_at(57).expect("piece on b8");
        assert_eq!(queen.kind, PieceKind::Queen);
        // The new queen checks along the back rank.
        assert!(next.is_in_check());
    }

    #[test]
    fn castling_disappears_once_the_king_has_moved() {
        let start = parse_text_layout(
            "r - - - k - - r
             p p p p p p p p
             - - - - - - - -
             - - - - - - - -
             - - - - - - - -
             - - - - - - - -
             P P P P P P P P
             R - - - K - - R",
            Side::White,
        )
        .expect("layout should parse");
        assert!(create_move(&start, 4, 6, None).is_castle());

        // Ke1-f1, ...a6, Kf1-e1, ...a5: the king is home again but has moved.
        let position = play(&start, 4, 5);
        let position = play(&position, 48, 40);
        let position = play(&position, 5, 4);
        let position = play(&position, 40, 32);

        assert_eq!(position.board().piece_at(4).map(|p| p.kind), Some(PieceKind::King));
        assert!(position
            .legal_moves_for(Side::White)
            .iter()
            .all(|mv| !mv.is_castle()));
        assert_eq!(
            position
                .legal_moves_for(Side::Black)
                .iter()
                .filter(|mv| mv.is_castle())
                .count(),
            2
        );
    }

    #[test]
    fn castling_disappears_on_the_wing_whose_rook_moved() {
        let start = parse_text_layout(
            "r - - - k - - r
             p p p p p p p p
             - - - - - - - -
             - - - - - - - -
             - - - - - - - -
             - - - - - - - -
             P P P P P P P -
             R - - - K - - R",
            Side::White,
        )
        .expect("layout should parse");

        // Rh1-h2, ...a6, Rh2-h1, ...a5: the rook is home again but has moved.
        let position = play(&start, 7, 15);
        let position = play(&position, 48, 40);
        let position = play(&position, 15, 7);
        let position = play(&position, 40, 32);

        let rook = position.board().piece_at(7).expect("rook on h1");
        assert_eq!(rook.kind, PieceKind::Rook);
        assert!(rook.has_moved);

        let white = position.legal_moves_for(Side::White);
        let kingside = white
            .iter()
            .filter(|mv| matches!(mv, Move::KingsideCastle { .. }))
            .count();
        let queenside = white
            .iter()
            .filter(|mv| matches!(mv, Move::QueensideCastle { .. }))
            .count();
        assert_eq!(kingside, 0);
        assert_eq!(queenside, 1);
    }

    #[test]
    fn castling_moves_both_king_and_rook() {
        let start = parse_text_layout(
            "r - - - k - - r
             - - - - - - - -
             - - - - - - - -
             - - - - - - - -
             - - - - - - - -
             - - - - - - - -
             - - - - - - - -
             R - - - K - - R",
            Side::Black,
        )
        .expect("layout should parse");
        let after = play(&start, 60, 58);
        let board = after.board();

        let king = board.piece_at(58).expect("king on c8");
        let rook = board.piece_at(59).expect("rook on d8");
        assert_eq!(king.kind, PieceKind::King);
        assert_eq!(rook.kind, PieceKind::Rook);
        assert!(king.has_moved && rook.has_moved);
        assert_eq!(board.piece_at(56), None);
        assert_eq!(board.piece_at(60), None);
    }

    #[test]
    fn en_passant_is_available_for_one_ply_only() {
        let start = parse_text_layout(
            "- - - - k - - -
             - - - p - - - -
             - - - - - - - -
             - - - - P - - -
             - - - - - - - -
             - - - - - - - -
             - - - - - - - P
             - - - - K - - -",
            Side::Black,
        )
        .expect("layout should parse");

        let after_double = play(&start, 51, 35);
        let en_passant: Vec<&Move> = after_double
            .legal_moves_for(Side::White)
            .iter()
            .filter(|mv| mv.is_en_passant())
            .collect();
        assert_eq!(en_passant.len(), 1);
        assert_eq!(en_passant[0].destination(), Some(43));

        // White declines, Black shuffles, the chance is gone.
        let declined = play(&after_double, 15, 23);
        let later = play(&declined, 60, 59);
        assert!(later
            .legal_moves_for(Side::White)
            .iter()
            .all(|mv| !mv.is_en_passant()));
    }
}
