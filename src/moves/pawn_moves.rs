//! Pawn movement rule.
//!
//! Offsets are scaled by the side's direction: `+8` push, `+16` double step,
//! `+7`/`+9` diagonal captures. Pushes and captures that reach the last rank
//! expand into one promotion move per promotion kind. En passant is generated
//! only for the side to move, against the pawn recorded on the board as having
//! just double-stepped.

use crate::game_state::board::Board;
use crate::game_state::board_utils::{file_of, rank_of, step};
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;

pub fn candidate_moves(board: &Board, piece: Piece) -> Vec<Move> {
    let mut out = Vec::new();
    let side = piece.side;
    let direction = side.direction();

    if let Some(one_step) = step(piece.square, 8 * direction) {
        if !board.is_occupied(one_step) {
            if rank_of(one_step) == side.promotion_rank() {
                push_promotions(&mut out, piece, one_step, None);
            } else {
                out.push(Move::PawnPush {
                    piece,
                    destination: one_step,
                });

                if !piece.has_moved && rank_of(piece.square) == side.pawn_start_rank() {
                    if let Some(two_step) = step(one_step, 8 * direction) {
                        if !board.is_occupied(two_step) {
                            out.push(Move::PawnDoubleStep {
                                piece,
                                destination: two_step,
                            });
                        }
                    }
                }
            }
        }
    }

    for offset in [7 * direction, 9 * direction] {
        let Some(destination) = step(piece.square, offset) else {
            continue;
        };
        let Some(target) = board.piece_at(destination) else {
            continue;
        };
        if target.side == side {
            continue;
        }
        if rank_of(destination) == side.promotion_rank() {
            push_promotions(&mut out, piece, destination, Some(target));
        } else {
            out.push(Move::PawnCapture {
                piece,
                destination,
                captured: target,
            });
        }
    }

    if let Some(mv) = en_passant_move(board, piece) {
        out.push(mv);
    }

    out
}

fn push_promotions(
    out: &mut Vec<Move>,
    piece: Piece,
    destination: Square,
    captured: Option<Piece>,
) {
    for promote_to in PROMOTION_KINDS {
        out.push(Move::PawnPromotion {
            piece,
            destination,
            promote_to,
            captured,
        });
    }
}

fn en_passant_move(board: &Board, piece: Piece) -> Option<Move> {
    if board.side_to_move() != piece.side {
        return None;
    }
    let passed = board.en_passant_pawn()?;
    if passed.side == piece.side || passed.kind != PieceKind::Pawn {
        return None;
    }
    if board.piece_at(passed.square) != Some(passed) {
        return None;
    }
    if rank_of(passed.square) != rank_of(piece.square)
        || file_of(passed.square).abs_diff(file_of(piece.square)) != 1
    {
        return None;
    }

    let destination = step(passed.square, 8 * piece.side.direction())?;
    if board.is_occupied(destination) {
        return None;
    }

    Some(Move::PawnEnPassant {
        piece,
        destination,
        captured: passed,
    })
}

#[cfg(test)]
mod tests {
    use super::candidate_moves;
    use crate::game_state::board::{Board, BoardBuilder};
    use crate::game_state::chess_types::*;
    use crate::moves::move_descriptions::Move;
    use crate::utils::text_layout::parse_text_layout;

    fn destinations(moves: &[Move]) -> Vec<Square> {
        let mut out: Vec<Square> = moves.iter().filter_map(|mv| mv.destination()).collect();
        out.sort_unstable();
        out
    }

    #[test]
    fn unmoved_pawn_pushes_once_or_twice() {
        let board = Board::standard().expect("standard board should build");
        let e2 = board.piece_at(12).expect("pawn on e2");
        let moves = candidate_moves(&board, e2);

        assert_eq!(destinations(&moves), vec![20, 28]);
        assert!(matches!(moves[1], Move::PawnDoubleStep { .. }));

        let e7 = board.piece_at(52).expect("pawn on e7");
        assert_eq!(destinations(&candidate_moves(&board, e7)), vec![36, 44]);
    }

    #[test]
    fn moved_pawn_on_start_rank_cannot_double_step() {
        let mut builder = BoardBuilder::new();
        builder
            .set_piece(Piece::new(PieceKind::King, Side::White, 4))
            .set_piece(Piece::new(PieceKind::King, Side::Black, 60))
            .set_piece(Piece::new(PieceKind::Pawn, Side::White, 12).with_moved(true));
        let board = builder.build().expect("board should build");
        let pawn = board.piece_at(12).expect("pawn on e2");

        assert_eq!(destinations(&candidate_moves(&board, pawn)), vec![20]);
    }

    #[test]
    fn blocked_pawn_has_no_push() {
        let position = parse_text_layout(
            "- - - - k - - -
             - - - - - - - -
             - - - - - - - -
             - - - - - - - -
             - - - - - - - -
             - - - - n - - -
             - - - - P - - -
             - - - - K - - -",
            Side::White,
        )
        .expect("layout should parse");
        let board = position.board();
        let pawn = board.piece_at(12).expect("pawn on e2");
        assert!(candidate_moves(board, pawn).is_empty());
    }

    #[test]
    fn both_diagonal_captures_are_generated() {
        let position = parse_text_layout(
            "- - - - k - - -
             - - - - - - - -
             - - - - - - - -
             - - - p - r - -
             - - - - P - - -
             - - - - - - - -
             - - - - - - - -
             - - - - K - - -",
            Side::White,
        )
        .expect("layout should parse");
        let board = position.board();
        let pawn = board.piece_at(28).expect("pawn on e4");
        let moves = candidate_moves(board, pawn);

        assert_eq!(destinations(&moves), vec![35, 36, 37]);
        assert_eq!(
            moves
                .iter()
                .filter(|mv| matches!(mv, Move::PawnCapture { .. }))
                .count(),
            2
        );
    }

    #[test]
    fn edge_pawn_does_not_capture_across_the_board() {
        let position = parse_text_layout(
            "- - - - k - - -
             - - - - - - - -
             p - - - - - - -
             - - - - - - - -
             - - - - - - - P
             - - - - - - - -
             - - - - - - - -
             - - - - K - - -",
            Side::White,
        )
        .expect("layout should parse");
        let board = position.board();
        let pawn = board.piece_at(31).expect("pawn on h4");

        // h4 + 9 lands on a6 by raw arithmetic.
        assert_eq!(destinations(&candidate_moves(board, pawn)), vec![39]);
    }

    #[test]
    fn pawn_on_seventh_rank_offers_every_promotion() {
        let position = parse_text_layout(
            "- r - - k - - -
             P - - - - - - -
             - - - - - - - -
             - - - - - - - -
             - - - - - - - -
             - - - - - - - -
             - - - - - - - -
             - - - - K - - -",
            Side::White,
        )
        .expect("layout should parse");
        let board = position.board();
        let pawn = board.piece_at(48).expect("pawn on a7");
        let moves = candidate_moves(board, pawn);

        assert_eq!(moves.len(), 8);
        assert!(moves.iter().all(|mv| mv.promotion().is_some()));
        assert_eq!(moves.iter().filter(|mv| mv.is_capture()).count(), 4);
    }

    #[test]
    fn en_passant_targets_the_pawn_beside() {
        let black_pawn = Piece::new(PieceKind::Pawn, Side::Black, 35).with_moved(true);
        let mut builder = BoardBuilder::new();
        builder
            .set_piece(Piece::new(PieceKind::King, Side::White, 4))
            .set_piece(Piece::new(PieceKind::King, Side::Black, 60))
            .set_piece(Piece::new(PieceKind::Pawn, Side::White, 36).with_moved(true))
            .set_piece(black_pawn)
            .set_en_passant_pawn(Some(black_pawn))
            .set_move_maker(Side::White);
        let board = builder.build().expect("board should build");
        let pawn = board.piece_at(36).expect("pawn on e5");
        let moves = candidate_moves(&board, pawn);

        let en_passant: Vec<&Move> = moves.iter().filter(|mv| mv.is_en_passant()).collect();
        assert_eq!(en_passant.len(), 1);
        assert_eq!(en_passant[0].destination(), Some(43));
        assert_eq!(en_passant[0].captured_piece(), Some(black_pawn));
    }
}
