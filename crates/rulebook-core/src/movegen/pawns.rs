//! Pawn move generation.

use crate::board::Board;
use crate::chess_move::Move;
use crate::piece::Piece;
use crate::square::Square;

/// Push pseudo-legal moves for the pawn `piece` standing on `src`.
///
/// Promotion is flagged by the descriptor itself whenever the destination is the far row.
pub(super) fn gen_pawn(
    board: &Board,
    src: Square,
    piece: Piece,
    en_passant: Option<Square>,
    list: &mut Vec<Move>,
) {
    let us = piece.color();
    let forward = us.forward();

    // --- Pushes ---
    if let Some(one) = src.offset(forward, 0)
        && board.is_empty(one)
    {
        list.push(Move::with_piece(src, one, piece, None));

        if src.row() == us.pawn_row()
            && let Some(two) = one.offset(forward, 0)
            && board.is_empty(two)
        {
            list.push(Move::with_piece(src, two, piece, None));
        }
    }

    // --- Captures, including en passant ---
    for side in [-1, 1] {
        let Some(dst) = src.offset(forward, side) else {
            continue;
        };
        match board.piece_at(dst) {
            Some(target) if target.color() != us => {
                list.push(Move::with_piece(src, dst, piece, Some(target)));
            }
            None if en_passant == Some(dst) => {
                list.push(Move::en_passant_with_piece(src, dst, piece));
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::color::Color;
    use crate::game_state::GameState;
    use crate::movegen::pseudo_legal_moves;
    use crate::piece::Piece;
    use crate::square::Square;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn moves_from(fen: &str, from: &str) -> Vec<crate::chess_move::Move> {
        let state: GameState = fen.parse().unwrap();
        state
            .pseudo_legal_moves()
            .into_iter()
            .filter(|mv| mv.start() == sq(from))
            .collect()
    }

    #[test]
    fn single_and_double_push_from_home() {
        let moves = moves_from("4k3/8/8/8/8/8/4P3/4K3 w - -", "e2");
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().any(|mv| mv.end() == sq("e4") && mv.is_pawn_double_step()));
    }

    #[test]
    fn double_push_needs_both_squares_empty() {
        assert_eq!(moves_from("4k3/8/8/8/8/4n3/4P3/4K3 w - -", "e2").len(), 0);
        assert_eq!(moves_from("4k3/8/8/8/4n3/8/4P3/4K3 w - -", "e2").len(), 1);
    }

    #[test]
    fn no_double_push_off_home_row() {
        assert_eq!(moves_from("4k3/8/8/8/8/4P3/8/4K3 w - -", "e3").len(), 1);
    }

    #[test]
    fn captures_enemies_only() {
        let moves = moves_from("4k3/8/8/8/8/3n1N2/4P3/4K3 w - -", "e2");
        let captures: Vec<_> = moves.iter().filter(|mv| mv.is_capture()).collect();
        assert_eq!(captures.len(), 1);
        assert_eq!(captures[0].end(), sq("d3"));
        assert_eq!(captures[0].piece_captured(), Some(Piece::BLACK_KNIGHT));
    }

    #[test]
    fn black_pawns_move_down() {
        let state = GameState::new();
        let moves = pseudo_legal_moves(state.board(), Color::Black, None);
        let from_d7: Vec<_> = moves.iter().filter(|mv| mv.start() == sq("d7")).collect();
        assert_eq!(from_d7.len(), 2);
        assert!(from_d7.iter().all(|mv| mv.end().row() > sq("d7").row()));
    }

    #[test]
    fn en_passant_only_onto_target() {
        let with_target = moves_from("4k3/8/8/3pP3/8/8/8/4K3 w - d6", "e5");
        assert!(with_target.iter().any(|mv| mv.end() == sq("d6") && mv.is_en_passant()));

        let without_target = moves_from("4k3/8/8/3pP3/8/8/8/4K3 w - -", "e5");
        assert!(without_target.iter().all(|mv| !mv.is_en_passant()));
    }

    #[test]
    fn promotion_flagged_on_push_and_capture() {
        let moves = moves_from("1n2k3/P7/8/8/8/8/8/4K3 w - -", "a7");
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().all(|mv| mv.is_promotion()));
    }
}
