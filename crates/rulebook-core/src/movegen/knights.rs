//! Knight move generation.

use crate::board::Board;
use crate::chess_move::Move;
use crate::piece::Piece;
use crate::square::Square;

pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Push pseudo-legal knight moves from `src`.
pub(super) fn gen_knight(board: &Board, src: Square, piece: Piece, list: &mut Vec<Move>) {
    for (d_row, d_col) in KNIGHT_OFFSETS {
        let Some(dst) = src.offset(d_row, d_col) else {
            continue;
        };
        let target = board.piece_at(dst);
        if target.is_none_or(|t| t.color() != piece.color()) {
            list.push(Move::with_piece(src, dst, piece, target));
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::color::Color;
    use crate::movegen::pseudo_legal_moves;
    use crate::piece::Piece;
    use crate::square::Square;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn center_knight_has_eight() {
        let mut board = Board::empty();
        board.set(sq("d4"), Some(Piece::WHITE_KNIGHT));
        assert_eq!(pseudo_legal_moves(&board, Color::White, None).len(), 8);
    }

    #[test]
    fn corner_knight_has_two() {
        let mut board = Board::empty();
        board.set(sq("h8"), Some(Piece::BLACK_KNIGHT));
        assert_eq!(pseudo_legal_moves(&board, Color::Black, None).len(), 2);
    }

    #[test]
    fn allies_block_enemies_capture() {
        let mut board = Board::empty();
        board.set(sq("d4"), Some(Piece::WHITE_KNIGHT));
        board.set(sq("e6"), Some(Piece::WHITE_PAWN));
        board.set(sq("c6"), Some(Piece::BLACK_PAWN));
        let moves: Vec<_> = pseudo_legal_moves(&board, Color::White, None)
            .into_iter()
            .filter(|mv| mv.start() == sq("d4"))
            .collect();
        assert_eq!(moves.len(), 7);
        assert!(moves.iter().all(|mv| mv.end() != sq("e6")));
        assert!(moves.iter().any(|mv| mv.end() == sq("c6") && mv.is_capture()));
    }
}
