//! Sliding piece (bishop, rook, queen) move generation by ray casting.

use crate::board::Board;
use crate::chess_move::Move;
use crate::piece::Piece;
use crate::square::Square;

/// A unit step `(d_row, d_col)`.
pub(crate) type Direction = (i8, i8);

pub(crate) const ORTHOGONALS: [Direction; 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub(crate) const DIAGONALS: [Direction; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Cast a ray from `src` along each direction in `directions`.
///
/// Empty squares extend the ray, an enemy piece is captured and ends it, a friendly piece
/// ends it without a move, and the board edge ends it.
pub(super) fn gen_slider(
    board: &Board,
    src: Square,
    piece: Piece,
    directions: &[Direction],
    list: &mut Vec<Move>,
) {
    for &(d_row, d_col) in directions {
        let mut cursor = src;
        while let Some(dst) = cursor.offset(d_row, d_col) {
            match board.piece_at(dst) {
                None => list.push(Move::with_piece(src, dst, piece, None)),
                Some(target) if target.color() != piece.color() => {
                    list.push(Move::with_piece(src, dst, piece, Some(target)));
                    break;
                }
                Some(_) => break,
            }
            cursor = dst;
        }
    }
}
