//! King move generation. Safety is left to the legality filter.

use crate::board::Board;
use crate::chess_move::Move;
use crate::piece::Piece;
use crate::square::Square;

use super::sliders::{DIAGONALS, ORTHOGONALS};

/// Push the king's steps to the eight neighbouring squares not held by an ally.
pub(super) fn gen_king(board: &Board, src: Square, piece: Piece, list: &mut Vec<Move>) {
    for (d_row, d_col) in ORTHOGONALS.into_iter().chain(DIAGONALS) {
        let Some(dst) = src.offset(d_row, d_col) else {
            continue;
        };
        let target = board.piece_at(dst);
        if target.is_none_or(|t| t.color() != piece.color()) {
            list.push(Move::with_piece(src, dst, piece, target));
        }
    }
}
