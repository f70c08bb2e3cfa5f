//! Move generation: pseudo-legal candidates, attack queries, and legality filtering.

mod attacks;
mod king;
mod knights;
mod legal;
mod pawns;
mod pins;
mod sliders;

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::game_state::GameState;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use self::king::gen_king;
use self::knights::gen_knight;
use self::pawns::gen_pawn;
use self::sliders::{DIAGONALS, ORTHOGONALS, gen_slider};

/// Generate every geometrically valid move for `color`, ignoring king safety.
///
/// `en_passant` is the square a pawn may capture onto en passant, if any. The result is
/// unordered and contains each `(start, end)` pair at most once.
pub fn pseudo_legal_moves(board: &Board, color: Color, en_passant: Option<Square>) -> Vec<Move> {
    let mut list = Vec::with_capacity(64);
    for (sq, piece) in board.pieces().filter(|(_, piece)| piece.color() == color) {
        match piece.kind() {
            PieceKind::Pawn => gen_pawn(board, sq, piece, en_passant, &mut list),
            PieceKind::Knight => gen_knight(board, sq, piece, &mut list),
            PieceKind::Bishop => gen_slider(board, sq, piece, &DIAGONALS, &mut list),
            PieceKind::Rook => gen_slider(board, sq, piece, &ORTHOGONALS, &mut list),
            PieceKind::Queen => {
                gen_slider(board, sq, piece, &DIAGONALS, &mut list);
                gen_slider(board, sq, piece, &ORTHOGONALS, &mut list);
            }
            PieceKind::King => gen_king(board, sq, piece, &mut list),
        }
    }
    list
}

impl GameState {
    /// Pseudo-legal moves for the side to move.
    pub fn pseudo_legal_moves(&self) -> Vec<Move> {
        pseudo_legal_moves(&self.board, self.side_to_move, self.en_passant)
    }
}
