//! Attack queries built on the pseudo-legal generator.

use crate::color::Color;
use crate::game_state::GameState;
use crate::square::Square;

use super::pseudo_legal_moves;

impl GameState {
    /// Return `true` if some pseudo-legal move of `by_color` ends on `sq`.
    ///
    /// This is destination coverage, not a pure attack map: on an empty square a pawn push
    /// counts too. King squares are always occupied, so check detection is exact.
    pub fn square_under_attack(&self, sq: Square, by_color: Color) -> bool {
        pseudo_legal_moves(&self.board, by_color, self.en_passant)
            .iter()
            .any(|mv| mv.end() == sq)
    }

    /// Return `true` if the side to move has its king attacked.
    pub fn in_check(&self) -> bool {
        let us = self.side_to_move;
        self.square_under_attack(self.king_square(us), us.flip())
    }
}
