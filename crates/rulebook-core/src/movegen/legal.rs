//! Legal move filtering by simulation, and terminal state classification.

use tracing::trace;

use crate::chess_move::Move;
use crate::color::Color;
use crate::game_state::GameState;

impl GameState {
    /// Return every legal move for the side to move and refresh the terminal flags.
    ///
    /// Each pseudo-legal candidate is applied, the mover's king is tested against the
    /// opponent's replies, and the candidate is undone before the next one is looked at.
    /// An empty result is checkmate if the mover started in check and stalemate otherwise.
    pub fn legal_moves(&mut self) -> Vec<Move> {
        let mover = self.side_to_move;
        let in_check = self.in_check();
        let mut moves = self.pseudo_legal_moves();
        let candidates = moves.len();

        moves.retain(|&mv| self.survives(mv, mover));

        self.classify(moves.is_empty(), in_check);
        trace!(
            side = mover.name(),
            candidates,
            legal = moves.len(),
            "legal moves generated"
        );
        moves
    }

    /// Simulate `mv` and report whether `mover`'s king is safe afterwards.
    ///
    /// The move is always undone before returning.
    pub(super) fn survives(&mut self, mv: Move, mover: Color) -> bool {
        self.apply(mv);
        let exposed = self.square_under_attack(self.king_square(mover), self.side_to_move);
        self.undo();
        !exposed
    }

    /// Set the terminal flags from the outcome of a legal-move evaluation.
    pub(crate) fn classify(&mut self, no_moves: bool, in_check: bool) {
        self.checkmate = no_moves && in_check;
        self.stalemate = no_moves && !in_check;
    }
}
