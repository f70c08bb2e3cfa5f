//! Move execution and reversal on a [`GameState`].

use tracing::trace;

use crate::chess_move::Move;
use crate::game_state::{GameState, Ply};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

impl GameState {
    /// Apply a move produced by the move generator for the current board.
    ///
    /// Applying any other move leaves the state inconsistent. Terminal flags are not
    /// touched; the caller decides when to re-evaluate legal moves.
    pub fn apply(&mut self, mv: Move) {
        let piece = mv.piece_moved();
        let us = piece.color();

        self.board.set(mv.start(), None);
        self.board.set(mv.end(), Some(piece));

        self.history.push(Ply {
            mv,
            prior_en_passant: self.en_passant,
        });
        self.side_to_move = self.side_to_move.flip();

        if piece.kind() == PieceKind::King {
            self.king_squares[us.index()] = mv.end();
        }

        if mv.is_promotion() {
            self.board
                .set(mv.end(), Some(Piece::new(PieceKind::Queen, us)));
        }

        if mv.is_en_passant() {
            self.board.set(mv.en_passant_victim(), None);
        }

        // Only a double step leaves a target; it expires after the opponent's reply.
        self.en_passant = if mv.is_pawn_double_step() {
            let passed_row = (mv.start().row() + mv.end().row()) / 2;
            Some(Square::new(passed_row, mv.start().col()))
        } else {
            None
        };

        trace!(mv = %mv, plies = self.history.len(), "applied");
    }

    /// Take back the most recent move and return it. Does nothing on an empty history.
    ///
    /// Clears both terminal flags; they describe a position that no longer exists.
    pub fn undo(&mut self) -> Option<Move> {
        let Ply {
            mv,
            prior_en_passant,
        } = self.history.pop()?;
        let piece = mv.piece_moved();

        self.board.set(mv.start(), Some(piece));
        if mv.is_en_passant() {
            self.board.set(mv.end(), None);
            self.board.set(mv.en_passant_victim(), mv.piece_captured());
        } else {
            self.board.set(mv.end(), mv.piece_captured());
        }

        self.side_to_move = self.side_to_move.flip();

        if piece.kind() == PieceKind::King {
            self.king_squares[piece.color().index()] = mv.start();
        }

        self.en_passant = prior_en_passant;
        self.checkmate = false;
        self.stalemate = false;

        trace!(mv = %mv, plies = self.history.len(), "undone");
        Some(mv)
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::chess_move::Move;
    use crate::color::Color;
    use crate::game_state::GameState;
    use crate::piece::Piece;
    use crate::square::Square;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn kings_only() -> Board {
        let mut board = Board::empty();
        board.set(sq("e1"), Some(Piece::WHITE_KING));
        board.set(sq("e8"), Some(Piece::BLACK_KING));
        board
    }

    #[test]
    fn double_step_sets_target() {
        let mut state = GameState::new();
        let mv = Move::new(Square::new(6, 4), Square::new(4, 4), state.board()).unwrap();
        state.apply(mv);
        assert_eq!(state.board().piece_at(Square::new(4, 4)), Some(Piece::WHITE_PAWN));
        assert!(state.board().is_empty(Square::new(6, 4)));
        assert_eq!(state.side_to_move(), Color::Black);
        assert_eq!(state.en_passant(), Some(Square::new(5, 4)));
    }

    #[test]
    fn target_expires_after_one_move() {
        let mut state = GameState::new();
        let first = Move::new(sq("e2"), sq("e4"), state.board()).unwrap();
        state.apply(first);
        let reply = Move::new(sq("g8"), sq("f6"), state.board()).unwrap();
        state.apply(reply);
        assert_eq!(state.en_passant(), None);
    }

    #[test]
    fn undo_empty_history_is_noop() {
        let mut state = GameState::new();
        assert!(state.undo().is_none());
        assert_eq!(state.board(), &Board::starting_position());
        assert_eq!(state.side_to_move(), Color::White);
    }

    #[test]
    fn king_move_updates_cache() {
        let mut state = GameState::from_board(kings_only(), Color::White, None).unwrap();
        let mv = Move::new(sq("e1"), sq("d2"), state.board()).unwrap();
        state.apply(mv);
        assert_eq!(state.king_square(Color::White), sq("d2"));
        assert!(state.king_cache_consistent());
        state.undo();
        assert_eq!(state.king_square(Color::White), sq("e1"));
        assert!(state.king_cache_consistent());
    }

    #[test]
    fn capture_restored_by_undo() {
        let mut board = kings_only();
        board.set(sq("a1"), Some(Piece::WHITE_ROOK));
        board.set(sq("a7"), Some(Piece::BLACK_BISHOP));
        let mut state = GameState::from_board(board, Color::White, None).unwrap();
        let mv = Move::new(sq("a1"), sq("a7"), state.board()).unwrap();
        state.apply(mv);
        assert_eq!(state.board().piece_at(sq("a7")), Some(Piece::WHITE_ROOK));
        assert_eq!(state.undo(), Some(mv));
        assert_eq!(state.board(), &board);
    }

    #[test]
    fn promotion_becomes_queen() {
        let mut board = kings_only();
        board.set(sq("b7"), Some(Piece::WHITE_PAWN));
        board.set(sq("g2"), Some(Piece::BLACK_PAWN));
        let mut state = GameState::from_board(board, Color::White, None).unwrap();

        let white = Move::new(Square::new(1, 1), Square::new(0, 1), state.board()).unwrap();
        state.apply(white);
        assert_eq!(state.board().piece_at(sq("b8")), Some(Piece::WHITE_QUEEN));

        let black = Move::new(Square::new(6, 6), Square::new(7, 6), state.board()).unwrap();
        state.apply(black);
        assert_eq!(state.board().piece_at(sq("g1")), Some(Piece::BLACK_QUEEN));

        state.undo();
        state.undo();
        assert_eq!(state.board(), &board);
    }

    #[test]
    fn en_passant_apply_and_undo() {
        let mut board = kings_only();
        board.set(sq("e5"), Some(Piece::WHITE_PAWN));
        board.set(sq("d5"), Some(Piece::BLACK_PAWN));
        let mut state = GameState::from_board(board, Color::White, Some(sq("d6"))).unwrap();

        let mv = Move::new_en_passant(sq("e5"), sq("d6"), state.board()).unwrap();
        state.apply(mv);
        assert_eq!(state.board().piece_at(sq("d6")), Some(Piece::WHITE_PAWN));
        assert!(state.board().is_empty(sq("d5")));
        assert!(state.board().is_empty(sq("e5")));
        assert_eq!(state.en_passant(), None);

        state.undo();
        assert_eq!(state.board(), &board);
        assert_eq!(state.en_passant(), Some(sq("d6")));
    }

    #[test]
    fn en_passant_target_survives_multi_level_undo() {
        let mut state = GameState::new();
        for (from, to) in [("e2", "e4"), ("a7", "a6"), ("e4", "e5"), ("d7", "d5")] {
            let mv = Move::new(sq(from), sq(to), state.board()).unwrap();
            state.apply(mv);
        }
        assert_eq!(state.en_passant(), Some(sq("d6")));

        let ep = Move::new_en_passant(sq("e5"), sq("d6"), state.board()).unwrap();
        state.apply(ep);
        let quiet = Move::new(sq("a6"), sq("a5"), state.board()).unwrap();
        state.apply(quiet);

        state.undo();
        assert_eq!(state.en_passant(), None);
        state.undo();
        assert_eq!(state.en_passant(), Some(sq("d6")));
        state.undo();
        assert_eq!(state.en_passant(), None);
        state.undo();
        state.undo();
        assert_eq!(state.en_passant(), Some(sq("e3")));
    }
}
