//! The game state: board, side to move, history, and terminal flags.

use std::fmt;

use tracing::{debug, info};

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::error::{BoardError, MoveError};
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Result of the most recent legal-move evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Ongoing,
    Checkmate,
    Stalemate,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::Checkmate => write!(f, "checkmate"),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

/// One history entry: the applied move and the en passant target that was live before it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Ply {
    pub(crate) mv: Move,
    pub(crate) prior_en_passant: Option<Square>,
}

/// Complete mutable state of a game.
///
/// Positions change only through [`apply`](GameState::apply) and
/// [`undo`](GameState::undo); the cached king squares always match the board.
#[derive(Clone)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) history: Vec<Ply>,
    /// Square a pawn passed over on the previous ply, capturable en passant for one move.
    pub(crate) en_passant: Option<Square>,
    /// King location per side, indexed by [`Color::index()`].
    pub(crate) king_squares: [Square; Color::COUNT],
    pub(crate) checkmate: bool,
    pub(crate) stalemate: bool,
}

impl GameState {
    /// Return the standard starting state: opening array, White to move, empty history.
    pub fn new() -> GameState {
        GameState {
            board: Board::starting_position(),
            side_to_move: Color::White,
            history: Vec::new(),
            en_passant: None,
            king_squares: [Square::new(7, 4), Square::new(0, 4)],
            checkmate: false,
            stalemate: false,
        }
    }

    /// Build a state from an arbitrary placement.
    ///
    /// The board must pass [`Board::validate`], and an en passant target must lie directly
    /// behind an opponent pawn that could have just double-stepped past it. History starts
    /// empty.
    pub fn from_board(
        board: Board,
        side_to_move: Color,
        en_passant: Option<Square>,
    ) -> Result<GameState, BoardError> {
        board.validate()?;
        let mut king_squares = [Square::new(0, 0); Color::COUNT];
        for color in Color::ALL {
            king_squares[color.index()] = board.find_king(color).ok_or(BoardError::InvalidKingCount {
                color: color.name(),
                count: 0,
            })?;
        }
        if let Some(target) = en_passant {
            check_en_passant(&board, side_to_move, target)?;
        }
        Ok(GameState {
            board,
            side_to_move,
            history: Vec::new(),
            en_passant,
            king_squares,
            checkmate: false,
            stalemate: false,
        })
    }

    /// Replace this state with a fresh starting state.
    pub fn reset(&mut self) {
        debug!(plies = self.history.len(), "resetting game");
        *self = GameState::new();
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Return the cached king square for `color`.
    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    /// Set by the last legal-move evaluation that found no moves while in check.
    #[inline]
    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    /// Set by the last legal-move evaluation that found no moves while not in check.
    #[inline]
    pub fn is_stalemate(&self) -> bool {
        self.stalemate
    }

    pub fn status(&self) -> GameStatus {
        if self.checkmate {
            GameStatus::Checkmate
        } else if self.stalemate {
            GameStatus::Stalemate
        } else {
            GameStatus::Ongoing
        }
    }

    /// Applied moves, oldest first.
    pub fn history(&self) -> impl DoubleEndedIterator<Item = &Move> + ExactSizeIterator {
        self.history.iter().map(|ply| &ply.mv)
    }

    /// The most recently applied move, if any.
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last().map(|ply| &ply.mv)
    }

    /// Legal moves whose origin is `start`, for highlighting reachable squares.
    pub fn legal_moves_from(&mut self, start: Square) -> Vec<Move> {
        let mut moves = self.legal_moves();
        moves.retain(|mv| mv.start() == start);
        moves
    }

    /// Play the move selected by a `(start, end)` pair if it is legal.
    ///
    /// The pair is matched by square equality against [`legal_moves`](GameState::legal_moves),
    /// and the generator's descriptor (with its special-move flags) is what gets applied.
    /// The terminal flags are re-evaluated for the side that moves next.
    pub fn try_move(&mut self, start: Square, end: Square) -> Result<Move, MoveError> {
        let illegal = MoveError::Illegal { start, end };
        let Some(selected) = Move::new(start, end, &self.board) else {
            debug!(%start, %end, "selection starts on an empty square");
            return Err(illegal);
        };
        if selected.piece_moved().color() != self.side_to_move {
            debug!(%start, %end, "selection moves an opponent piece");
            return Err(illegal);
        }

        let Some(mv) = self.legal_moves().into_iter().find(|mv| *mv == selected) else {
            debug!(%start, %end, "selection is not a legal move");
            return Err(illegal);
        };

        self.apply(mv);
        debug!(mv = %mv, notation = %mv.notation(), "move applied");

        self.legal_moves();
        match self.status() {
            GameStatus::Ongoing => {}
            status => info!(%status, loser = self.side_to_move.name(), "game over"),
        }
        Ok(mv)
    }

    /// Return `true` if both cached king squares hold the matching king.
    #[cfg(test)]
    pub(crate) fn king_cache_consistent(&self) -> bool {
        Color::ALL.into_iter().all(|color| {
            self.board
                .piece_at(self.king_square(color))
                .is_some_and(|piece| piece.is(color, PieceKind::King))
        })
    }
}

/// Accept `target` only if the opponent's pawn stands one step past it, having come from
/// its home row through two empty squares.
fn check_en_passant(board: &Board, side_to_move: Color, target: Square) -> Result<(), BoardError> {
    let passer = side_to_move.flip();
    let origin = target.offset(-passer.forward(), 0);
    let landing = target.offset(passer.forward(), 0);
    let consistent = match (origin, landing) {
        (Some(origin), Some(landing)) => {
            origin.row() == passer.pawn_row()
                && board.is_empty(origin)
                && board.is_empty(target)
                && board
                    .piece_at(landing)
                    .is_some_and(|p| p.is(passer, PieceKind::Pawn))
        }
        _ => false,
    };
    if consistent {
        Ok(())
    } else {
        debug!(%target, side = side_to_move.name(), "en passant target does not match board");
        Err(BoardError::InvalidEnPassant { square: target })
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

impl fmt::Debug for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GameState(\"{self}\")")
    }
}
