//! Pin and check detection, and the pin-aware legality filter built on it.
//!
//! The filter here must agree move for move with [`GameState::legal_moves`]; it only
//! avoids simulating moves whose legality follows from the pin and check geometry.

use tracing::trace;

use crate::chess_move::Move;
use crate::game_state::GameState;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use super::knights::KNIGHT_OFFSETS;
use super::sliders::{DIAGONALS, Direction, ORTHOGONALS};

/// Allowed movement line for each pinned square. Built once, never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PinMap {
    lines: [[Option<Direction>; 8]; 8],
}

impl PinMap {
    fn empty() -> PinMap {
        PinMap {
            lines: [[None; 8]; 8],
        }
    }

    /// Direction from the king through the pinned piece on `sq`, if it is pinned.
    pub(crate) fn pin_line(&self, sq: Square) -> Option<Direction> {
        self.lines[sq.row() as usize][sq.col() as usize]
    }

    /// Return `true` if `mv` keeps its piece on the pin line, or the piece is not pinned.
    pub(crate) fn allows(&self, mv: &Move) -> bool {
        let Some((d_row, d_col)) = self.pin_line(mv.start()) else {
            return true;
        };
        match step_between(mv.start(), mv.end()) {
            Some(step) => step == (d_row, d_col) || step == (-d_row, -d_col),
            None => false,
        }
    }
}

/// Squares that resolve a single check: the checker itself plus any interposing squares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CheckMask {
    squares: Vec<Square>,
}

impl CheckMask {
    fn contains(&self, sq: Square) -> bool {
        self.squares.contains(&sq)
    }
}

/// Check and pin geometry around the king of the side to move.
#[derive(Debug, Clone)]
pub(crate) struct KingSafety {
    /// One entry per checking piece.
    pub(crate) checks: Vec<CheckMask>,
    pub(crate) pins: PinMap,
}

/// Unit step from `from` toward `to` when they share a rank, file, or diagonal.
fn step_between(from: Square, to: Square) -> Option<Direction> {
    let d_row = to.row() as i8 - from.row() as i8;
    let d_col = to.col() as i8 - from.col() as i8;
    if (d_row, d_col) == (0, 0) {
        return None;
    }
    if d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs() {
        Some((d_row.signum(), d_col.signum()))
    } else {
        None
    }
}

/// Scan outward from the king of the side to move and collect checkers and pins.
pub(crate) fn king_safety(state: &GameState) -> KingSafety {
    let board = state.board();
    let us = state.side_to_move();
    let king_sq = state.king_square(us);
    let mut checks = Vec::new();
    let mut pins = PinMap::empty();

    for (direction, diagonal) in ORTHOGONALS
        .into_iter()
        .map(|d| (d, false))
        .chain(DIAGONALS.into_iter().map(|d| (d, true)))
    {
        let (d_row, d_col) = direction;
        let mut path = Vec::new();
        let mut shield: Option<Square> = None;
        let mut cursor = king_sq;

        while let Some(sq) = cursor.offset(d_row, d_col) {
            cursor = sq;
            let Some(piece) = board.piece_at(sq) else {
                if shield.is_none() {
                    path.push(sq);
                }
                continue;
            };

            if piece.color() == us {
                if shield.is_some() {
                    break;
                }
                shield = Some(sq);
                continue;
            }

            let slides_here = match piece.kind() {
                PieceKind::Queen => true,
                PieceKind::Bishop => diagonal,
                PieceKind::Rook => !diagonal,
                _ => false,
            };
            if slides_here {
                match shield {
                    None => {
                        path.push(sq);
                        checks.push(CheckMask { squares: path });
                    }
                    Some(pinned) => {
                        pins.lines[pinned.row() as usize][pinned.col() as usize] =
                            Some(direction);
                    }
                }
            }
            break;
        }
    }

    for (d_row, d_col) in KNIGHT_OFFSETS {
        if let Some(sq) = king_sq.offset(d_row, d_col)
            && board
                .piece_at(sq)
                .is_some_and(|p| p.is(us.flip(), PieceKind::Knight))
        {
            checks.push(CheckMask { squares: vec![sq] });
        }
    }

    // Enemy pawns capture toward us, so they sit one step ahead of the king.
    for side in [-1, 1] {
        if let Some(sq) = king_sq.offset(us.forward(), side)
            && board
                .piece_at(sq)
                .is_some_and(|p| p.is(us.flip(), PieceKind::Pawn))
        {
            checks.push(CheckMask { squares: vec![sq] });
        }
    }

    KingSafety { checks, pins }
}

impl GameState {
    /// Pin-aware equivalent of [`legal_moves`](GameState::legal_moves).
    ///
    /// Checkers and pins are computed once. Ordinary moves are then accepted or rejected
    /// from that geometry alone; king moves and en passant captures, whose safety depends
    /// on squares the geometry does not describe, are still simulated. Returns the same
    /// move set and sets the same terminal flags as the simulating filter.
    pub fn legal_moves_with_pins(&mut self) -> Vec<Move> {
        let mover = self.side_to_move;
        let safety = king_safety(self);
        let in_check = !safety.checks.is_empty();
        let mut moves = self.pseudo_legal_moves();
        let candidates = moves.len();

        moves.retain(|&mv| {
            if mv.piece_moved().kind() == PieceKind::King || mv.is_en_passant() {
                return self.survives(mv, mover);
            }
            if !safety.pins.allows(&mv) {
                return false;
            }
            match safety.checks.as_slice() {
                [] => true,
                [single] => single.contains(mv.end()),
                _ => false,
            }
        });

        self.classify(moves.is_empty(), in_check);
        trace!(
            side = mover.name(),
            candidates,
            legal = moves.len(),
            pinned = safety.pins.lines.iter().flatten().flatten().count(),
            "pin-aware legal moves generated"
        );
        moves
    }
}
