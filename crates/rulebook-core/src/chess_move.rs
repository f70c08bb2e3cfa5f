//! Move descriptors.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::board::Board;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// A transition between two squares, carrying everything needed to reverse it.
///
/// The moved and captured pieces are snapshots of the board the move was built against.
/// Equality and hashing look at `(start, end)` only, so a descriptor built from a pair of
/// clicks compares equal to the generator's flagged descriptor for the same squares.
#[derive(Clone, Copy)]
pub struct Move {
    start: Square,
    end: Square,
    piece_moved: Piece,
    piece_captured: Option<Piece>,
    pawn_double_step: bool,
    en_passant: bool,
    promotion: bool,
}

impl Move {
    /// Build a move from the pieces currently on `board`.
    ///
    /// Returns `None` if `start` is empty.
    pub fn new(start: Square, end: Square, board: &Board) -> Option<Move> {
        let piece = board.piece_at(start)?;
        Some(Move::with_piece(start, end, piece, board.piece_at(end)))
    }

    /// Build an en passant capture. The captured pawn is the opponent's pawn standing
    /// beside `start`, not the (empty) destination square.
    pub fn new_en_passant(start: Square, end: Square, board: &Board) -> Option<Move> {
        let piece = board.piece_at(start)?;
        Some(Move::en_passant_with_piece(start, end, piece))
    }

    pub(crate) fn with_piece(
        start: Square,
        end: Square,
        piece: Piece,
        captured: Option<Piece>,
    ) -> Move {
        let is_pawn = piece.kind() == PieceKind::Pawn;
        Move {
            start,
            end,
            piece_moved: piece,
            piece_captured: captured,
            pawn_double_step: is_pawn && start.row().abs_diff(end.row()) == 2,
            en_passant: false,
            promotion: is_pawn && end.row() == piece.color().promotion_row(),
        }
    }

    pub(crate) fn en_passant_with_piece(start: Square, end: Square, piece: Piece) -> Move {
        let victim = Piece::new(PieceKind::Pawn, piece.color().flip());
        Move {
            en_passant: true,
            ..Move::with_piece(start, end, piece, Some(victim))
        }
    }

    #[inline]
    pub fn start(&self) -> Square {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Square {
        self.end
    }

    /// The piece that moves, as it stood on `start`. For promotions this is the pawn.
    #[inline]
    pub fn piece_moved(&self) -> Piece {
        self.piece_moved
    }

    /// The piece removed by this move, if any.
    #[inline]
    pub fn piece_captured(&self) -> Option<Piece> {
        self.piece_captured
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    #[inline]
    pub fn is_pawn_double_step(&self) -> bool {
        self.pawn_double_step
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        self.en_passant
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        self.promotion
    }

    /// Square of the pawn removed by an en passant capture: same row as `start`,
    /// same column as `end`.
    #[inline]
    pub fn en_passant_victim(&self) -> Square {
        Square::new(self.start.row(), self.end.col())
    }

    /// Short display notation: piece letter and destination, e.g. `Nf3` or `Pe4`.
    ///
    /// Carries no capture mark, check suffix, or disambiguation.
    pub fn notation(&self) -> String {
        format!("{}{}", self.piece_moved.kind().letter(), self.end)
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Move) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.start, self.end)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({} {:?}", self, self.piece_moved)?;
        if let Some(captured) = self.piece_captured {
            write!(f, " x{captured:?}")?;
        }
        if self.en_passant {
            write!(f, " ep")?;
        }
        if self.promotion {
            write!(f, " promo")?;
        }
        write!(f, ")")
    }
}
