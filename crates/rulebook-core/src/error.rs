//! Error types for position setup and move selection.

use crate::square::Square;

/// Errors that occur when parsing a FEN string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The FEN string does not have 4 to 6 space-separated fields.
    #[error("expected 4 to 6 FEN fields, found {found}")]
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The piece placement section does not have exactly 8 ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank in the piece placement describes more or fewer than 8 squares.
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength {
        /// Zero-based rank index, which is also the board row.
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the piece placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The active color field is not "w" or "b".
    #[error("invalid active color: \"{found}\"")]
    InvalidColor {
        /// The invalid color string.
        found: String,
    },
    /// The castling field is neither "-" nor a set of `KQkq` letters.
    #[error("invalid castling field: \"{found}\"")]
    InvalidCastling {
        /// The invalid castling string.
        found: String,
    },
    /// The en passant field is not "-" or a square on the third or sixth rank.
    ///
    /// Targets that are well formed but do not match the board are reported as
    /// [`BoardError::InvalidEnPassant`] inside [`FenError::InvalidBoard`].
    #[error("invalid en passant square: \"{found}\"")]
    InvalidEnPassant {
        /// The invalid en passant string.
        found: String,
    },
    /// A move counter is not a valid number.
    #[error("invalid {field}: \"{found}\"")]
    InvalidMoveCounter {
        /// The field name ("halfmove clock" or "fullmove number").
        field: &'static str,
        /// The invalid string.
        found: String,
    },
    /// The parsed board fails structural validation.
    #[error("invalid board: {source}")]
    InvalidBoard {
        /// The underlying board validation error.
        #[from]
        source: BoardError,
    },
}

/// Errors from structural validation of a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: &'static str,
        /// Number of kings found.
        count: u32,
    },
    /// Pawns occupy the first or eighth rank.
    #[error("pawns found on back rank")]
    PawnsOnBackRank,
    /// The en passant target does not sit behind a pawn that just double-stepped.
    #[error("no double-stepped pawn behind en passant square {square}")]
    InvalidEnPassant {
        /// The rejected target square.
        square: Square,
    },
}

/// Rejection of a selected `(start, end)` pair.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The pair does not match any legal move in the current position.
    #[error("{start}{end} is not a legal move")]
    Illegal {
        /// The selected origin square.
        start: Square,
        /// The selected destination square.
        end: Square,
    },
}

#[cfg(test)]
mod tests {
    use super::{BoardError, FenError, MoveError};
    use crate::square::Square;

    #[test]
    fn fen_error_display() {
        let err = FenError::WrongFieldCount { found: 2 };
        assert_eq!(format!("{err}"), "expected 4 to 6 FEN fields, found 2");
    }

    #[test]
    fn fen_error_from_board_error() {
        let fen_err: FenError = BoardError::PawnsOnBackRank.into();
        assert!(matches!(fen_err, FenError::InvalidBoard { .. }));
        assert_eq!(format!("{fen_err}"), "invalid board: pawns found on back rank");
    }

    #[test]
    fn en_passant_error_names_square() {
        let err = BoardError::InvalidEnPassant {
            square: Square::new(5, 4),
        };
        assert_eq!(format!("{err}"), "no double-stepped pawn behind en passant square e3");
    }

    #[test]
    fn move_error_display() {
        let err = MoveError::Illegal {
            start: Square::new(6, 4),
            end: Square::new(3, 4),
        };
        assert_eq!(format!("{err}"), "e2e5 is not a legal move");
    }
}
