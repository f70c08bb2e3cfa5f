//! FEN parsing and serialization for [`GameState`].
//!
//! Only the fields this engine models survive a round trip: placement, side to move, and
//! the en passant square. The castling field is accepted and discarded, and the move
//! counters are optional.

use std::fmt;
use std::fmt::Write as _;
use std::str::FromStr;

use crate::board::Board;
use crate::color::Color;
use crate::error::FenError;
use crate::game_state::GameState;
use crate::piece::Piece;
use crate::square::Square;

/// The FEN string for the standard starting position, in the form this crate writes it.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - -";

impl FromStr for GameState {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<GameState, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if !(4..=6).contains(&fields.len()) {
            return Err(FenError::WrongFieldCount {
                found: fields.len(),
            });
        }

        let board = parse_placement(fields[0])?;

        let side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidColor {
                    found: other.to_string(),
                });
            }
        };

        let castling = fields[2];
        if castling != "-" && !castling.chars().all(|c| "KQkq".contains(c)) {
            return Err(FenError::InvalidCastling {
                found: castling.to_string(),
            });
        }

        let en_passant = match fields[3] {
            "-" => None,
            field => Some(
                Square::from_algebraic(field)
                    .filter(|sq| sq.row() == 2 || sq.row() == 5)
                    .ok_or_else(|| FenError::InvalidEnPassant {
                        found: field.to_string(),
                    })?,
            ),
        };

        for (field, value) in ["halfmove clock", "fullmove number"].into_iter().zip(&fields[4..]) {
            value
                .parse::<u16>()
                .map_err(|_| FenError::InvalidMoveCounter {
                    field,
                    found: value.to_string(),
                })?;
        }

        Ok(GameState::from_board(board, side_to_move, en_passant)?)
    }
}

fn parse_placement(placement: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    let mut board = Board::empty();
    // FEN lists the eighth rank first, which is row 0.
    for (rank_index, rank_str) in ranks.iter().enumerate() {
        let mut col: u8 = 0;
        for c in rank_str.chars() {
            if let Some(digit) = c.to_digit(10) {
                if !(1..=8).contains(&digit) {
                    return Err(FenError::InvalidPieceChar { character: c });
                }
                col += digit as u8;
            } else {
                let piece =
                    Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
                let sq = Square::from_coords(rank_index as u8, col).ok_or(
                    FenError::BadRankLength {
                        rank_index,
                        length: col as usize + 1,
                    },
                )?;
                board.set(sq, Some(piece));
                col += 1;
            }
        }

        if col != 8 {
            return Err(FenError::BadRankLength {
                rank_index,
                length: col as usize,
            });
        }
    }
    Ok(board)
}

/// Serialize the piece placement field of `board`.
pub(crate) fn placement(board: &Board) -> String {
    let mut out = String::with_capacity(64);
    for (row, cells) in board.rows().iter().enumerate() {
        let mut empty_count = 0u8;
        for cell in cells {
            match cell {
                Some(piece) => {
                    if empty_count > 0 {
                        let _ = write!(out, "{empty_count}");
                        empty_count = 0;
                    }
                    out.push(piece.fen_char());
                }
                None => empty_count += 1,
            }
        }
        if empty_count > 0 {
            let _ = write!(out, "{empty_count}");
        }
        if row < 7 {
            out.push('/');
        }
    }
    out
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} -", placement(self.board()), self.side_to_move())?;
        match self.en_passant() {
            Some(sq) => write!(f, " {sq}"),
            None => write!(f, " -"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::STARTING_FEN;
    use crate::color::Color;
    use crate::error::{BoardError, FenError};
    use crate::game_state::GameState;
    use crate::square::Square;

    fn roundtrip(fen: &str) {
        let state: GameState = fen.parse().unwrap();
        assert_eq!(state.to_string(), fen, "FEN roundtrip failed");
    }

    #[test]
    fn roundtrip_positions() {
        roundtrip(STARTING_FEN);
        roundtrip("rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w - c6");
        roundtrip("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -");
        roundtrip("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b - e3");
    }

    #[test]
    fn starting_position_matches_fen() {
        let from_fen: GameState = STARTING_FEN.parse().unwrap();
        let fresh = GameState::new();
        assert_eq!(from_fen.board(), fresh.board());
        assert_eq!(from_fen.side_to_move(), Color::White);
        assert_eq!(from_fen.king_square(Color::Black), fresh.king_square(Color::Black));
        assert_eq!(fresh.to_string(), STARTING_FEN);
    }

    #[test]
    fn six_field_fen_accepted() {
        let state: GameState = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
            .parse()
            .unwrap();
        assert_eq!(state.board(), GameState::new().board());
    }

    #[test]
    fn en_passant_field_parsed() {
        let state: GameState = "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1".parse().unwrap();
        assert_eq!(state.en_passant(), Square::from_algebraic("d6"));
    }

    #[test]
    fn error_wrong_field_count() {
        assert_eq!(
            "e4 e5".parse::<GameState>().unwrap_err(),
            FenError::WrongFieldCount { found: 2 }
        );
    }

    #[test]
    fn error_invalid_piece_char() {
        let result = "rnbqkbnr/pppppppp/8/8/8/8/PPPPXPPP/RNBQKBNR w - -".parse::<GameState>();
        assert_eq!(result.unwrap_err(), FenError::InvalidPieceChar { character: 'X' });
    }

    #[test]
    fn error_bad_rank_length() {
        let short = "rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - -".parse::<GameState>();
        assert!(matches!(short, Err(FenError::BadRankLength { rank_index: 1, .. })));
        let long = "rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w - -".parse::<GameState>();
        assert!(long.is_err());
    }

    #[test]
    fn error_invalid_fields() {
        assert!(matches!(
            "4k3/8/8/8/8/8/8/4K3 x - -".parse::<GameState>(),
            Err(FenError::InvalidColor { .. })
        ));
        assert!(matches!(
            "4k3/8/8/8/8/8/8/4K3 w XQ -".parse::<GameState>(),
            Err(FenError::InvalidCastling { .. })
        ));
        assert!(matches!(
            "4k3/8/8/8/8/8/8/4K3 w - e4".parse::<GameState>(),
            Err(FenError::InvalidEnPassant { .. })
        ));
        assert!(matches!(
            "4k3/8/8/8/8/8/8/4K3 w - - abc 1".parse::<GameState>(),
            Err(FenError::InvalidMoveCounter { .. })
        ));
    }

    #[test]
    fn error_invalid_board() {
        assert_eq!(
            "8/8/8/8/8/8/8/4K3 w - -".parse::<GameState>().unwrap_err(),
            FenError::InvalidBoard {
                source: BoardError::InvalidKingCount {
                    color: "black",
                    count: 0
                }
            }
        );
    }

    #[test]
    fn error_en_passant_inconsistent_with_board() {
        let rejected = |fen: &str| match fen.parse::<GameState>() {
            Err(FenError::InvalidBoard {
                source: BoardError::InvalidEnPassant { square },
            }) => square,
            other => panic!("expected en passant rejection for {fen}, got {other:?}"),
        };
        let e3 = Square::from_algebraic("e3").unwrap();

        // White to move, but e3 is a square only Black captures onto.
        assert_eq!(rejected("4k3/8/8/8/8/8/3PK3/8 w - e3"), e3);
        // No pawn beyond the target.
        assert_eq!(rejected("4k3/8/8/8/8/8/8/4K3 b - e3"), e3);
        // The pawn beyond the target belongs to the side to move.
        assert_eq!(rejected("4k3/8/8/8/4p3/8/8/4K3 b - e3"), e3);
        // Target occupied.
        assert_eq!(rejected("4k3/8/8/8/4P3/4N3/8/4K3 b - e3"), e3);
        // Origin occupied.
        assert_eq!(rejected("4k3/8/8/8/4P3/8/4P3/4K3 b - e3"), e3);
    }

    #[test]
    fn en_passant_target_matching_board_accepted() {
        let state: GameState = "4k3/8/8/8/4P3/8/8/4K3 b - e3".parse().unwrap();
        assert_eq!(state.en_passant(), Square::from_algebraic("e3"));
    }
}
