//! Chess rules: board state, move generation, legality, and terminal detection.
//!
//! Everything revolves around a single owned [`GameState`]. Moves are generated as
//! pseudo-legal candidates, filtered by applying and undoing each one, and played with
//! [`GameState::apply`] / [`GameState::undo`]. Castling is not part of the rules modelled.

mod board;
mod chess_move;
mod color;
mod error;
mod fen;
mod game_state;
mod make_move;
mod movegen;
pub mod perft;
mod piece;
mod piece_kind;
mod square;

pub use board::{Board, PrettyBoard};
pub use chess_move::Move;
pub use color::Color;
pub use error::{BoardError, FenError, MoveError};
pub use fen::STARTING_FEN;
pub use game_state::{GameState, GameStatus};
pub use movegen::pseudo_legal_moves;
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use square::Square;
