//! Session command parsing.

use rulebook_core::{GameState, Square};

use crate::error::CliError;

/// A session option changed by `set <name> <on|off>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    /// `show_board` -- print the board after every position change.
    ShowBoard(bool),
    /// `show_notation` -- echo the notation of each accepted move.
    ShowNotation(bool),
}

/// A parsed session command.
#[derive(Debug)]
pub enum Command {
    /// `move e2e4`, `move e2 e4` or `move 6 4 4 4` -- select a move by its two squares.
    Move { start: Square, end: Square },
    /// `undo` -- take back the last move.
    Undo,
    /// `reset` -- start a new game.
    Reset,
    /// `board` -- print the board.
    Board,
    /// `moves [square]` -- list legal moves, optionally only those leaving `square`.
    Moves(Option<Square>),
    /// `status` -- report side to move and terminal state.
    Status,
    /// `fen` -- print the current position.
    Fen,
    /// `position startpos | fen <fen>` -- replace the game with a new position.
    Position(GameState),
    /// `set <name> <on|off>` -- change a session option.
    Set(Setting),
    /// `perft <depth>` -- per-move leaf counts from the current position, depth at most
    /// [`MAX_PERFT_DEPTH`].
    Perft(usize),
    /// `quit` -- end the session.
    Quit,
    /// Unrecognized command.
    Unknown(String),
}

/// Parse a single line of session input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, CliError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Unknown(String::new()));
    }

    match tokens[0] {
        "move" | "m" => parse_move(&tokens[1..]),
        "undo" => Ok(Command::Undo),
        "reset" | "new" => Ok(Command::Reset),
        "board" => Ok(Command::Board),
        "moves" => parse_moves(&tokens[1..]),
        "status" => Ok(Command::Status),
        "fen" => Ok(Command::Fen),
        "position" => parse_position(&tokens[1..]),
        "set" => parse_set(&tokens[1..]),
        "perft" => parse_perft(&tokens[1..]),
        "quit" | "exit" => Ok(Command::Quit),
        _ => Ok(Command::Unknown(tokens[0].to_string())),
    }
}

/// Parse the `move` arguments.
///
/// Supports:
/// - `move e2e4` and `move e2 e4` (algebraic squares)
/// - `move 6 4 4 4` (start row, start column, end row, end column)
fn parse_move(tokens: &[&str]) -> Result<Command, CliError> {
    let invalid = || CliError::InvalidMove {
        input: tokens.join(" "),
    };

    let squares = match tokens {
        [pair] if pair.len() == 4 => pair
            .get(..2)
            .and_then(Square::from_algebraic)
            .zip(pair.get(2..).and_then(Square::from_algebraic)),
        [from, to] => Square::from_algebraic(from).zip(Square::from_algebraic(to)),
        [start_row, start_col, end_row, end_col] => {
            coords(start_row, start_col).zip(coords(end_row, end_col))
        }
        _ => None,
    };

    let (start, end) = squares.ok_or_else(invalid)?;
    Ok(Command::Move { start, end })
}

fn coords(row: &str, col: &str) -> Option<Square> {
    Square::from_coords(row.parse().ok()?, col.parse().ok()?)
}

fn parse_moves(tokens: &[&str]) -> Result<Command, CliError> {
    match tokens.first() {
        None => Ok(Command::Moves(None)),
        Some(token) => Square::from_algebraic(token)
            .map(|sq| Command::Moves(Some(sq)))
            .ok_or_else(|| CliError::InvalidSquare {
                square: token.to_string(),
            }),
    }
}

/// Parse the `position` command arguments.
///
/// Supports:
/// - `position startpos`
/// - `position fen <fen-string>` with 4 to 6 FEN fields
fn parse_position(tokens: &[&str]) -> Result<Command, CliError> {
    match tokens.first() {
        Some(&"startpos") => Ok(Command::Position(GameState::new())),
        Some(&"fen") => {
            let fen = tokens[1..].join(" ");
            let state = fen.parse().map_err(|source| CliError::InvalidFen {
                fen: fen.clone(),
                source,
            })?;
            Ok(Command::Position(state))
        }
        _ => Err(CliError::MalformedPosition),
    }
}

fn parse_set(tokens: &[&str]) -> Result<Command, CliError> {
    let name = tokens.first().copied().unwrap_or_default();
    let value = tokens.get(1).copied().unwrap_or_default();
    let invalid = || CliError::InvalidSetting {
        name: name.to_string(),
        value: value.to_string(),
    };

    let enabled = match value {
        "on" | "true" => true,
        "off" | "false" => false,
        _ => return Err(invalid()),
    };
    match name {
        "show_board" => Ok(Command::Set(Setting::ShowBoard(enabled))),
        "show_notation" => Ok(Command::Set(Setting::ShowNotation(enabled))),
        _ => Err(invalid()),
    }
}

/// Deepest `perft` the session will run; the walk blocks input until it finishes.
pub const MAX_PERFT_DEPTH: usize = 5;

fn parse_perft(tokens: &[&str]) -> Result<Command, CliError> {
    let value = tokens.first().copied().unwrap_or_default();
    value
        .parse::<usize>()
        .ok()
        .filter(|depth| *depth <= MAX_PERFT_DEPTH)
        .map(Command::Perft)
        .ok_or_else(|| CliError::InvalidDepth {
            value: value.to_string(),
        })
}
