//! Text session errors.

use rulebook_core::FenError;

/// Errors that can occur while parsing or executing session commands.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A `move` command whose squares could not be read.
    #[error("invalid move: {input}")]
    InvalidMove {
        /// The arguments as typed.
        input: String,
    },

    /// A `moves` command naming something other than a square.
    #[error("invalid square: {square}")]
    InvalidSquare {
        /// The token that failed to parse.
        square: String,
    },

    /// The `position` command is missing `startpos` or `fen` keyword.
    #[error("malformed position command: missing startpos or fen keyword")]
    MalformedPosition,

    /// Failed to parse a FEN string.
    #[error("invalid FEN: {fen} ({source})")]
    InvalidFen {
        /// The FEN string that failed to parse.
        fen: String,
        source: FenError,
    },

    /// A `set` command with an unknown name or a value other than `on`/`off`.
    #[error("invalid setting: {name} {value}")]
    InvalidSetting { name: String, value: String },

    /// The depth value in `perft` is not a number up to the session limit.
    #[error("invalid depth: {value} (expected 0 to {max})", max = crate::command::MAX_PERFT_DEPTH)]
    InvalidDepth {
        /// The depth string that failed to parse.
        value: String,
    },

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
