//! Line-oriented game session over stdin/stdout.

use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};

use rulebook_core::perft::divide;
use rulebook_core::{GameState, GameStatus};

use crate::command::{Command, Setting, parse_command};
use crate::error::CliError;

/// Options adjustable via `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Print the board after every accepted move, undo, reset or position change.
    pub show_board: bool,
    /// Echo the display notation of every accepted move.
    pub show_notation: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            show_board: true,
            show_notation: true,
        }
    }
}

/// Whether the session keeps reading input after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A single game driven by text commands.
pub struct Session {
    state: GameState,
    config: SessionConfig,
}

impl Session {
    /// Create a session at the starting position with default options.
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            state: GameState::new(),
            config,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// Run the session loop, reading from stdin until `quit` or input closes.
    pub fn run(mut self) -> Result<(), CliError> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut out = stdout.lock();

        info!(config = ?self.config, "session started");
        self.show_board(&mut out)?;
        out.flush()?;

        for line in stdin.lock().lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let flow = self.handle_line(trimmed, &mut out)?;
            out.flush()?;
            if flow == Flow::Quit {
                break;
            }
        }

        info!(plies = self.state.history().len(), "session shutting down");
        Ok(())
    }

    /// Parse and execute one line of input, writing any response to `out`.
    ///
    /// Parse errors are reported to `out` and do not end the session; only write failures
    /// are returned.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow, CliError> {
        debug!(cmd = %line, "received command");
        match parse_command(line) {
            Ok(cmd) => self.execute(cmd, out),
            Err(e) => {
                warn!(error = %e, "command parse error");
                writeln!(out, "error: {e}")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<Flow, CliError> {
        match cmd {
            Command::Move { start, end } => match self.state.try_move(start, end) {
                Ok(mv) => {
                    if self.config.show_notation {
                        writeln!(out, "{}", mv.notation())?;
                    }
                    self.show_board(out)?;
                    if self.state.status() != GameStatus::Ongoing {
                        self.write_status(out)?;
                    }
                }
                Err(e) => {
                    debug!(error = %e, "move rejected");
                    writeln!(out, "illegal {start}{end}")?;
                }
            },
            Command::Undo => match self.state.undo() {
                Some(mv) => {
                    debug!(mv = %mv, "move undone");
                    writeln!(out, "undone {mv}")?;
                    self.show_board(out)?;
                }
                None => writeln!(out, "nothing to undo")?,
            },
            Command::Reset => {
                self.state.reset();
                writeln!(out, "new game")?;
                self.show_board(out)?;
            }
            Command::Board => writeln!(out, "{}", self.state.board().pretty())?,
            Command::Moves(origin) => {
                let moves = match origin {
                    Some(sq) => self.state.legal_moves_from(sq),
                    None => self.state.legal_moves(),
                };
                let mut listed: Vec<String> = moves.iter().map(ToString::to_string).collect();
                listed.sort();
                writeln!(out, "{}", listed.join(" "))?;
            }
            Command::Status => {
                self.state.legal_moves();
                self.write_status(out)?;
            }
            Command::Fen => writeln!(out, "{}", self.state)?,
            Command::Position(state) => {
                self.state = state;
                self.state.legal_moves();
                debug!(fen = %self.state, "position set");
                self.show_board(out)?;
                if self.state.status() != GameStatus::Ongoing {
                    self.write_status(out)?;
                }
            }
            Command::Set(setting) => {
                let (name, enabled) = match setting {
                    Setting::ShowBoard(on) => {
                        self.config.show_board = on;
                        ("show_board", on)
                    }
                    Setting::ShowNotation(on) => {
                        self.config.show_notation = on;
                        ("show_notation", on)
                    }
                };
                debug!(name, enabled, "session option changed");
                writeln!(out, "{name} {}", if enabled { "on" } else { "off" })?;
            }
            Command::Perft(depth) => {
                let counts = divide(&mut self.state, depth);
                let total: u64 = counts.iter().map(|(_, n)| n).sum();
                for (mv, nodes) in &counts {
                    writeln!(out, "{mv}: {nodes}")?;
                }
                writeln!(out, "total {total}")?;
            }
            Command::Quit => return Ok(Flow::Quit),
            Command::Unknown(name) => {
                if !name.is_empty() {
                    writeln!(out, "unknown command: {name}")?;
                }
            }
        }
        Ok(Flow::Continue)
    }

    fn show_board<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.config.show_board {
            writeln!(out, "{}", self.state.board().pretty())?;
        }
        Ok(())
    }

    fn write_status<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let side = self.state.side_to_move();
        match self.state.status() {
            GameStatus::Checkmate => writeln!(out, "checkmate, {} wins", side.flip().name()),
            GameStatus::Stalemate => writeln!(out, "stalemate"),
            GameStatus::Ongoing if self.state.in_check() => {
                writeln!(out, "{} to move, in check", side.name())
            }
            GameStatus::Ongoing => writeln!(out, "{} to move", side.name()),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
