//! Text front end for the rulebook chess rules engine.

pub mod command;
pub mod error;
pub mod session;

pub use command::{Command, Setting};
pub use error::CliError;
pub use session::{Session, SessionConfig};
