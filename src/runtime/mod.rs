//! Runtime driving catalog sessions.
//!
//! - [`session`]: Event loop executing actions against the store and history
//! - [`commands`]: Line commands of the interactive shell

pub mod commands;
pub mod session;

pub use commands::{parse_command, Command, HELP};
pub use session::Session;
