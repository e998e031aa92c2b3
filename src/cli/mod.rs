//! CLI subsystem: argument parsing, command dispatch and I/O.

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::run;
pub use errors::{CliError, CliErrorCode, CliResult};
