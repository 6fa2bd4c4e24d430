//! hr-cli library
//!
//! The `hr` binary's shell, logger and errors, exported for tests.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod shell;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use error::{CliError, Result as CliResult};
pub use shell::{Reply, Shell, split_line};
