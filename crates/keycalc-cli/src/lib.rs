//! keycalc CLI library
//!
//! Argument parsing, settings loading, logging setup and the command
//! handlers behind the `keycalc` binary.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;

pub use commands::{Cli, ColorArg, Commands, ConfigArgs, KeysArgs, OutputFormat};
pub use config::{load_settings, CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use logging::{LogConfig, LogTarget};
