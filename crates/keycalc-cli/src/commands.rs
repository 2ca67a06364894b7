//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// keycalc: keyboard and keypad driven calculator
#[derive(Parser, Debug)]
#[command(name = "keycalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Settings file (YAML)
    #[arg(long, global = true, env = "KEYCALC_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write logs to a file instead of stderr
    #[arg(long, global = true, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Subcommand to run (defaults to the terminal UI)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the interactive terminal calculator
    Tui,

    /// Replay a key sequence and print the result
    ///
    /// Each character goes through the same table as the keyboard:
    /// digits and `.`, `+ - * / ^` (or `p`), `=` to resolve, `d` to delete,
    /// `c` to clear and `n` to invert the sign. Other characters are ignored.
    Keys(KeysArgs),

    /// Print the effective settings as YAML
    Config(ConfigArgs),
}

/// Arguments for the keys command
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
pub struct KeysArgs {
    /// Keys to replay, e.g. "12+30="
    #[arg(allow_hyphen_values = true)]
    pub sequence: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Also print the completed equations
    #[arg(long)]
    pub history: bool,

    /// Exit with failure if any error was raised
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the config command
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
pub struct ConfigArgs {
    /// Print built-in defaults, ignoring any settings file
    #[arg(long)]
    pub defaults: bool,
}

/// Output format for the keys command
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// Final state as JSON
    Json,
}

/// Color argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
