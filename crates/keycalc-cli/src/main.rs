//! keycalc: keyboard and keypad driven calculator
//!
//! ## Usage
//!
//! ```bash
//! keycalc                          # Interactive terminal calculator
//! keycalc keys "12+30="            # Replay keys, print the result
//! keycalc keys "2^10=" -f json     # Same, as JSON
//! keycalc config --defaults        # Print the default settings
//! ```

use clap::Parser;
use keycalc_cli::{
    handlers, load_settings, logging, Cli, CliConfig, CliResult, ColorChoice, Commands,
    LogConfig, Verbosity,
};
use std::process::ExitCode;
use tracing::debug;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    let config = build_config(&cli);
    config.color.apply();

    let command = cli.command.clone().unwrap_or(Commands::Tui);
    let interactive = command == Commands::Tui;
    logging::init(
        &LogConfig::for_run(config.verbosity, cli.log_file.clone(), interactive)
            .with_json(cli.log_json)
            .with_ansi(console::colors_enabled_stderr()),
    )?;

    let settings = load_settings(cli.config.as_deref())?;
    debug!(?command, "dispatching");

    match command {
        Commands::Tui => handlers::tui::run_tui(&settings),
        Commands::Keys(args) => handlers::keys::run_keys(&config, &settings, &args),
        Commands::Config(args) => {
            print!("{}", handlers::show_config(&settings, &args)?);
            Ok(())
        }
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);
    let color: ColorChoice = cli.color.into();
    CliConfig::new().with_verbosity(verbosity).with_color(color)
}
