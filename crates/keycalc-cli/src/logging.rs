//! Tracing subscriber setup
//!
//! The filter comes from `KEYCALC_LOG` when set, otherwise from the
//! verbosity flags. The terminal UI owns the screen, so there logs go to
//! `--log-file` or nowhere.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;
use crate::error::{CliError, CliResult};

/// Environment variable holding a filter directive, e.g. `keycalc=debug`
pub const LOG_ENV: &str = "KEYCALC_LOG";

/// Where log lines are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error
    Stderr,
    /// Appended to a file
    File(PathBuf),
    /// Logging disabled
    Off,
}

/// Logging options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Level used when `KEYCALC_LOG` is unset
    pub verbosity: Verbosity,
    /// Destination
    pub target: LogTarget,
    /// JSON lines instead of text
    pub json: bool,
    /// ANSI colors (stderr only)
    pub ansi: bool,
}

impl LogConfig {
    /// Picks the target for a run: an explicit file always wins, otherwise
    /// stderr unless the terminal UI is running
    #[must_use]
    pub fn for_run(verbosity: Verbosity, log_file: Option<PathBuf>, interactive: bool) -> Self {
        let target = match log_file {
            Some(path) => LogTarget::File(path),
            None if interactive => LogTarget::Off,
            None => LogTarget::Stderr,
        };
        Self {
            verbosity,
            target,
            json: false,
            ansi: false,
        }
    }

    /// Set JSON output
    #[must_use]
    pub const fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Set ANSI colors
    #[must_use]
    pub const fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    /// Builds the filter from `directive` (usually `KEYCALC_LOG`) or the verbosity
    pub fn filter(&self, directive: Option<&str>) -> CliResult<EnvFilter> {
        match directive {
            Some(directive) => {
                EnvFilter::try_new(directive).map_err(|e| CliError::logging(format!("{LOG_ENV}: {e}")))
            }
            None => Ok(EnvFilter::new(self.verbosity.log_directive())),
        }
    }
}

/// Installs the global subscriber
pub fn init(config: &LogConfig) -> CliResult<()> {
    let directive = std::env::var(LOG_ENV).ok();
    let filter = config.filter(directive.as_deref())?;
    match &config.target {
        LogTarget::Off => Ok(()),
        LogTarget::Stderr => install(config.json, config.ansi, filter, std::io::stderr),
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            install(config.json, false, filter, Mutex::new(file))
        }
    }
}

fn install<W>(json: bool, ansi: bool, filter: EnvFilter, writer: W) -> CliResult<()>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(true);
    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| CliError::logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_run_targets() {
        let tui = LogConfig::for_run(Verbosity::Normal, None, true);
        assert_eq!(tui.target, LogTarget::Off);

        let batch = LogConfig::for_run(Verbosity::Normal, None, false);
        assert_eq!(batch.target, LogTarget::Stderr);

        let file = LogConfig::for_run(Verbosity::Normal, Some("x.log".into()), true);
        assert_eq!(file.target, LogTarget::File("x.log".into()));
    }

    #[test]
    fn test_builders() {
        let config = LogConfig::for_run(Verbosity::Debug, None, false)
            .with_json(true)
            .with_ansi(true);
        assert!(config.json);
        assert!(config.ansi);
    }

    #[test]
    fn test_filter_from_verbosity() {
        let config = LogConfig::for_run(Verbosity::Verbose, None, false);
        let filter = config.filter(None).unwrap();
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn test_filter_from_directive() {
        let config = LogConfig::for_run(Verbosity::Quiet, None, false);
        let filter = config.filter(Some("keycalc=trace")).unwrap();
        assert_eq!(filter.to_string(), "keycalc=trace");
    }

    #[test]
    fn test_filter_bad_directive() {
        let config = LogConfig::for_run(Verbosity::Normal, None, false);
        let err = config.filter(Some("keycalc=loudest")).unwrap_err();
        assert!(err.to_string().contains(LOG_ENV));
    }

    #[test]
    fn test_init_off_is_noop() {
        let config = LogConfig::for_run(Verbosity::Normal, None, true);
        init(&config).unwrap();
    }
}
