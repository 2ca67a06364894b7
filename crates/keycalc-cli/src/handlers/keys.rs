//! Key replay: `keycalc keys <SEQUENCE>`

use console::style;
use serde::Serialize;
use tracing::info;

use keycalc::config::Settings;
use keycalc::core::history::HistoryEntry;
use keycalc::core::Snapshot;
use keycalc::prelude::{Action, Notification, Session, Severity};

use crate::commands::{KeysArgs, OutputFormat};
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// Final state after replaying a key sequence
#[derive(Debug, Clone, Serialize)]
pub struct KeysReport {
    /// Presentation-facing state
    #[serde(flatten)]
    pub snapshot: Snapshot,
    /// Notifications raised along the way, in order
    pub notifications: Vec<Notification>,
    /// Completed equations, oldest first
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<HistoryEntry>>,
}

impl KeysReport {
    /// Number of error notifications
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.notifications
            .iter()
            .filter(|n| n.severity == Severity::Error)
            .count()
    }
}

/// Feeds every character of `sequence` through the keystroke table
#[must_use]
pub fn replay(settings: &Settings, sequence: &str, with_history: bool) -> KeysReport {
    let mut session = Session::with_settings(settings);
    let notifications = session.dispatch_all(Action::parse_sequence(sequence));
    info!(
        keys = sequence.chars().count(),
        notifications = notifications.len(),
        "replay finished"
    );
    KeysReport {
        snapshot: session.snapshot(),
        notifications,
        history: with_history.then(|| session.history().iter().cloned().collect()),
    }
}

/// Human-readable rendering: notifications, equation label, then display
#[must_use]
pub fn render_text(report: &KeysReport) -> String {
    let mut lines = Vec::new();
    for note in &report.notifications {
        let tag = match note.severity {
            Severity::Error => style(note.severity.to_string()).red().bold(),
            Severity::Info => style(note.severity.to_string()).cyan(),
        };
        lines.push(format!("{tag}: {}", note.message));
    }
    lines.push(style(&report.snapshot.equation).bold().to_string());
    if !report.snapshot.display.is_empty() {
        lines.push(report.snapshot.display.clone());
    }
    if let Some(history) = &report.history {
        lines.push(style("history:").dim().to_string());
        lines.extend(history.iter().map(|entry| format!("  {}", entry.display())));
    }
    lines.join("\n")
}

/// JSON rendering of the whole report
pub fn render_json(report: &KeysReport) -> CliResult<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Runs the keys command
pub fn run_keys(config: &CliConfig, settings: &Settings, args: &KeysArgs) -> CliResult<()> {
    let report = replay(settings, &args.sequence, args.history);
    let output = match args.format {
        OutputFormat::Text => render_text(&report),
        OutputFormat::Json => render_json(&report)?,
    };
    println!("{output}");

    let errors = report.error_count();
    if config.verbosity.is_verbose() {
        eprintln!(
            "{}",
            style(format!(
                "replayed {} key(s), {errors} error(s)",
                Action::parse_sequence(&args.sequence).count()
            ))
            .dim()
        );
    }
    if args.strict && errors > 0 {
        return Err(CliError::calculation(format!(
            "{errors} error(s) raised while replaying keys"
        )));
    }
    Ok(())
}
