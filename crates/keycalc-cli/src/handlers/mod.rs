//! Command handlers

pub mod keys;
pub mod tui;

use keycalc::config::Settings;

use crate::commands::ConfigArgs;
use crate::error::CliResult;

/// Renders the effective settings (or the built-in defaults) as YAML
pub fn show_config(settings: &Settings, args: &ConfigArgs) -> CliResult<String> {
    let yaml = if args.defaults {
        Settings::default().to_yaml_string()?
    } else {
        settings.to_yaml_string()?
    };
    Ok(yaml)
}
