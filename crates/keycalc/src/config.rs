//! Presentation settings
//!
//! Loaded once at startup (usually from a YAML file) and never consulted by
//! the arithmetic itself, only by whoever builds the session and the UI.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::history::History;
use crate::core::machine::DEFAULT_EQUATION_PLACEHOLDER;

/// Default primary color for special keypad buttons
pub const DEFAULT_PRIMARY_COLOR: &str = "#1e81b0";

/// Errors from reading settings
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The YAML could not be parsed
    #[error("invalid settings: {0}")]
    Parse(#[from] serde_yaml_ng::Error),
    /// A color was not `#rrggbb`
    #[error("invalid color {0:?}: expected #rrggbb")]
    Color(String),
}

/// Light or dark palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light text on a dark background
    #[default]
    Dark,
    /// Dark text on a light background
    Light,
}

/// An RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parses `#rrggbb` (the `#` is optional)
    pub fn parse_hex(text: &str) -> Result<Self, ConfigError> {
        let hex = text.strip_prefix('#').unwrap_or(text);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ConfigError::Color(text.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ConfigError::Color(text.to_string()))
        };
        Ok(Self(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Scales every channel by `factor` (0.0..=1.0)
    #[must_use]
    pub fn darken(self, factor: f32) -> Self {
        let scale = |c: u8| (f32::from(c) * factor.clamp(0.0, 1.0)).round() as u8;
        Self(scale(self.0), scale(self.1), scale(self.2))
    }
}

/// Colors for the terminal UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
    /// Palette
    pub mode: ThemeMode,
    /// Primary color as `#rrggbb`
    pub primary: String,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            mode: ThemeMode::Dark,
            primary: DEFAULT_PRIMARY_COLOR.to_string(),
        }
    }
}

impl ThemeSettings {
    /// Primary color, then a darker shade for highlights and a darkest one
    /// for pressed buttons
    pub fn palette(&self) -> Result<[Rgb; 3], ConfigError> {
        let primary = Rgb::parse_hex(&self.primary)?;
        Ok([primary, primary.darken(0.8), primary.darken(0.6)])
    }
}

/// Everything configurable about the calculator front end
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Equation label shown before any computation and after clear
    pub equation_placeholder: String,
    /// Maximum entries kept in the operation log
    pub history_capacity: usize,
    /// Terminal colors
    pub theme: ThemeSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            equation_placeholder: DEFAULT_EQUATION_PLACEHOLDER.to_string(),
            history_capacity: History::DEFAULT_MAX_ENTRIES,
            theme: ThemeSettings::default(),
        }
    }
}

impl Settings {
    /// Parses YAML; missing keys take their defaults
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let settings: Self = serde_yaml_ng::from_str(yaml)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Renders the settings as YAML
    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Checks values serde cannot
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.theme.palette().map(|_| ())
    }
}
