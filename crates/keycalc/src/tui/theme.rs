//! Terminal colors derived from [`ThemeSettings`]

use ratatui::style::Color;

use crate::config::{ConfigError, Rgb, ThemeMode, ThemeSettings};

/// Resolved colors used by every widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Special keypad buttons and borders
    pub primary: Color,
    /// Highlighted text (equation label, history)
    pub highlight: Color,
    /// Pressed button background
    pub pressed: Color,
    /// Regular text
    pub foreground: Color,
    /// Dimmed text (placeholders, help)
    pub muted: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // The default primary color always parses
        Self::from_settings(&ThemeSettings::default()).unwrap_or(Self {
            primary: Color::Cyan,
            highlight: Color::Blue,
            pressed: Color::DarkGray,
            foreground: Color::White,
            muted: Color::Gray,
        })
    }
}

impl Theme {
    /// Builds the theme, failing on a malformed primary color
    pub fn from_settings(settings: &ThemeSettings) -> Result<Self, ConfigError> {
        let [primary, highlight, pressed] = settings.palette()?;
        let (foreground, muted) = match settings.mode {
            ThemeMode::Dark => (Color::White, Color::DarkGray),
            ThemeMode::Light => (Color::Black, Color::Gray),
        };
        Ok(Self {
            primary: rgb(primary),
            highlight: rgb(highlight),
            pressed: rgb(pressed),
            foreground,
            muted,
        })
    }
}

const fn rgb(Rgb(r, g, b): Rgb) -> Color {
    Color::Rgb(r, g, b)
}
