//! TUI application state
//!
//! Wraps a [`Session`] with the keypad highlight state and a pending
//! notification. While a notification is pending the next key press only
//! dismisses it, the same way a modal dialog blocks the window behind it.

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use tracing::debug;

use super::input::{InputHandler, KeyAction};
use super::keypad::Keypad;
use super::theme::Theme;
use super::ui::keypad_rect;
use crate::action::Action;
use crate::config::{ConfigError, Settings};
use crate::session::{Notification, Outcome, Session};

/// Message shown after Ctrl+L
pub const CLEARED_MESSAGE: &str = "Operation log cleared";

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    session: Session,
    keypad: Keypad,
    input: InputHandler,
    theme: Theme,
    notification: Option<Notification>,
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::from_parts(Session::new(), Theme::default())
    }
}

impl CalculatorApp {
    /// Creates a calculator app with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator app from settings, failing on a bad theme color
    pub fn with_settings(settings: &Settings) -> Result<Self, ConfigError> {
        let theme = Theme::from_settings(&settings.theme)?;
        Ok(Self::from_parts(Session::with_settings(settings), theme))
    }

    fn from_parts(session: Session, theme: Theme) -> Self {
        Self {
            session,
            keypad: Keypad::new(),
            input: InputHandler::new(),
            theme,
            notification: None,
            should_quit: false,
        }
    }

    /// Returns the session
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the keypad
    #[must_use]
    pub const fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the theme
    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    /// Returns the notification waiting to be dismissed
    #[must_use]
    pub const fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// Returns whether the app should quit
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Dismisses the pending notification
    pub fn dismiss_notification(&mut self) {
        if let Some(n) = self.notification.take() {
            debug!(message = %n.message, "notification dismissed");
        }
    }

    /// Handles a key event
    pub fn handle_key(&mut self, event: KeyEvent) {
        let key_action = self.input.handle_key(event);
        if key_action == KeyAction::Quit {
            self.quit();
            return;
        }
        if self.notification.is_some() {
            if key_action != KeyAction::None {
                self.dismiss_notification();
            }
            return;
        }
        match key_action {
            KeyAction::Calculator(action) => self.apply(action),
            KeyAction::ClearAll => self.clear_all(),
            KeyAction::Quit | KeyAction::None => {}
        }
    }

    /// Handles a mouse click at screen coordinates, given the full screen area
    pub fn handle_click(&mut self, screen: Rect, x: u16, y: u16) {
        if self.notification.is_some() {
            self.dismiss_notification();
            return;
        }
        if let Some(idx) = self.keypad.hit_test(keypad_rect(screen), x, y) {
            self.press_button(idx);
        }
    }

    /// Presses the keypad button at `index`
    pub fn press_button(&mut self, index: usize) {
        if let Some(action) = self.keypad.get_button(index).map(|b| b.action) {
            self.apply(action);
        }
    }

    /// Dispatches one action and lights the matching keypad button
    pub fn apply(&mut self, action: Action) {
        self.keypad.highlight(action);
        if let Outcome::Notify(n) = self.session.dispatch(action) {
            self.notification = Some(n);
        }
    }

    /// Clears the calculator and the operation log
    pub fn clear_all(&mut self) {
        self.session.clear_all();
        self.keypad.release_all();
        self.notification = Some(Notification::info(CLEARED_MESSAGE));
    }
}
