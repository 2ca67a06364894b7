//! Terminal front end
//!
//! Key mapping, the on-screen keypad, application state and ratatui
//! rendering. The terminal itself (raw mode, event loop) is owned by the
//! binary.

mod app;
mod input;
mod keypad;
mod theme;
mod ui;

pub use app::{CalculatorApp, CLEARED_MESSAGE};
pub use input::{InputHandler, KeyAction};
pub use keypad::{Keypad, KeypadButton, KeypadWidget};
pub use theme::Theme;
pub use ui::{keypad_rect, render, CalculatorUI};
