//! TUI rendering

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Widget, Wrap},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;
use crate::session::{Notification, Severity};

/// Window title
pub const TITLE: &str = " keycalc ";

/// Key bindings shown in the help sidebar
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9 .", "Digits"),
    ("+-*/^", "Operators"),
    ("p", "Power"),
    ("Enter =", "Equals"),
    ("d Bksp", "Delete"),
    ("c Esc", "Clear"),
    ("n", "Invert sign"),
    ("Ctrl+L", "Clear log"),
    ("Ctrl+C", "Quit"),
];

/// Footer of the notification popup
pub const DISMISS_HINT: &str = "Press any key to continue";

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Columns: calculator, keypad, help
fn columns(area: Rect) -> [Rect; 3] {
    Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([
            Constraint::Min(30),
            Constraint::Length(22),
            Constraint::Length(22),
        ])
        .areas(area)
}

/// Where the keypad is drawn for a given screen area.
///
/// Mouse hit-testing uses the same rectangle.
#[must_use]
pub fn keypad_rect(area: Rect) -> Rect {
    columns(area)[1]
}

/// A `width` x `height` rectangle centered in `area`, clamped to fit
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub const fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn bordered(&self, title: &'static str) -> Block<'static> {
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.app.theme().muted))
    }

    fn render_equation(&self, area: Rect, buf: &mut Buffer) {
        let calculator = self.app.session().calculator();
        let theme = self.app.theme();
        let style = if calculator.equation() == calculator.placeholder() {
            Style::default().fg(theme.muted)
        } else {
            Style::default().fg(theme.highlight)
        };
        Paragraph::new(Span::styled(calculator.equation(), style))
            .alignment(Alignment::Right)
            .block(self.bordered(" Equation "))
            .render(area, buf);
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let theme = self.app.theme();
        let entry = self.app.session().calculator().entry();
        Paragraph::new(Span::styled(
            entry,
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .title(" Display ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary)),
        )
        .render(area, buf);
    }

    fn render_history(&self, area: Rect, buf: &mut Buffer) {
        let theme = self.app.theme();
        let items: Vec<ListItem> = self
            .app
            .session()
            .history()
            .iter_rev()
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled(entry.expression.as_str(), Style::default().fg(theme.muted)),
                    Span::raw(" = "),
                    Span::styled(entry.result.to_string(), Style::default().fg(theme.highlight)),
                ]))
            })
            .collect();

        List::new(items)
            .block(self.bordered(" Operation log "))
            .render(area, buf);
    }

    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        let theme = self.app.theme();
        let items: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>7}"), Style::default().fg(theme.primary)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(theme.muted)),
                ]))
            })
            .collect();

        List::new(items)
            .block(self.bordered(" Help "))
            .render(area, buf);
    }

    fn render_notification(&self, notification: &Notification, area: Rect, buf: &mut Buffer) {
        let theme = self.app.theme();
        let title = match notification.severity {
            Severity::Error => " Error ",
            Severity::Info => " Info ",
        };
        let width = (notification.message.len().max(DISMISS_HINT.len()) as u16).saturating_add(4);
        let popup = centered_rect(width, 6, area);

        Clear.render(popup, buf);
        Paragraph::new(vec![
            Line::from(Span::styled(
                notification.message.as_str(),
                Style::default()
                    .fg(theme.foreground)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled(DISMISS_HINT, Style::default().fg(theme.muted))),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary)),
        )
        .render(popup, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.app.theme().primary))
            .render(area, buf);

        let [main, keypad, help] = columns(area);
        let [equation, display, history] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(3),
            ])
            .areas(main);

        self.render_equation(equation, buf);
        self.render_display(display, buf);
        self.render_history(history, buf);
        KeypadWidget::new(self.app.keypad())
            .theme(self.app.theme())
            .render(keypad, buf);
        self.render_help(help, buf);

        if let Some(notification) = self.app.notification() {
            self.render_notification(notification, area, buf);
        }
    }
}
