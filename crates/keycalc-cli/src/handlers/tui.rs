//! Interactive terminal calculator: `keycalc tui`

use std::io;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};
use tracing::{debug, info};

use keycalc::config::Settings;
use keycalc::tui::{render, CalculatorApp};

use crate::error::CliResult;

/// Runs the terminal UI until the user quits
pub fn run_tui(settings: &Settings) -> CliResult<()> {
    let mut app = CalculatorApp::with_settings(settings)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(err) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(err.into());
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(terminal) => terminal,
        Err(err) => {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            return Err(err.into());
        }
    };

    info!("terminal UI started");
    let result = run_app(&mut terminal, &mut app);

    // Restore even when the loop failed, then report the first error
    let restored = restore(&mut terminal);
    info!(
        equations = app.session().history().len(),
        "terminal UI stopped"
    );
    result.and(restored)
}

fn restore<B: Backend + io::Write>(terminal: &mut Terminal<B>) -> CliResult<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut CalculatorApp) -> CliResult<()> {
    let mut screen = Rect::default();

    loop {
        terminal.draw(|f| {
            screen = f.area();
            render(app, f);
        })?;

        match event::read()? {
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                debug!(column = mouse.column, row = mouse.row, "click");
                app.handle_click(screen, mouse.column, mouse.row);
            }
            _ => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
