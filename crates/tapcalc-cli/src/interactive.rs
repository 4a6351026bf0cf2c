//! Interactive terminal calculator

use std::io::{self, Write};

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tapcalc::core::Rules;
use tapcalc::tui::{render, CalculatorApp, InputHandler};
use tracing::{debug, info, warn};

use crate::error::CliResult;

/// Runs the TUI until the user quits
pub fn run(rules: Rules) -> CliResult<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(err) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        restore(&mut io::stdout());
        return Err(err.into());
    }
    let mut terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(terminal) => terminal,
        Err(err) => {
            restore(&mut io::stdout());
            return Err(err.into());
        }
    };

    info!(?rules, "tui started");
    let result = event_loop(&mut terminal, CalculatorApp::with_rules(rules));

    restore(terminal.backend_mut());
    let cursor = terminal.show_cursor();

    result.and(cursor.map_err(Into::into))
}

/// Leaves raw mode, the alternate screen and mouse capture.
///
/// Every step runs even if an earlier one failed.
fn restore<W: Write>(out: &mut W) {
    if let Err(err) = disable_raw_mode() {
        warn!(%err, "failed to disable raw mode");
    }
    if let Err(err) = execute!(out, LeaveAlternateScreen, DisableMouseCapture) {
        warn!(%err, "failed to leave the alternate screen");
    }
}

fn event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: CalculatorApp,
) -> CliResult<()> {
    let input = InputHandler::new();
    let mut area = Rect::default();

    while !app.should_quit() {
        terminal.draw(|frame| {
            area = frame.area();
            render(&app, frame);
        })?;

        match event::read()? {
            Event::Key(key) => app.apply(input.handle_key(key)),
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => app.click(area, column, row),
            Event::Resize(width, height) => debug!(width, height, "resized"),
            _ => {}
        }
    }

    info!(display = app.display(), "tui closed");
    Ok(())
}
