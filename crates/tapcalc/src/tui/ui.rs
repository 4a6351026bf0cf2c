//! TUI rendering

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;

/// Screen regions, computed the same way for drawing and hit-testing
#[derive(Debug, Clone, Copy)]
struct Regions {
    pending: Rect,
    display: Rect,
    keypad: Rect,
    status: Rect,
    help: Rect,
}

impl Regions {
    fn new(area: Rect) -> Self {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .margin(1)
            .constraints([Constraint::Min(30), Constraint::Length(26)])
            .split(area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Pending expression
                Constraint::Length(3), // Display
                Constraint::Min(7),    // Keypad
                Constraint::Length(3), // Status
            ])
            .split(columns[0]);

        Self {
            pending: rows[0],
            display: rows[1],
            keypad: rows[2],
            status: rows[3],
            help: columns[1],
        }
    }
}

/// Where the keypad lands inside a frame of the given size
#[must_use]
pub fn keypad_area(frame: Rect) -> Rect {
    Regions::new(frame).keypad
}

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn render_pending(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(
            self.app.pending_display(),
            Style::default().fg(Color::Gray),
        ))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .title(" Pending ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .render(area, buf);
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(
            self.app.display(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White)),
        )
        .render(area, buf);
    }

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let style = if self.app.error().is_some() {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Green)
        };
        Paragraph::new(Span::styled(self.app.status(), style))
            .block(
                Block::default()
                    .title(" Status ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }

    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:>7}", key), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        List::new(items)
            .block(
                Block::default()
                    .title(" Keys ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let regions = Regions::new(area);
        self.render_pending(regions.pending, buf);
        self.render_display(regions.display, buf);
        KeypadWidget::new(self.app.keypad()).render(regions.keypad, buf);
        self.render_status(regions.status, buf);
        self.render_help(regions.help, buf);
    }
}

/// Window title
pub const TITLE: &str = " tapcalc ";

/// Key bindings shown in the sidebar
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9 .", "Enter number"),
    ("+ - * /", "Operator"),
    ("Enter =", "Equals"),
    ("%", "Percent"),
    ("n", "Negate"),
    ("Esc c", "All clear"),
    ("Mouse", "Tap a key"),
    ("q", "Quit"),
];
