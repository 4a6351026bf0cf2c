//! TUI application state

use ratatui::layout::Rect;

use super::input::KeyAction;
use super::keypad::Keypad;
use super::ui::keypad_area;
use crate::core::{Accumulator, Button, CalcError, Rules};

/// Calculator application state
#[derive(Debug, Default)]
pub struct CalculatorApp {
    /// The calculator itself
    accumulator: Accumulator,
    /// Error from the last press, shown until the next press
    error: Option<CalcError>,
    /// Keypad with the last pressed key lit
    keypad: Keypad,
    /// Whether the app should quit
    should_quit: bool,
}

impl CalculatorApp {
    /// Creates a new calculator app with default rules
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator app with custom entry rules
    #[must_use]
    pub fn with_rules(rules: Rules) -> Self {
        Self {
            accumulator: Accumulator::with_rules(rules),
            ..Self::default()
        }
    }

    /// Presses a button, keeping any error for display
    pub fn press(&mut self, button: Button) {
        self.keypad.highlight(button);
        self.error = self.accumulator.press(button).err();
    }

    /// Applies a key action
    pub fn apply(&mut self, action: KeyAction) {
        match action {
            KeyAction::Press(button) => self.press(button),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Handles a mouse click at terminal coordinates, given the full frame area
    pub fn click(&mut self, frame: Rect, x: u16, y: u16) {
        let area = keypad_area(frame);
        let hit = self
            .keypad
            .hit_test(area, x, y)
            .and_then(|i| self.keypad.get_button(i))
            .map(|k| k.button);
        if let Some(button) = hit {
            self.press(button);
        }
    }

    /// Returns the display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.accumulator.display()
    }

    /// Returns the error from the last press
    #[must_use]
    pub fn error(&self) -> Option<&CalcError> {
        self.error.as_ref()
    }

    /// Returns the underlying accumulator
    #[must_use]
    pub fn accumulator(&self) -> &Accumulator {
        &self.accumulator
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// The pending expression, e.g. "12 +", or empty
    #[must_use]
    pub fn pending_display(&self) -> String {
        match self.accumulator.pending_operation() {
            Some(op) => format!("{} {}", self.accumulator.pending_operand(), op),
            None => String::new(),
        }
    }

    /// One-line status for the footer
    #[must_use]
    pub fn status(&self) -> String {
        match &self.error {
            Some(err) => format!("Error: {err}"),
            None => format!("{:?}", self.accumulator.phase()),
        }
    }
}
