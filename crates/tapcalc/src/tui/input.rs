//! Keyboard input handling

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::{Button, Digit, Operation};

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Press a calculator button
    Press(Button),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        // Windows reports releases too
        if kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                KeyCode::Char('l' | 'u') => KeyAction::Press(Button::Clear),
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c) => Self::map_char(c),
            KeyCode::Enter => KeyAction::Press(Button::Equals),
            KeyCode::Esc | KeyCode::Delete => KeyAction::Press(Button::Clear),
            _ => KeyAction::None,
        }
    }

    /// Maps a typed character to an action
    #[must_use]
    pub fn map_char(c: char) -> KeyAction {
        let button = match c {
            '0'..='9' => match Digit::from_char(c) {
                Some(d) => Button::Digit(d),
                None => return KeyAction::None,
            },
            '+' => Button::Operator(Operation::Add),
            '-' => Button::Operator(Operation::Subtract),
            '*' | 'x' | 'X' => Button::Operator(Operation::Multiply),
            '/' => Button::Operator(Operation::Divide),
            '=' => Button::Equals,
            '.' | ',' => Button::Decimal,
            '%' => Button::Percent,
            'n' | 'N' | '_' => Button::Negate,
            'c' | 'C' => Button::Clear,
            'q' | 'Q' => return KeyAction::Quit,
            _ => return KeyAction::None,
        };
        KeyAction::Press(button)
    }
}
