//! Tap scripts: button presses written as text
//!
//! `"12 + 3 ="`, `"AC 5 -/+ %"` and `"2.5x4="` are all valid scripts.
//! Whitespace is ignored and multi-character keys are matched before
//! single characters, so `-/+` is negate rather than subtract.

use crate::core::{Button, CalcError, CalcResult, Digit, Operation};

/// Multi-character keys, longest first
const WORDS: &[(&str, Button)] = &[
    ("-/+", Button::Negate),
    ("+/-", Button::Negate),
    ("neg", Button::Negate),
    ("ac", Button::Clear),
    ("c", Button::Clear),
];

/// Splits a tap script into buttons
#[derive(Debug)]
pub struct TapScript<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> TapScript<'a> {
    /// Creates a reader over the given script
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Returns the unread part of the script
    #[must_use]
    pub fn remaining(&self) -> &str {
        &self.input[self.pos..]
    }

    /// Returns the next button, or None at end of input
    pub fn next_button(&mut self) -> CalcResult<Option<Button>> {
        self.skip_whitespace();

        let rest = self.remaining();
        let Some(ch) = rest.chars().next() else {
            return Ok(None);
        };

        for (word, button) in WORDS {
            if rest
                .get(..word.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(word))
            {
                self.pos += word.len();
                return Ok(Some(*button));
            }
        }

        let button = match ch {
            '0'..='9' => Digit::from_char(ch).map(Button::Digit),
            '+' => Some(Button::Operator(Operation::Add)),
            '-' => Some(Button::Operator(Operation::Subtract)),
            '*' | 'x' | 'X' | '×' => Some(Button::Operator(Operation::Multiply)),
            '/' | '÷' => Some(Button::Operator(Operation::Divide)),
            '=' => Some(Button::Equals),
            '.' => Some(Button::Decimal),
            '%' => Some(Button::Percent),
            '±' => Some(Button::Negate),
            _ => None,
        };

        match button {
            Some(button) => {
                self.pos += ch.len_utf8();
                Ok(Some(button))
            }
            None => Err(CalcError::script(self.pos, ch.to_string())),
        }
    }

    fn skip_whitespace(&mut self) {
        let trimmed = self.remaining().trim_start();
        self.pos = self.input.len() - trimmed.len();
    }
}

impl Iterator for TapScript<'_> {
    type Item = CalcResult<Button>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_button() {
            Ok(Some(button)) => Some(Ok(button)),
            Ok(None) => None,
            Err(err) => {
                // Stop after the first error
                self.pos = self.input.len();
                Some(Err(err))
            }
        }
    }
}

/// Parses a whole script
pub fn parse(input: &str) -> CalcResult<Vec<Button>> {
    TapScript::new(input).collect()
}

/// Writes buttons back as a space-separated script
#[must_use]
pub fn render(buttons: &[Button]) -> String {
    buttons
        .iter()
        .map(Button::label)
        .collect::<Vec<_>>()
        .join(" ")
}
