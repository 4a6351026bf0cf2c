//! Terminal front end
//!
//! A ratatui rendering of the phone calculator: display, pending
//! expression, clickable keypad and a key help sidebar.

mod app;
mod input;
mod keypad;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{Keypad, KeypadButton, KeypadWidget};
pub use ui::{keypad_area, render, CalculatorUI};
