//! Calculator core: buttons, numbers and the accumulator reducer
//!
//! Everything in here is pure and synchronous. Front ends feed [`Button`]s
//! into an [`Accumulator`] and render [`Accumulator::display`].

mod accumulator;
mod button;
mod number;
mod operations;
pub mod script;

pub use accumulator::{reduce, Accumulator, Phase, Rules, State, ZeroDivision};
pub use button::{Button, ButtonKind, ButtonRole, Digit};
pub use number::Number;
pub use operations::Operation;

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors a single button event can produce.
///
/// None of these leave the accumulator in a broken state: the event is
/// rejected and the previous state stays current.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Integer division with a zero divisor
    #[error("Division by zero")]
    DivisionByZero,
    /// Integer result does not fit in 64 bits
    #[error("Overflow: result exceeds the integer range")]
    Overflow,
    /// A digit button outside 0..=9 was requested
    #[error("Invalid digit: {0}")]
    InvalidDigit(u8),
    /// A tap script contained something that is not a button
    #[error("Unrecognised button {found:?} at position {position}")]
    Script {
        /// Byte offset into the script
        position: usize,
        /// The offending text
        found: String,
    },
}

impl CalcError {
    /// Creates a script error
    #[must_use]
    pub fn script(position: usize, found: impl Into<String>) -> Self {
        Self::Script {
            position,
            found: found.into(),
        }
    }
}
