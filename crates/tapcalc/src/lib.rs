//! tapcalc - a tap-driven four-function calculator
//!
//! The calculator is a small accumulator: a display string, a pending
//! operand and a pending operation, advanced one button press at a time by
//! a pure reducer. Integer or float arithmetic is picked at equals time by
//! whether either operand has a decimal point.
//!
//! # Example
//!
//! ```rust
//! use tapcalc::prelude::*;
//!
//! let mut calc = Accumulator::new();
//! calc.press_all(script::parse("2.5 + 3 =").unwrap()).unwrap();
//! assert_eq!(calc.display(), "5.5");
//!
//! // The reducer itself is a pure function
//! let state = reduce(&State::default(), Button::digit(7).unwrap(), &Rules::default()).unwrap();
//! assert_eq!(state.display(), "7");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::script;
    pub use crate::core::{
        reduce, Accumulator, Button, ButtonKind, ButtonRole, CalcError, CalcResult, Digit,
        Number, Operation, Phase, Rules, State, ZeroDivision,
    };
    pub use crate::driver::CalculatorDriver;

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
}
