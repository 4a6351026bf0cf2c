//! Unified calculator driver
//!
//! One behavioural suite, every front end. Each front end exposes itself
//! through [`CalculatorDriver`], and the `verify_*` functions below run the
//! same checks against any of them.

use crate::core::script;
use crate::core::{Accumulator, Button, CalcResult, Operation};

/// Abstract driver for calculator interactions
///
/// # Example
///
/// ```rust
/// use tapcalc::driver::{verify_integer_arithmetic, CalculatorDriver};
/// use tapcalc::core::Accumulator;
///
/// let mut calc = Accumulator::new();
/// verify_integer_arithmetic(&mut calc);
/// ```
pub trait CalculatorDriver {
    /// Presses one button
    fn tap(&mut self, button: Button) -> CalcResult<()>;

    /// Gets the display text
    fn display(&self) -> String;

    /// Gets the operation waiting for equals
    fn pending_operation(&self) -> Option<Operation>;

    /// Resets to "0"
    fn clear(&mut self);

    /// Parses and presses a whole tap script, stopping at the first error
    fn run_script(&mut self, taps: &str) -> CalcResult<()> {
        for button in script::parse(taps)? {
            self.tap(button)?;
        }
        Ok(())
    }
}

impl CalculatorDriver for Accumulator {
    fn tap(&mut self, button: Button) -> CalcResult<()> {
        self.press(button).map(|_| ())
    }

    fn display(&self) -> String {
        Self::display(self).to_string()
    }

    fn pending_operation(&self) -> Option<Operation> {
        Self::pending_operation(self)
    }

    fn clear(&mut self) {
        Self::clear(self);
    }
}

/// TUI driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::{Button, CalcResult, CalculatorDriver, Operation};
    use crate::tui::CalculatorApp;

    /// Drives the terminal app the way key presses would
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn tap(&mut self, button: Button) -> CalcResult<()> {
            self.app.press(button);
            match self.app.error() {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }

        fn display(&self) -> String {
            self.app.display().to_string()
        }

        fn pending_operation(&self) -> Option<Operation> {
            self.app.accumulator().pending_operation()
        }

        fn clear(&mut self) {
            self.app.press(Button::Clear);
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Unified behavioural suites =====
// These work with ANY CalculatorDriver implementation

/// Digit entry concatenates and a leading zero is replaced
#[allow(clippy::unwrap_used)]
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.run_script("1 2 3").unwrap();
    assert_eq!(driver.display(), "123");
    driver.clear();

    driver.run_script("0 0 7").unwrap();
    assert_eq!(driver.display(), "7");
    driver.clear();

    driver.run_script("1 . 0").unwrap();
    assert_eq!(driver.display(), "1.");
    driver.clear();
}

/// Four operations with integer semantics
#[allow(clippy::unwrap_used)]
pub fn verify_integer_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    let cases = [
        ("2 + 3 =", "5"),
        ("9 - 4 =", "5"),
        ("6 x 7 =", "42"),
        ("7 / 2 =", "3"),
        ("7 -/+ / 2 =", "-3"),
    ];
    for (taps, expected) in cases {
        driver.clear();
        driver.run_script(taps).unwrap();
        assert_eq!(driver.display(), expected, "taps: {taps}");
        assert_eq!(driver.pending_operation(), None);
    }
    driver.clear();
}

/// A decimal point on either side switches to float semantics
#[allow(clippy::unwrap_used)]
pub fn verify_float_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    let cases = [
        ("2 . 5 + 3 =", "5.5"),
        ("7 . 5 / 2 =", "3.75"),
        ("1 . 5 x 2 =", "3.0"),
        ("1 . 5 / 0 =", "inf"),
    ];
    for (taps, expected) in cases {
        driver.clear();
        driver.run_script(taps).unwrap();
        assert_eq!(driver.display(), expected, "taps: {taps}");
    }
    driver.clear();
}

/// AC resets from any state
#[allow(clippy::unwrap_used)]
pub fn verify_clear<D: CalculatorDriver>(driver: &mut D) {
    driver.run_script("9 x 8").unwrap();
    driver.tap(Button::Clear).unwrap();
    assert_eq!(driver.display(), "0");
    assert_eq!(driver.pending_operation(), None);
}

/// The second of two operators wins
#[allow(clippy::unwrap_used)]
pub fn verify_operator_overwrite<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.run_script("6 + x").unwrap();
    assert_eq!(driver.pending_operation(), Some(Operation::Multiply));
    driver.run_script("7 =").unwrap();
    assert_eq!(driver.display(), "42");
    driver.clear();
}

/// Percent divides by 100, negate leaves zero alone
#[allow(clippy::unwrap_used)]
pub fn verify_percent_and_negate<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.run_script("5 0 %").unwrap();
    assert_eq!(driver.display(), "0.5");
    driver.clear();

    driver.run_script("-/+").unwrap();
    assert_eq!(driver.display(), "0");
    driver.run_script("4 -/+").unwrap();
    assert_eq!(driver.display(), "-4");
    driver.clear();
}

/// Runs every suite
pub fn verify_all<D: CalculatorDriver>(driver: &mut D) {
    verify_digit_entry(driver);
    verify_integer_arithmetic(driver);
    verify_float_arithmetic(driver);
    verify_clear(driver);
    verify_operator_overwrite(driver);
    verify_percent_and_negate(driver);
}
