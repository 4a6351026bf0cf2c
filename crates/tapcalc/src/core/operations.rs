//! The four arithmetic operations and their integer and float semantics

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult};

/// Operator awaiting its right-hand operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operation {
    /// All operations in keypad order (top to bottom)
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "/",
        }
    }

    /// Integer semantics: checked, division truncates toward zero.
    pub fn apply_integer(self, a: i64, b: i64) -> CalcResult<i64> {
        let result = match self {
            Self::Add => a.checked_add(b),
            Self::Subtract => a.checked_sub(b),
            Self::Multiply => a.checked_mul(b),
            Self::Divide => {
                if b == 0 {
                    return Err(CalcError::DivisionByZero);
                }
                a.checked_div(b)
            }
        };
        result.ok_or(CalcError::Overflow)
    }

    /// Float semantics: plain IEEE 754, so x / 0 is infinite or NaN.
    #[must_use]
    pub fn apply_float(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => a / b,
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
