//! Button identities
//!
//! The closed set of keys a front end can send to the accumulator.

use serde::Serialize;

use crate::core::{CalcError, CalcResult, Operation};

/// A decimal digit, guaranteed to be in 0..=9
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// 0 through 9
    pub const ALL: [Self; 10] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
    ];

    /// Creates a digit, rejecting values above 9
    pub fn new(value: u8) -> CalcResult<Self> {
        if value <= 9 {
            Ok(Self(value))
        } else {
            Err(CalcError::InvalidDigit(value))
        }
    }

    /// Creates a digit from its ASCII character
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self(d as u8))
    }

    /// Returns the numeric value
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the ASCII character
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'0' + self.0) as char
    }
}

impl TryFrom<u8> for Digit {
    type Error = CalcError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

/// Every key on the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Button {
    /// 0-9
    Digit(Digit),
    /// + - × /
    Operator(Operation),
    /// =
    Equals,
    /// AC
    Clear,
    /// .
    Decimal,
    /// %
    Percent,
    /// -/+
    Negate,
}

/// What a button does, grouped the way the accumulator dispatches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonKind {
    /// Digits
    Number,
    /// Arithmetic operators and equals
    Operator,
    /// Sign change
    Negate,
    /// Divide by 100
    Percent,
    /// Decimal point
    Decimal,
    /// All clear
    Clear,
}

/// Visual class of a button; front ends colour by this
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonRole {
    /// Digits and the decimal point
    Entry,
    /// AC, -/+ and %
    Function,
    /// + - × / =
    Operator,
}

impl Button {
    /// The 19 keys of the calculator, digits first
    pub const ALL: [Self; 19] = [
        Self::Digit(Digit(0)),
        Self::Digit(Digit(1)),
        Self::Digit(Digit(2)),
        Self::Digit(Digit(3)),
        Self::Digit(Digit(4)),
        Self::Digit(Digit(5)),
        Self::Digit(Digit(6)),
        Self::Digit(Digit(7)),
        Self::Digit(Digit(8)),
        Self::Digit(Digit(9)),
        Self::Operator(Operation::Add),
        Self::Operator(Operation::Subtract),
        Self::Operator(Operation::Multiply),
        Self::Operator(Operation::Divide),
        Self::Equals,
        Self::Clear,
        Self::Decimal,
        Self::Percent,
        Self::Negate,
    ];

    /// Creates a digit button
    pub fn digit(value: u8) -> CalcResult<Self> {
        Digit::new(value).map(Self::Digit)
    }

    /// Label printed on the key
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Digit(d) => DIGIT_LABELS[d.0 as usize],
            Self::Operator(op) => op.symbol(),
            Self::Equals => "=",
            Self::Clear => "AC",
            Self::Decimal => ".",
            Self::Percent => "%",
            Self::Negate => "-/+",
        }
    }

    /// Dispatch group
    #[must_use]
    pub const fn kind(&self) -> ButtonKind {
        match self {
            Self::Digit(_) => ButtonKind::Number,
            Self::Operator(_) | Self::Equals => ButtonKind::Operator,
            Self::Clear => ButtonKind::Clear,
            Self::Decimal => ButtonKind::Decimal,
            Self::Percent => ButtonKind::Percent,
            Self::Negate => ButtonKind::Negate,
        }
    }

    /// Visual class
    #[must_use]
    pub const fn role(&self) -> ButtonRole {
        match self {
            Self::Operator(_) | Self::Equals => ButtonRole::Operator,
            Self::Clear | Self::Negate | Self::Percent => ButtonRole::Function,
            Self::Digit(_) | Self::Decimal => ButtonRole::Entry,
        }
    }
}

impl From<Digit> for Button {
    fn from(digit: Digit) -> Self {
        Self::Digit(digit)
    }
}

impl From<Operation> for Button {
    fn from(op: Operation) -> Self {
        Self::Operator(op)
    }
}

impl std::fmt::Display for Button {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
