//! The accumulator: a pure reducer over button events
//!
//! [`reduce`] maps `(state, button)` to a new [`State`] without touching
//! the old one. [`Accumulator`] wraps a state and its [`Rules`] for front
//! ends that want a mutable handle.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::number::{format_float, parse_float};
use crate::core::{Button, CalcError, CalcResult, Digit, Number, Operation};

/// What integer division by zero does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZeroDivision {
    /// Reject the equals press with [`CalcError::DivisionByZero`]
    #[default]
    Reject,
    /// Redo the division with float semantics ("inf" / "nan")
    Promote,
}

/// Entry rules for the behaviours that are a product decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Rules {
    /// Append "." even when the display already has one
    pub repeated_decimal: bool,
    /// Integer division by zero handling
    pub zero_division: ZeroDivision,
}

impl Rules {
    /// Rules with repeated decimal presses allowed or ignored
    #[must_use]
    pub const fn with_repeated_decimal(mut self, allow: bool) -> Self {
        self.repeated_decimal = allow;
        self
    }

    /// Rules with the given zero division policy
    #[must_use]
    pub const fn with_zero_division(mut self, policy: ZeroDivision) -> Self {
        self.zero_division = policy;
        self
    }
}

/// Input state machine.
///
/// The pending operation lives in `OperatorPending`, so "an operator is
/// pending" and "the phase is OperatorPending" cannot disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "phase", content = "operation", rename_all = "snake_case")]
pub enum Phase {
    /// Fresh, or just cleared
    #[default]
    Idle,
    /// A number is on the display and nothing is pending
    OperandEntered,
    /// An operator was pressed and waits for equals
    OperatorPending(Operation),
}

impl Phase {
    /// The pending operation, if any
    #[must_use]
    pub const fn pending(self) -> Option<Operation> {
        match self {
            Self::OperatorPending(op) => Some(op),
            Self::Idle | Self::OperandEntered => None,
        }
    }

    /// Phase after a digit, decimal, negate or percent press
    const fn after_entry(self) -> Self {
        match self {
            Self::Idle => Self::OperandEntered,
            other => other,
        }
    }
}

/// Immutable calculator state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct State {
    display: String,
    operand: Number,
    #[serde(flatten)]
    phase: Phase,
}

impl Default for State {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            operand: Number::default(),
            phase: Phase::Idle,
        }
    }
}

impl State {
    /// The text on the display
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Left-hand operand captured by the last operator press
    #[must_use]
    pub const fn pending_operand(&self) -> Number {
        self.operand
    }

    /// Operation waiting for equals
    #[must_use]
    pub const fn pending_operation(&self) -> Option<Operation> {
        self.phase.pending()
    }

    /// Current state machine phase
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Display value parsed with default-to-zero fallback
    #[must_use]
    pub fn value(&self) -> Number {
        Number::parse(&self.display)
    }

    fn enter_digit(&mut self, digit: Digit) {
        let c = digit.as_char();
        if self.display.ends_with('.') {
            if digit.value() == 0 {
                return;
            }
            if self.display == "." {
                self.display = "0.".to_string();
            }
            self.display.push(c);
        } else if self.display == "0" {
            self.display = c.to_string();
        } else if self.phase.pending().is_some() {
            self.operand = Number::parse(&self.display);
            self.display = c.to_string();
        } else {
            self.display.push(c);
        }
    }

    fn enter_decimal(&mut self, rules: &Rules) {
        if rules.repeated_decimal || !self.display.contains('.') {
            self.display.push('.');
        }
    }

    fn negate(&mut self) {
        if self.display != "0" {
            self.display.insert(0, '-');
        }
    }

    fn percent(&mut self) {
        self.display = format_float(parse_float(&self.display) / 100.0);
    }

    fn resolve(&mut self, rules: &Rules) -> CalcResult<()> {
        if let Some(op) = self.phase.pending() {
            let result = evaluate(op, self.operand, self.value(), rules)?;
            self.display = result.to_string();
        }
        self.phase = Phase::OperandEntered;
        Ok(())
    }
}

/// Applies one button press.
///
/// Returns the next state. On error the caller still holds the previous
/// state, which is the state to keep.
pub fn reduce(state: &State, button: Button, rules: &Rules) -> CalcResult<State> {
    let mut next = state.clone();
    match button {
        Button::Clear => return Ok(State::default()),
        Button::Operator(op) => {
            next.operand = next.value();
            next.phase = Phase::OperatorPending(op);
            return Ok(next);
        }
        Button::Equals => {
            next.resolve(rules)?;
            return Ok(next);
        }
        Button::Digit(d) => next.enter_digit(d),
        Button::Decimal => next.enter_decimal(rules),
        Button::Negate => next.negate(),
        Button::Percent => next.percent(),
    }
    next.phase = next.phase.after_entry();
    Ok(next)
}

/// Integer semantics when both sides are integers, float otherwise
fn evaluate(op: Operation, lhs: Number, rhs: Number, rules: &Rules) -> CalcResult<Number> {
    match (lhs, rhs) {
        (Number::Integer(a), Number::Integer(b)) => {
            debug!(a, b, op = %op, "integer equals");
            match op.apply_integer(a, b) {
                Err(CalcError::DivisionByZero) if rules.zero_division == ZeroDivision::Promote => {
                    Ok(Number::Float(op.apply_float(a as f64, b as f64)))
                }
                other => other.map(Number::Integer),
            }
        }
        _ => {
            let (a, b) = (lhs.as_f64(), rhs.as_f64());
            debug!(a, b, op = %op, "float equals");
            Ok(Number::Float(op.apply_float(a, b)))
        }
    }
}

/// Mutable owner of a [`State`] and the [`Rules`] it is reduced under
#[derive(Debug, Clone, Default)]
pub struct Accumulator {
    state: State,
    rules: Rules,
}

impl Accumulator {
    /// Creates an accumulator showing "0" with default rules
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an accumulator with custom rules
    #[must_use]
    pub fn with_rules(rules: Rules) -> Self {
        Self {
            state: State::default(),
            rules,
        }
    }

    /// Presses one button. On error the state is left as it was.
    pub fn press(&mut self, button: Button) -> CalcResult<&str> {
        match reduce(&self.state, button, &self.rules) {
            Ok(next) => {
                trace!(
                    button = %button,
                    display = %next.display,
                    phase = ?next.phase,
                    "button accepted"
                );
                self.state = next;
                Ok(self.display())
            }
            Err(err) => {
                warn!(button = %button, display = %self.state.display, error = %err, "button rejected");
                Err(err)
            }
        }
    }

    /// Presses buttons in order, stopping at the first rejected one
    pub fn press_all<I>(&mut self, buttons: I) -> CalcResult<&str>
    where
        I: IntoIterator<Item = Button>,
    {
        for button in buttons {
            self.press(button)?;
        }
        Ok(self.display())
    }

    /// Same as pressing AC
    pub fn clear(&mut self) {
        self.state = State::default();
    }

    /// The current state snapshot
    #[must_use]
    pub fn state(&self) -> &State {
        &self.state
    }

    /// The rules in effect
    #[must_use]
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// The text on the display
    #[must_use]
    pub fn display(&self) -> &str {
        self.state.display()
    }

    /// Operation waiting for equals
    #[must_use]
    pub fn pending_operation(&self) -> Option<Operation> {
        self.state.pending_operation()
    }

    /// Left-hand operand captured by the last operator press
    #[must_use]
    pub fn pending_operand(&self) -> Number {
        self.state.pending_operand()
    }

    /// Current state machine phase
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }
}
