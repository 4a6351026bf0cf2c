//! Tap script evaluation

use serde::Serialize;
use tapcalc::core::{script, Accumulator, Button, CalcError, Rules, State};
use tracing::info;

use crate::error::{CliError, CliResult};

/// Display after one tap
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// The tapped button
    pub button: Button,
    /// Keypad label of the tapped button
    pub label: String,
    /// Display after the tap
    pub display: String,
}

/// Outcome of replaying one script
#[derive(Debug, Clone, Serialize)]
pub struct EvalReport {
    /// Script as given
    pub script: String,
    /// Canonical rendering of the parsed buttons
    pub taps: String,
    /// Accepted taps, in order
    pub steps: Vec<Step>,
    /// Final display
    pub display: String,
    /// Final accumulator state
    pub state: State,
    /// Error message of the rejected tap, if any
    pub error: Option<String>,
    #[serde(skip)]
    failure: Option<CalcError>,
}

impl EvalReport {
    /// Whether every tap was accepted
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.failure.is_none()
    }

    /// The error of the rejected tap
    #[must_use]
    pub const fn failure(&self) -> Option<&CalcError> {
        self.failure.as_ref()
    }
}

/// Replays `text` on a fresh accumulator.
///
/// A script that does not parse, or has no taps, is an error. A rejected tap stops the
/// replay and is recorded in the report, with the display left as it was
/// before that tap.
pub fn evaluate(text: &str, rules: Rules) -> CliResult<EvalReport> {
    let buttons = script::parse(text)?;
    if buttons.is_empty() {
        return Err(CliError::invalid_argument("script contains no taps"));
    }
    let mut acc = Accumulator::with_rules(rules);
    let mut steps = Vec::with_capacity(buttons.len());
    let mut failure = None;

    for button in &buttons {
        match acc.press(*button) {
            Ok(display) => steps.push(Step {
                button: *button,
                label: button.label().to_string(),
                display: display.to_string(),
            }),
            Err(err) => {
                failure = Some(err);
                break;
            }
        }
    }

    info!(taps = buttons.len(), accepted = steps.len(), "script replayed");

    Ok(EvalReport {
        script: text.to_string(),
        taps: script::render(&buttons),
        steps,
        display: acc.display().to_string(),
        state: acc.state().clone(),
        error: failure.as_ref().map(ToString::to_string),
        failure,
    })
}
