//! Output formatting

use console::{style, Term};
use serde::{Deserialize, Serialize};

use crate::error::CliResult;
use crate::eval::EvalReport;

/// Output format for eval results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON report
    Json,
}

/// Writes results to stdout and notices to stderr
#[derive(Debug)]
pub struct Reporter {
    out: Term,
    err: Term,
    /// Whether to use colors
    pub use_color: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(false, false)
    }
}

impl Reporter {
    /// Create a new reporter
    #[must_use]
    pub fn new(use_color: bool, quiet: bool) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            use_color,
            quiet,
        }
    }

    /// Prints an eval report in the given format
    pub fn report(&self, report: &EvalReport, format: OutputFormat, steps: bool) -> CliResult<()> {
        let text = match format {
            OutputFormat::Text => render_text(report, steps, self.use_color),
            OutputFormat::Json => serde_json::to_string_pretty(report)?,
        };
        self.out.write_line(&text)?;
        Ok(())
    }

    /// Prints raw text to stdout
    pub fn print(&self, text: &str) -> CliResult<()> {
        self.out.write_str(text)?;
        Ok(())
    }

    /// Print an info message to stderr
    pub fn info(&self, message: &str) {
        if self.quiet {
            return;
        }

        let prefix = if self.use_color {
            style("ℹ").blue().bold().force_styling(true).to_string()
        } else {
            "INFO".to_string()
        };

        let _ = self.err.write_line(&format!("{prefix} {message}"));
    }
}

/// Renders a report as text.
///
/// With `steps`, one line per accepted tap (label, then display) precedes
/// the final display.
#[must_use]
pub fn render_text(report: &EvalReport, steps: bool, use_color: bool) -> String {
    let mut lines = Vec::new();

    if steps {
        let width = report
            .steps
            .iter()
            .map(|s| s.label.chars().count())
            .max()
            .unwrap_or(0);
        for step in &report.steps {
            let label = format!("{:>width$}", step.label);
            let label = if use_color {
                style(label).dim().force_styling(true).to_string()
            } else {
                label
            };
            lines.push(format!("{label}  {}", step.display));
        }
    }

    let display = if use_color {
        let styled = style(&report.display).bold().force_styling(true);
        if report.passed() {
            styled.green().to_string()
        } else {
            styled.red().to_string()
        }
    } else {
        report.display.clone()
    };
    lines.push(display);

    lines.join("\n")
}
