//! tapcalc CLI library
//!
//! ## Usage
//!
//! ```bash
//! tapcalc eval "12 + 3 ="             # prints 15
//! tapcalc eval --steps 2.5 × 4 =      # display after every tap
//! tapcalc eval --format json 8 / 0 =  # JSON report, exit status 1
//! tapcalc tui                         # interactive keypad
//! tapcalc config                      # effective configuration
//! ```

#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod eval;
pub mod interactive;
pub mod logging;
mod output;

pub use commands::{
    Cli, ColorArg, Commands, ConfigArgs, EvalArgs, FormatArg, RulesArgs, TuiArgs,
    ZeroDivisionArg,
};
pub use config::{CliConfig, ColorChoice, Verbosity, DEFAULT_CONFIG_FILE};
pub use error::{CliError, CliResult};
pub use eval::{evaluate, EvalReport, Step};
pub use output::{render_text, OutputFormat, Reporter};
