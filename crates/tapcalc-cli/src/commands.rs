//! CLI command definitions using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tapcalc::core::{Rules, ZeroDivision};

use crate::config::ColorChoice;
use crate::output::OutputFormat;

/// tapcalc: a four-function tap calculator
#[derive(Parser, Debug)]
#[command(name = "tapcalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorArg>,

    /// Config file (defaults to ./tapcalc.yaml when present)
    #[arg(long, global = true, env = "TAPCALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log events to stderr as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay a tap script and print the display
    ///
    /// Arguments are joined with spaces, so `tapcalc eval 2 + 3 =` and
    /// `tapcalc eval "2 + 3 ="` are the same script.
    Eval(EvalArgs),

    /// Run the interactive terminal calculator
    Tui(TuiArgs),

    /// Print the effective configuration as YAML
    Config(ConfigArgs),
}

/// Arguments for the eval command
#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Tap script, e.g. "12 + 3 =" or "5 -/+ %"
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    pub script: Vec<String>,

    /// Print the display after every tap
    #[arg(long)]
    pub steps: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// Entry rule overrides
    #[command(flatten)]
    pub rules: RulesArgs,
}

impl EvalArgs {
    /// The script arguments as one tap script
    #[must_use]
    pub fn script_text(&self) -> String {
        self.script.join(" ")
    }
}

/// Arguments for the tui command
#[derive(Args, Debug)]
pub struct TuiArgs {
    /// Entry rule overrides
    #[command(flatten)]
    pub rules: RulesArgs,
}

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Print built-in defaults instead of the effective configuration
    #[arg(long)]
    pub defaults: bool,

    /// Entry rule overrides
    #[command(flatten)]
    pub rules: RulesArgs,
}

/// Flags that override [`Rules`] from the config file
#[derive(Args, Debug, Default, Clone, Copy)]
pub struct RulesArgs {
    /// Append "." even when the display already contains one
    #[arg(long, overrides_with = "no_repeated_decimal")]
    pub repeated_decimal: bool,

    /// Ignore "." when the display already contains one
    #[arg(long, overrides_with = "repeated_decimal")]
    pub no_repeated_decimal: bool,

    /// What integer division by zero does
    #[arg(long, value_enum)]
    pub zero_division: Option<ZeroDivisionArg>,
}

impl RulesArgs {
    /// Applies the flags on top of `rules`
    #[must_use]
    pub fn apply(self, mut rules: Rules) -> Rules {
        if self.repeated_decimal {
            rules = rules.with_repeated_decimal(true);
        } else if self.no_repeated_decimal {
            rules = rules.with_repeated_decimal(false);
        }
        if let Some(policy) = self.zero_division {
            rules = rules.with_zero_division(policy.into());
        }
        rules
    }
}

/// Color argument
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorArg {
    /// Use colors when output is a terminal
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

/// Output format argument
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatArg {
    /// Human-readable text
    Text,
    /// JSON report
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

/// Zero division argument
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZeroDivisionArg {
    /// Fail the equals press
    Reject,
    /// Fall back to float division ("inf" / "nan")
    Promote,
}

impl From<ZeroDivisionArg> for ZeroDivision {
    fn from(arg: ZeroDivisionArg) -> Self {
        match arg {
            ZeroDivisionArg::Reject => Self::Reject,
            ZeroDivisionArg::Promote => Self::Promote,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_eval_joins_words() {
        let cli = Cli::parse_from(["tapcalc", "eval", "12", "+", "3", "="]);
        let Commands::Eval(args) = cli.command else {
            panic!("expected Eval command");
        };
        assert_eq!(args.script_text(), "12 + 3 =");
        assert!(!args.steps);
        assert!(args.format.is_none());
    }

    #[test]
    fn test_parse_eval_hyphen_script() {
        let cli = Cli::parse_from(["tapcalc", "eval", "9", "-", "4", "="]);
        let Commands::Eval(args) = cli.command else {
            panic!("expected Eval command");
        };
        assert_eq!(args.script_text(), "9 - 4 =");
    }

    #[test]
    fn test_parse_eval_flags() {
        let cli = Cli::parse_from([
            "tapcalc",
            "eval",
            "--steps",
            "--format",
            "json",
            "--zero-division",
            "promote",
            "1 / 0 =",
        ]);
        let Commands::Eval(args) = cli.command else {
            panic!("expected Eval command");
        };
        assert!(args.steps);
        assert_eq!(args.format, Some(FormatArg::Json));
        assert_eq!(args.rules.zero_division, Some(ZeroDivisionArg::Promote));
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["tapcalc", "-vvv", "--color", "never", "tui"]);
        assert_eq!(cli.verbose, 3);
        assert_eq!(cli.color, Some(ColorArg::Never));
        assert!(matches!(cli.command, Commands::Tui(_)));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["tapcalc", "config", "-q", "--config", "x.yaml"]);
        assert!(cli.quiet);
        assert_eq!(cli.config, Some(PathBuf::from("x.yaml")));
        assert!(!cli.log_json);
    }

    #[test]
    fn test_eval_requires_script() {
        assert!(Cli::try_parse_from(["tapcalc", "eval"]).is_err());
    }

    #[test]
    fn test_rules_args_apply() {
        let base = Rules::default();
        assert_eq!(RulesArgs::default().apply(base), base);

        let args = RulesArgs {
            repeated_decimal: true,
            zero_division: Some(ZeroDivisionArg::Promote),
            ..RulesArgs::default()
        };
        let rules = args.apply(base);
        assert!(rules.repeated_decimal);
        assert_eq!(rules.zero_division, ZeroDivision::Promote);
    }

    #[test]
    fn test_no_repeated_decimal_overrides_file_value() {
        let from_file = Rules::default().with_repeated_decimal(true);
        let cli = Cli::parse_from(["tapcalc", "eval", "--no-repeated-decimal", "1 . . 5"]);
        let Commands::Eval(args) = cli.command else {
            panic!("expected Eval command");
        };
        assert!(!args.rules.apply(from_file).repeated_decimal);
    }

    #[test]
    fn test_last_repeated_decimal_flag_wins() {
        let cli = Cli::parse_from([
            "tapcalc",
            "tui",
            "--no-repeated-decimal",
            "--repeated-decimal",
        ]);
        let Commands::Tui(args) = cli.command else {
            panic!("expected Tui command");
        };
        assert!(args.rules.apply(Rules::default()).repeated_decimal);
    }

    #[test]
    fn test_rules_args_keep_file_values() {
        let from_file = Rules::default().with_repeated_decimal(true);
        assert!(RulesArgs::default().apply(from_file).repeated_decimal);
    }

    #[test]
    fn test_arg_conversions() {
        assert_eq!(ColorChoice::from(ColorArg::Always), ColorChoice::Always);
        assert_eq!(OutputFormat::from(FormatArg::Json), OutputFormat::Json);
        assert_eq!(ZeroDivision::from(ZeroDivisionArg::Reject), ZeroDivision::Reject);
    }
}
