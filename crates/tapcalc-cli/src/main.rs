//! tapcalc: tap calculator from the command line
//!
//! ```bash
//! tapcalc eval 2 + 3 =
//! tapcalc tui
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tapcalc_cli::{
    evaluate, interactive, logging, Cli, CliConfig, CliError, CliResult, Commands, ConfigArgs,
    EvalArgs, Reporter, RulesArgs, TuiArgs, Verbosity,
};
use tracing::debug;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir()?;
    let (file_config, source) = match &cli.command {
        // Built-in defaults never depend on a config file
        Commands::Config(args) if args.defaults => (CliConfig::default(), None),
        _ => CliConfig::load(cli.config.as_deref(), &cwd)?,
    };
    let config = build_config(&cli, file_config);

    match &cli.command {
        Commands::Eval(args) => {
            logging::init_stderr(config.verbosity, cli.log_json);
            log_source(source.as_ref());
            run_eval(config, args)
        }
        Commands::Tui(args) => {
            logging::init_tui(config.verbosity);
            log_source(source.as_ref());
            run_tui(config, args)
        }
        Commands::Config(args) => {
            logging::init_stderr(config.verbosity, cli.log_json);
            run_config(config, args, source.as_ref())
        }
    }
}

/// Flags override the config file; absent flags keep its values
fn build_config(cli: &Cli, file: CliConfig) -> CliConfig {
    let mut config = file;
    if cli.quiet || cli.verbose > 0 {
        config = config.with_verbosity(Verbosity::from_flags(cli.verbose, cli.quiet));
    }
    if let Some(color) = cli.color {
        config = config.with_color(color.into());
    }
    config
}

fn with_rule_flags(config: CliConfig, flags: RulesArgs) -> CliConfig {
    let rules = flags.apply(config.rules);
    config.with_rules(rules)
}

fn log_source(source: Option<&PathBuf>) {
    match source {
        Some(path) => debug!(path = %path.display(), "config loaded"),
        None => debug!("no config file, using defaults"),
    }
}

fn run_eval(config: CliConfig, args: &EvalArgs) -> CliResult<()> {
    let mut config = with_rule_flags(config, args.rules);
    if let Some(format) = args.format {
        config = config.with_format(format.into());
    }

    let reporter = Reporter::new(config.color.should_color(), config.verbosity.is_quiet());
    let report = evaluate(&args.script_text(), config.rules)?;
    reporter.report(&report, config.format, args.steps)?;

    match report.failure() {
        Some(err) => Err(CliError::Calc(err.clone())),
        None => Ok(()),
    }
}

fn run_tui(config: CliConfig, args: &TuiArgs) -> CliResult<()> {
    let config = with_rule_flags(config, args.rules);
    interactive::run(config.rules)
}

fn run_config(config: CliConfig, args: &ConfigArgs, source: Option<&PathBuf>) -> CliResult<()> {
    let config = if args.defaults {
        CliConfig::default()
    } else {
        with_rule_flags(config, args.rules)
    };

    let reporter = Reporter::new(config.color.should_color(), config.verbosity.is_quiet());
    if config.verbosity.is_verbose() {
        match source {
            Some(path) => reporter.info(&format!("config file: {}", path.display())),
            None => reporter.info("no config file, using defaults"),
        }
    }
    reporter.print(&config.to_yaml()?)
}
