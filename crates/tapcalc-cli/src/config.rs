//! CLI configuration
//!
//! Layered as defaults, then `tapcalc.yaml` (or `--config <PATH>`), then flags.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tapcalc::core::Rules;

use crate::error::{CliError, CliResult};
use crate::output::OutputFormat;

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "tapcalc.yaml";

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// Errors only
    Quiet,
    /// Warnings and errors
    #[default]
    Normal,
    /// Informational messages
    Verbose,
    /// Equals resolution and config details
    Debug,
    /// Every accepted button press
    Trace,
}

impl Verbosity {
    /// Verbosity from the `-v` count and `-q` flag
    #[must_use]
    pub const fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    /// Check if quiet mode
    #[must_use]
    pub const fn is_quiet(self) -> bool {
        matches!(self, Self::Quiet)
    }

    /// Check if verbose or higher
    #[must_use]
    pub const fn is_verbose(self) -> bool {
        matches!(self, Self::Verbose | Self::Debug | Self::Trace)
    }

    /// Log level directive for `tracing_subscriber::EnvFilter`
    #[must_use]
    pub const fn filter_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Always use colors
    Always,
    /// Use colors when output is a terminal
    #[default]
    Auto,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Should use colors based on output detection
    #[must_use]
    pub fn should_color(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::io::IsTerminal::is_terminal(&std::io::stdout()),
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Color output choice
    pub color: ColorChoice,
    /// Output format for `eval`
    pub format: OutputFormat,
    /// Calculator entry rules
    pub rules: Rules,
}

impl CliConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set color choice
    #[must_use]
    pub const fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Set output format
    #[must_use]
    pub const fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set calculator rules
    #[must_use]
    pub const fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    /// Parses a YAML config document; `path` is only used for error messages
    pub fn from_yaml(text: &str, path: &Path) -> CliResult<Self> {
        // An empty file is a valid, all-defaults config
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml_ng::from_str(text).map_err(|source| CliError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Serializes the config as YAML
    pub fn to_yaml(&self) -> CliResult<String> {
        serde_yaml_ng::to_string(self).map_err(|e| CliError::config(e.to_string()))
    }

    /// Loads the config file, if any.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] in
    /// `dir` is read when present and defaults are used otherwise.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> CliResult<(Self, Option<PathBuf>)> {
        let path = match explicit {
            Some(path) if !path.is_file() => {
                return Err(CliError::config(format!(
                    "config file '{}' not found",
                    path.display()
                )));
            }
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = dir.join(DEFAULT_CONFIG_FILE);
                if !candidate.is_file() {
                    return Ok((Self::default(), None));
                }
                candidate
            }
        };

        let text = std::fs::read_to_string(&path)?;
        let config = Self::from_yaml(&text, &path)?;
        Ok((config, Some(path)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use tapcalc::core::ZeroDivision;

    mod verbosity_tests {
        use super::*;

        #[test]
        fn test_default_verbosity() {
            assert_eq!(Verbosity::default(), Verbosity::Normal);
        }

        #[test]
        fn test_from_flags() {
            assert_eq!(Verbosity::from_flags(0, false), Verbosity::Normal);
            assert_eq!(Verbosity::from_flags(1, false), Verbosity::Verbose);
            assert_eq!(Verbosity::from_flags(2, false), Verbosity::Debug);
            assert_eq!(Verbosity::from_flags(3, false), Verbosity::Trace);
            assert_eq!(Verbosity::from_flags(9, false), Verbosity::Trace);
            assert_eq!(Verbosity::from_flags(3, true), Verbosity::Quiet);
        }

        #[test]
        fn test_predicates() {
            assert!(Verbosity::Quiet.is_quiet());
            assert!(!Verbosity::Normal.is_quiet());
            assert!(!Verbosity::Normal.is_verbose());
            assert!(Verbosity::Verbose.is_verbose());
            assert!(Verbosity::Trace.is_verbose());
        }

        #[test]
        fn test_filter_directive() {
            assert_eq!(Verbosity::Quiet.filter_directive(), "error");
            assert_eq!(Verbosity::Normal.filter_directive(), "warn");
            assert_eq!(Verbosity::Verbose.filter_directive(), "info");
            assert_eq!(Verbosity::Debug.filter_directive(), "debug");
            assert_eq!(Verbosity::Trace.filter_directive(), "trace");
        }
    }

    mod color_tests {
        use super::*;

        #[test]
        fn test_default_color() {
            assert_eq!(ColorChoice::default(), ColorChoice::Auto);
        }

        #[test]
        fn test_explicit_choices() {
            assert!(ColorChoice::Always.should_color());
            assert!(!ColorChoice::Never.should_color());
        }
    }

    mod config_tests {
        use super::*;

        #[test]
        fn test_builder() {
            let rules = Rules::default().with_repeated_decimal(true);
            let config = CliConfig::new()
                .with_verbosity(Verbosity::Debug)
                .with_color(ColorChoice::Never)
                .with_format(OutputFormat::Json)
                .with_rules(rules);
            assert_eq!(config.verbosity, Verbosity::Debug);
            assert_eq!(config.color, ColorChoice::Never);
            assert_eq!(config.format, OutputFormat::Json);
            assert!(config.rules.repeated_decimal);
        }

        #[test]
        fn test_from_yaml_partial() {
            let yaml = "rules:\n  zero_division: promote\nformat: json\n";
            let config = CliConfig::from_yaml(yaml, Path::new("t.yaml")).unwrap();
            assert_eq!(config.rules.zero_division, ZeroDivision::Promote);
            assert!(!config.rules.repeated_decimal);
            assert_eq!(config.format, OutputFormat::Json);
            assert_eq!(config.color, ColorChoice::Auto);
        }

        #[test]
        fn test_from_yaml_empty_is_default() {
            let config = CliConfig::from_yaml("\n", Path::new("t.yaml")).unwrap();
            assert_eq!(config, CliConfig::default());
        }

        #[test]
        fn test_from_yaml_rejects_unknown_keys() {
            let err = CliConfig::from_yaml("colour: never\n", Path::new("bad.yaml")).unwrap_err();
            assert!(err.to_string().contains("bad.yaml"));

            let nested = "rules:\n  chain: true\n";
            assert!(CliConfig::from_yaml(nested, Path::new("bad.yaml")).is_err());
        }

        #[test]
        fn test_yaml_roundtrip() {
            let config = CliConfig::new()
                .with_color(ColorChoice::Always)
                .with_rules(Rules::default().with_zero_division(ZeroDivision::Promote));
            let yaml = config.to_yaml().unwrap();
            assert!(yaml.contains("zero_division: promote"));
            assert_eq!(CliConfig::from_yaml(&yaml, Path::new("t.yaml")).unwrap(), config);
        }

        #[test]
        fn test_load_without_file_uses_defaults() {
            let dir = tempfile::tempdir().unwrap();
            let (config, path) = CliConfig::load(None, dir.path()).unwrap();
            assert_eq!(config, CliConfig::default());
            assert!(path.is_none());
        }

        #[test]
        fn test_load_default_file_in_dir() {
            let dir = tempfile::tempdir().unwrap();
            std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "verbosity: trace\n").unwrap();
            let (config, path) = CliConfig::load(None, dir.path()).unwrap();
            assert_eq!(config.verbosity, Verbosity::Trace);
            assert_eq!(path, Some(dir.path().join(DEFAULT_CONFIG_FILE)));
        }

        #[test]
        fn test_load_explicit_missing_is_error() {
            let dir = tempfile::tempdir().unwrap();
            let missing = dir.path().join("nope.yaml");
            let err = CliConfig::load(Some(&missing), dir.path()).unwrap_err();
            assert!(err.to_string().contains("not found"));
        }

        #[test]
        fn test_load_explicit_overrides_default_file() {
            let dir = tempfile::tempdir().unwrap();
            std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "color: always\n").unwrap();
            let explicit = dir.path().join("other.yaml");
            std::fs::write(&explicit, "color: never\n").unwrap();
            let (config, _) = CliConfig::load(Some(&explicit), dir.path()).unwrap();
            assert_eq!(config.color, ColorChoice::Never);
        }
    }
}
