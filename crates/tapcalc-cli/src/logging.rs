//! Tracing subscriber setup

use std::path::PathBuf;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Verbosity;

/// Env var naming the log file used in TUI mode
pub const LOG_FILE_ENV: &str = "TAPCALC_LOG";

/// `RUST_LOG` when set, otherwise the verbosity's level
fn filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()))
}

/// Logs to stderr, for the line-oriented commands.
///
/// With `json`, one JSON object per event.
pub fn init_stderr(verbosity: Verbosity, json: bool) {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);
    let registry = tracing_subscriber::registry().with(filter(verbosity));

    // A second init in the same process (tests) is not an error
    let _ = if json {
        registry.with(layer.json()).try_init()
    } else {
        registry.with(layer).try_init()
    };
}

/// The TUI log file named by [`LOG_FILE_ENV`], if any
#[must_use]
pub fn tui_log_path() -> Option<PathBuf> {
    std::env::var_os(LOG_FILE_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Logs to a file for TUI mode.
///
/// Logging stays off unless [`LOG_FILE_ENV`] is set, since anything written
/// to the terminal would corrupt the display.
pub fn init_tui(verbosity: Verbosity) {
    let Some(path) = tui_log_path() else {
        return;
    };

    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
    {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: failed to open log file {}: {err}", path.display());
            return;
        }
    };

    let layer = fmt::layer()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    let _ = tracing_subscriber::registry()
        .with(filter(verbosity))
        .with(layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_stderr_twice_is_harmless() {
        init_stderr(Verbosity::Normal, false);
        init_stderr(Verbosity::Trace, true);
    }

    #[test]
    fn test_filter_builds_for_every_level() {
        for v in [
            Verbosity::Quiet,
            Verbosity::Normal,
            Verbosity::Verbose,
            Verbosity::Debug,
            Verbosity::Trace,
        ] {
            let _ = filter(v);
        }
    }
}
