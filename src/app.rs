//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use doomcfg::config::ConfigError;
use doomcfg::params::{ParamError, ParamList};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - unreadable or malformed config, bad response file.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;
}

/// Parameter that prints the version and exits.
pub const VERSION_PARAM: &str = "-v";

/// Parameter that turns on debug logging.
pub const VERBOSE_PARAM: &str = "-verbose";

/// Returns `true` if the version was asked for on the raw command line.
///
/// Checked before response files are expanded, so an unreadable `@path`
/// cannot stop `-v` from answering.
pub fn version_requested(raw: &ParamList) -> bool {
    raw.contains(VERSION_PARAM)
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    match error {
        ConfigError::FileRead { .. } => {
            eprintln!("\nRun 'doomcfg -printconfig' to see a configuration with all defaults.");
        }
        ConfigError::TomlParse(_) => {
            eprintln!("\nEach line of the config file is 'name = value'; run 'doomcfg -dumpconfig' to list the names.");
        }
        _ => {}
    }
}

/// Prints helpful hints for command line errors.
pub fn print_param_hint(error: &ParamError) {
    if let ParamError::ResponseFile { .. } = error {
        eprintln!("\nResponse files are given as '@path' and hold whitespace-separated arguments.");
    }
}

/// Sets up the tracing subscriber for logging.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
