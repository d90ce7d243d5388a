//! doomcfg: command line and configuration defaults inspector
//!
//! Entry point for the doomcfg application.

use std::path::Path;
use std::process::ExitCode;

use doomcfg::config::{self, ConfigError, Registry, Settings, load_str, save_string};
use doomcfg::message::{MessageLevel, TracingSink};
use doomcfg::params::{self, ParamList, enforce_conflicts, expand_response_files, read_response_file};
use doomcfg::version::version_string;

mod app;

use app::{
    VERBOSE_PARAM, exit_code, print_config_hint, print_param_hint, setup_tracing,
    version_requested,
};

/// Main entry point.
///
/// The parameter list comes from the argv the OS has already split;
/// the tokenizer is only needed for `@path` response files.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let raw = ParamList::from_env();
    let verbose = raw.contains(VERBOSE_PARAM);
    setup_tracing(verbose);

    if version_requested(&raw) {
        tracing::info!("{}", version_string());
        return exit_code::SUCCESS;
    }

    let params = match expand_response_files(&raw, read_response_file) {
        Ok(params) => params,
        Err(e) => {
            eprintln!("Command line error: {e}");
            print_param_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    };

    let sink = if verbose {
        TracingSink::with_mask(MessageLevel::all())
    } else {
        TracingSink::default()
    };
    enforce_conflicts(&params, &sink);
    let config_path = params.value_of("-config").map(ToString::to_string);
    let print_config = params.contains("-printconfig");
    let dump_config = params.contains("-dumpconfig");

    if params::init_startup(params).is_err() {
        tracing::debug!("Startup parameters already installed");
    }

    let registry = config::defaults();
    let mut settings = Settings::default();
    registry.reset_to_defaults(&mut settings);

    if let Some(path) = config_path {
        if let Err(e) = load_config(registry, &mut settings, Path::new(&path), &sink) {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    }

    if dump_config {
        match serde_json::to_string_pretty(&registry.describe()) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                tracing::error!("Failed to serialize defaults: {e}");
                return exit_code::CONFIG_ERROR;
            }
        }
    }

    if print_config {
        print!("{}", save_string(registry, &settings));
    }

    exit_code::SUCCESS
}

/// Reads a config file into `settings`.
///
/// Rejected values fall back to their defaults and are reported to `sink`.
fn load_config(
    registry: &Registry,
    settings: &mut Settings,
    path: &Path,
    sink: &TracingSink,
) -> Result<(), ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let report = load_str(registry, settings, &text, sink)?;
    tracing::info!(
        "Loaded {} ({} values, {} defaulted, {} rejected)",
        path.display(),
        report.applied.len(),
        report.defaulted.len(),
        report.warnings.len()
    );
    Ok(())
}
