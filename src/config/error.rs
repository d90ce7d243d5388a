//! Error types for configuration defaults and persistence.

use std::path::PathBuf;

use thiserror::Error;

use super::value::{Bounds, Kind};

/// Error type for configuration operations.
///
/// Most of these are recoverable: when a persisted value is rejected the
/// entry's default is used and the error is reported as a warning.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the configuration text.
    #[error("Failed to parse config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Value has the wrong shape for the entry.
    #[error("Invalid value for '{name}': expected {expected}, found {found}")]
    TypeMismatch {
        /// Entry name
        name: String,
        /// Kind of the entry
        expected: Kind,
        /// Shape of the rejected value
        found: &'static str,
    },

    /// Integral value outside the entry's bounds.
    #[error("Value {value} for '{name}' is out of range {bounds}")]
    OutOfRange {
        /// Entry name
        name: String,
        /// The rejected value
        value: i64,
        /// Accepted range
        bounds: Bounds,
    },

    /// One field of an input binding is invalid.
    #[error("Invalid {field} binding {value} for '{name}'")]
    InvalidInput {
        /// Entry name
        name: String,
        /// Which part of the binding: key, mouse or joy
        field: &'static str,
        /// The rejected value
        value: i32,
    },

    /// Two entries of a defaults table share a name.
    #[error("Duplicate configuration entry '{0}'")]
    DuplicateEntry(String),

    /// No entry with this name exists.
    #[error("Unknown configuration entry '{0}'")]
    UnknownEntry(String),

    /// Operation needs a value-carrying entry but got a header.
    #[error("'{0}' is a section header and holds no value")]
    NotBindable(String),
}
