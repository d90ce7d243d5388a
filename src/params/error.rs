//! Error types for startup parameter handling.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for parameter list operations.
///
/// Tokenizing never fails; these cover policy checks and response files.
#[derive(Debug, Error)]
pub enum ParamError {
    /// Two mutually exclusive parameters were both given.
    #[error("'{first}' cannot be used together with '{second}': {reason}")]
    Conflict {
        /// Parameter from the first family, as given on the command line
        first: String,
        /// Parameter from the second family, as given on the command line
        second: String,
        /// Why the combination is refused
        reason: &'static str,
    },

    /// Failed to read a response file named by an `@path` parameter.
    #[error("Failed to read response file '{}': {source}", path.display())]
    ResponseFile {
        /// Path to the response file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
