//! Response file expansion.
//!
//! A parameter of the form `@path` stands for the tokens in the file at
//! `path`. The file is tokenized with the same rules as the command line and
//! its tokens are spliced in where the `@path` parameter was. Tokens coming
//! from a response file are not expanded again.

use std::io;
use std::path::Path;

use super::{ParamError, ParamList, tokenize_into};

/// Prefix marking a response file parameter.
pub const RESPONSE_FILE_PREFIX: char = '@';

/// Reads a response file from disk.
///
/// # Errors
///
/// Returns the underlying I/O error.
pub fn read_response_file(path: &Path) -> io::Result<String> {
    std::fs::read_to_string(path)
}

/// Replaces every `@path` parameter with the tokens of the named file.
///
/// `read` loads file contents; pass [`read_response_file`] to use the
/// filesystem.
///
/// # Errors
///
/// Returns [`ParamError::ResponseFile`] if any file cannot be read.
pub fn expand_response_files<F>(params: &ParamList, mut read: F) -> Result<ParamList, ParamError>
where
    F: FnMut(&Path) -> io::Result<String>,
{
    let mut expanded = ParamList::new();

    for arg in params {
        let Some(path) = arg
            .strip_prefix(RESPONSE_FILE_PREFIX)
            .filter(|p| !p.is_empty())
        else {
            expanded.push(arg.clone());
            continue;
        };

        let path = Path::new(path);
        let contents = read(path).map_err(|source| ParamError::ResponseFile {
            path: path.to_path_buf(),
            source,
        })?;

        let before = expanded.len();
        tokenize_into(&contents, &mut expanded);
        tracing::debug!(
            "Expanded response file {} into {} parameters",
            path.display(),
            expanded.len() - before
        );
    }

    Ok(expanded)
}
