//! Startup parameter list.
//!
//! This module provides:
//! - The ordered parameter list ([`ParamList`]) and its lookups
//! - The command-line tokenizer ([`tokenize`], [`quote_arg`], [`join_args`])
//! - Mutually exclusive parameter checks ([`check_conflicts`])
//! - Response file expansion ([`expand_response_files`])
//! - The process-wide startup list ([`init_startup`], [`check_parm`])
//!
//! # Lookup semantics
//!
//! Parameter names compare ASCII case-insensitively against whole tokens.
//! The first match in command-line order wins; a miss is `None`.

mod conflict;
mod error;
mod response;
mod tokenizer;

#[cfg(test)]
mod list_tests;

use std::ffi::OsStr;
use std::sync::OnceLock;

pub use conflict::{BUILTIN_CONFLICTS, ConflictRule, check_conflicts, enforce_conflicts};
pub use error::ParamError;
pub use response::{RESPONSE_FILE_PREFIX, expand_response_files, read_response_file};
pub use tokenizer::{join_args, quote_arg, tokenize, tokenize_into};

/// Parameter list built once at startup and shared read-only afterwards.
static STARTUP_PARAMS: OnceLock<ParamList> = OnceLock::new();

/// Ordered sequence of command-line tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamList {
    args: Vec<String>,
}

impl ParamList {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { args: Vec::new() }
    }

    /// Builds a list from already split arguments.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Builds a list from OS strings, replacing invalid UTF-8 with U+FFFD.
    pub fn from_os_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        Self {
            args: args
                .into_iter()
                .map(|arg| arg.as_ref().to_string_lossy().into_owned())
                .collect(),
        }
    }

    /// Builds a list from the arguments of the running process.
    ///
    /// Arguments that are not valid UTF-8 are converted lossily.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_os_args(std::env::args_os())
    }

    /// Builds a list by tokenizing a raw command line.
    #[must_use]
    pub fn from_command_line(cmdline: &str) -> Self {
        tokenize(cmdline)
    }

    /// Appends a token.
    pub fn push(&mut self, arg: impl Into<String>) {
        self.args.push(arg.into());
    }

    /// Number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// Returns `true` when there are no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Token at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }

    /// Iterates tokens in command-line order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.args.iter().map(String::as_str)
    }

    /// Borrows the tokens.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.args
    }

    /// Index of the first token equal to `name`, ignoring ASCII case.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<usize> {
        self.args.iter().position(|arg| arg.eq_ignore_ascii_case(name))
    }

    /// Returns `true` if `name` is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Like [`find`](Self::find), but only matches when at least `num_args`
    /// tokens follow the parameter.
    #[must_use]
    pub fn find_with_args(&self, name: &str, num_args: usize) -> Option<usize> {
        self.find(name)
            .filter(|&index| index + num_args < self.args.len())
    }

    /// Token immediately following the first occurrence of `name`.
    #[must_use]
    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.find_with_args(name, 1)
            .and_then(|index| self.get(index + 1))
    }

    /// Tokens after the first occurrence of `name`, up to the next token
    /// that starts with `-`.
    #[must_use]
    pub fn args_after(&self, name: &str) -> &[String] {
        let Some(index) = self.find(name) else {
            return &[];
        };
        let rest = &self.args[index + 1..];
        let end = rest
            .iter()
            .position(|arg| arg.starts_with('-'))
            .unwrap_or(rest.len());
        &rest[..end]
    }
}

impl<'a> IntoIterator for &'a ParamList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.args.iter()
    }
}

impl FromIterator<String> for ParamList {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self {
            args: iter.into_iter().collect(),
        }
    }
}

/// Index of the first token in `params` equal to `name`, ignoring ASCII case.
#[must_use]
pub fn find(params: &ParamList, name: &str) -> Option<usize> {
    params.find(name)
}

/// Installs the process-wide startup list.
///
/// # Errors
///
/// Returns the list back if a startup list was already installed.
pub fn init_startup(params: ParamList) -> Result<(), ParamList> {
    STARTUP_PARAMS.set(params)
}

/// The process-wide startup list, if installed.
#[must_use]
pub fn startup() -> Option<&'static ParamList> {
    STARTUP_PARAMS.get()
}

/// Looks `name` up in the process-wide startup list.
///
/// Returns `None` when the parameter is absent or no list was installed.
#[must_use]
pub fn check_parm(name: &str) -> Option<usize> {
    startup().and_then(|params| params.find(name))
}
