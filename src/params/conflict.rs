//! Mutually exclusive startup parameters.

use crate::message::MessageSink;

use super::{ParamError, ParamList};

/// Two parameter families that must not appear together.
#[derive(Debug, Clone, Copy)]
pub struct ConflictRule {
    /// First family; any member counts as present
    pub first: &'static [&'static str],
    /// Second family; any member counts as present
    pub second: &'static [&'static str],
    /// Human-readable explanation
    pub reason: &'static str,
}

impl ConflictRule {
    /// Returns the first present member of each family if both are present.
    #[must_use]
    pub fn detect<'a>(&self, params: &'a ParamList) -> Option<(&'a str, &'a str)> {
        let first = first_present(params, self.first)?;
        let second = first_present(params, self.second)?;
        Some((first, second))
    }
}

fn first_present<'a>(params: &'a ParamList, family: &[&str]) -> Option<&'a str> {
    family
        .iter()
        .find_map(|name| params.find(name))
        .and_then(|index| params.get(index))
}

/// Conflicts checked at every startup.
pub const BUILTIN_CONFLICTS: &[ConflictRule] = &[ConflictRule {
    first: &["-record", "-recordfromto"],
    second: &["-playdemo", "-timedemo", "-fastdemo"],
    reason: "a demo cannot be recorded while another demo is played back",
}];

/// Checks `params` against `rules`, reporting the first rule that fires.
///
/// # Errors
///
/// Returns [`ParamError::Conflict`] naming both offending parameters.
pub fn check_conflicts(params: &ParamList, rules: &[ConflictRule]) -> Result<(), ParamError> {
    for rule in rules {
        if let Some((first, second)) = rule.detect(params) {
            return Err(ParamError::Conflict {
                first: first.to_string(),
                second: second.to_string(),
                reason: rule.reason,
            });
        }
    }
    Ok(())
}

/// Checks the built-in rules and terminates through `sink` on a conflict.
///
/// Only returns when no rule fires.
pub fn enforce_conflicts(params: &ParamList, sink: &impl MessageSink) {
    if let Err(e) = check_conflicts(params, BUILTIN_CONFLICTS) {
        sink.fatal(&e.to_string());
    }
}
