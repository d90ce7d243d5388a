//! Config file text layer.
//!
//! The config file is a flat list of `name = value` pairs in TOML syntax.
//! Reading and writing the file itself is up to the caller; this module
//! turns text into validated [`Settings`] and back.
//!
//! # Loading
//!
//! Every value-carrying entry is visited in registry order:
//! - present and valid: stored
//! - present but invalid (wrong type, out of range): default stored, warning
//! - missing: default stored
//!
//! Keys that match no entry are ignored so that files written by older or
//! newer versions still load.
//!
//! # Encoding
//!
//! | kind        | written as                          |
//! |-------------|-------------------------------------|
//! | integer     | decimal                             |
//! | hex integer | `0x` literal (decimal if negative)  |
//! | color       | decimal palette index               |
//! | boolean     | `true` / `false` (0 and 1 accepted) |
//! | string      | quoted string                       |
//! | array       | array of strings                    |
//! | input       | `{ key = .., mouse = .., joy = .. }` |

use crate::message::{MessageLevel, MessageSink};

use super::entry::DefaultEntry;
use super::error::ConfigError;
use super::registry::Registry;
use super::settings::Settings;
use super::value::{InputBinding, Kind, Value};

/// Outcome of [`load_str`].
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Entries whose stored value came from the text
    pub applied: Vec<&'static str>,
    /// Entries missing from the text, set to their default
    pub defaulted: Vec<&'static str>,
    /// Keys in the text that match no entry
    pub unknown: Vec<String>,
    /// Rejected values; the affected entries hold their default
    pub warnings: Vec<ConfigError>,
}

impl LoadReport {
    /// Returns `true` if no value was rejected.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Loads config text into `settings`.
///
/// Every value-carrying entry is written, from the text or from its default.
/// Rejected values are reported to `sink` at [`MessageLevel::WARN`], unknown
/// keys at [`MessageLevel::DEBUG`].
///
/// # Errors
///
/// Returns [`ConfigError::TomlParse`] if the text is not valid TOML. Invalid
/// individual values are not errors; they end up in
/// [`LoadReport::warnings`].
pub fn load_str(
    registry: &Registry,
    settings: &mut Settings,
    text: &str,
    sink: &impl MessageSink,
) -> Result<LoadReport, ConfigError> {
    let mut table: toml::Table = toml::from_str(text)?;
    let mut report = LoadReport::default();

    for entry in registry.settings() {
        let Some(raw) = table.remove(entry.name()) else {
            entry.reset(settings);
            report.defaulted.push(entry.name());
            continue;
        };

        let warnings = match decode(entry, raw) {
            Ok(value) => entry.apply(settings, value, sink),
            Err(e) => {
                sink.emit(MessageLevel::WARN, &format!("{e}, using default"));
                entry.reset(settings);
                vec![e]
            }
        };

        if warnings.is_empty() {
            report.applied.push(entry.name());
        }
        report.warnings.extend(warnings);
    }

    for key in table.keys() {
        sink.emit(MessageLevel::DEBUG, &format!("Ignoring unknown config key '{key}'"));
    }
    report.unknown = table.into_iter().map(|(key, _)| key).collect();

    sink.emit(
        MessageLevel::DEBUG,
        &format!(
            "Loaded config: {} applied, {} defaulted, {} rejected, {} unknown",
            report.applied.len(),
            report.defaulted.len(),
            report.warnings.len(),
            report.unknown.len()
        ),
    );
    Ok(report)
}

/// Renders `settings` as config text, in registry order.
///
/// Section headers become `#` comment lines.
#[must_use]
pub fn save_string(registry: &Registry, settings: &Settings) -> String {
    let mut out = String::new();

    for entry in registry {
        if entry.is_header() {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&format!("# {}\n", entry.name()));
            continue;
        }
        if let Some(value) = entry.live_value(settings) {
            out.push_str(&format!("{} = {}\n", entry.name(), encode(entry.kind(), &value)));
        }
    }

    out
}

/// Converts a parsed TOML value into the entry's value shape.
fn decode(entry: &DefaultEntry, raw: toml::Value) -> Result<Value, ConfigError> {
    let mismatch = |found: &'static str| ConfigError::TypeMismatch {
        name: entry.name().to_string(),
        expected: entry.kind(),
        found,
    };
    let narrow = |v: i64| {
        i32::try_from(v).map_err(|_| ConfigError::OutOfRange {
            name: entry.name().to_string(),
            value: v,
            bounds: entry.bounds(),
        })
    };

    match (entry.kind(), raw) {
        (Kind::Integer | Kind::HexInteger | Kind::Color | Kind::Boolean, toml::Value::Integer(v)) => {
            narrow(v).map(Value::Int)
        }
        (Kind::Boolean, toml::Value::Boolean(v)) => Ok(Value::Bool(v)),
        (Kind::String, toml::Value::String(v)) => Ok(Value::Str(v)),
        (Kind::Array, toml::Value::Array(items)) => items
            .into_iter()
            .map(|item| match item {
                toml::Value::String(s) => Ok(s),
                other => Err(mismatch(other.type_str())),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        (Kind::Input, raw @ toml::Value::Table(_)) => raw
            .try_into::<InputBinding>()
            .map(Value::Input)
            .map_err(|_| mismatch("table")),
        // A bare number binds the key only.
        (Kind::Input, toml::Value::Integer(v)) => narrow(v).map(|key| Value::Input(InputBinding::key(key))),
        (_, other) => Err(mismatch(other.type_str())),
    }
}

/// Writes a value the way [`decode`] reads it back.
fn encode(kind: Kind, value: &Value) -> String {
    match value {
        Value::Int(v) if kind == Kind::HexInteger && *v >= 0 => format!("0x{v:x}"),
        Value::Int(v) => v.to_string(),
        Value::Bool(v) => v.to_string(),
        Value::Str(s) => toml::Value::String(s.clone()).to_string(),
        Value::Array(items) => {
            toml::Value::Array(items.iter().cloned().map(toml::Value::String).collect()).to_string()
        }
        Value::Input(b) => format!("{{ key = {}, mouse = {}, joy = {} }}", b.key, b.mouse, b.joy),
    }
}
