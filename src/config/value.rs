//! Value shapes stored by configuration entries.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Type tag of a configuration entry.
///
/// `Boolean` and `Color` store integers like `Integer` but are written
/// differently in the config file: `true`/`false` and palette index.
/// `HexInteger` is written as a `0x` literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    /// Header pseudo-entry, no value
    None,
    /// Free text
    String,
    /// Decimal integer
    Integer,
    /// Integer written in hexadecimal
    HexInteger,
    /// List of strings
    Array,
    /// Key, mouse button and joystick button triple
    Input,
    /// On/off switch
    Boolean,
    /// Palette index
    Color,
}

impl Kind {
    /// Returns `true` for the kinds backed by an integer cell.
    #[must_use]
    pub const fn is_integral(self) -> bool {
        matches!(self, Self::Integer | Self::HexInteger | Self::Color)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::String => "string",
            Self::Integer => "integer",
            Self::HexInteger => "hex integer",
            Self::Array => "array",
            Self::Input => "input",
            Self::Boolean => "boolean",
            Self::Color => "color",
        };
        f.write_str(name)
    }
}

/// Inclusive validation range for integral entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bounds {
    min: i32,
    max: i32,
}

impl Bounds {
    /// Sentinel meaning "no range check".
    pub const UNBOUNDED: Self = Self {
        min: i32::MIN,
        max: i32::MAX,
    };

    /// Range of boolean entries.
    pub const BOOLEAN: Self = Self::new(0, 1);

    /// Range of palette colors.
    pub const PALETTE: Self = Self::new(0, 255);

    /// Creates an inclusive range.
    #[must_use]
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Lower limit.
    #[must_use]
    pub const fn min(self) -> i32 {
        self.min
    }

    /// Upper limit.
    #[must_use]
    pub const fn max(self) -> i32 {
        self.max
    }

    /// Returns `true` for the [`UNBOUNDED`](Self::UNBOUNDED) sentinel.
    #[must_use]
    pub const fn is_unbounded(self) -> bool {
        self.min == i32::MIN && self.max == i32::MAX
    }

    /// Returns `true` if `value` passes the range check.
    #[must_use]
    pub fn contains(self, value: i64) -> bool {
        self.is_unbounded() || (i64::from(self.min)..=i64::from(self.max)).contains(&value)
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unbounded() {
            f.write_str("unbounded")
        } else {
            write!(f, "{}..={}", self.min, self.max)
        }
    }
}

const fn unset() -> i32 {
    InputBinding::UNSET
}

/// Key, mouse button and joystick button bound to one game action.
///
/// Each field is independent and may be [`InputBinding::UNSET`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputBinding {
    /// Key code
    #[serde(default = "unset")]
    pub key: i32,
    /// Mouse button number
    #[serde(default = "unset")]
    pub mouse: i32,
    /// Joystick button number
    #[serde(default = "unset")]
    pub joy: i32,
}

impl InputBinding {
    /// Marks a field that has no binding.
    pub const UNSET: i32 = -1;

    /// Binding with nothing assigned.
    pub const NONE: Self = Self::new(Self::UNSET, Self::UNSET, Self::UNSET);

    /// Creates a binding from all three fields.
    #[must_use]
    pub const fn new(key: i32, mouse: i32, joy: i32) -> Self {
        Self { key, mouse, joy }
    }

    /// Binding with only a key assigned.
    #[must_use]
    pub const fn key(key: i32) -> Self {
        Self::new(key, Self::UNSET, Self::UNSET)
    }
}

impl Default for InputBinding {
    fn default() -> Self {
        Self::NONE
    }
}

/// A live or default value read from or written to a binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Integer, hex integer and color entries
    Int(i32),
    /// Boolean entries
    Bool(bool),
    /// String entries
    Str(String),
    /// Array entries
    Array(Vec<String>),
    /// Input entries
    Input(InputBinding),
}

impl Value {
    /// Short name of the value's shape, used in error messages.
    #[must_use]
    pub const fn shape(&self) -> &'static str {
        match self {
            Self::Int(_) => "integer",
            Self::Bool(_) => "boolean",
            Self::Str(_) => "string",
            Self::Array(_) => "array",
            Self::Input(_) => "input",
        }
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<Vec<String>> for Value {
    fn from(v: Vec<String>) -> Self {
        Self::Array(v)
    }
}

impl From<InputBinding> for Value {
    fn from(v: InputBinding) -> Self {
        Self::Input(v)
    }
}

/// Compiled-in default, in a form usable from a `static` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    /// Header pseudo-entries
    None,
    /// Integral kinds
    Int(i32),
    /// Boolean kind
    Bool(bool),
    /// String kind
    Str(&'static str),
    /// Array kind
    Array(&'static [&'static str]),
    /// Input kind
    Input(InputBinding),
}

impl DefaultValue {
    /// Owned value, or `None` for headers.
    #[must_use]
    pub fn to_value(self) -> Option<Value> {
        match self {
            Self::None => None,
            Self::Int(v) => Some(Value::Int(v)),
            Self::Bool(v) => Some(Value::Bool(v)),
            Self::Str(v) => Some(Value::Str(v.to_string())),
            Self::Array(v) => Some(Value::Array(v.iter().map(ToString::to_string).collect())),
            Self::Input(v) => Some(Value::Input(v)),
        }
    }
}
