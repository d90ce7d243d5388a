//! A single configuration entry.

use crate::message::{MessageLevel, MessageSink};

use super::binding::{Binding, Field};
use super::defaults::{MAX_JOY_BUTTONS, MAX_MOUSE_BUTTONS, NUM_KEYS};
use super::error::ConfigError;
use super::menu::{MenuNodeId, MenuTag, SetupScreen};
use super::settings::Settings;
use super::value::{Bounds, DefaultValue, InputBinding, Kind, Value};

/// One named, typed, bounds-checked option bound to a field of [`Settings`].
///
/// Entries can only be created through the kind-specific constructors, so
/// the kind, the binding arm and the default always agree. Header entries
/// ([`DefaultEntry::header`]) only label a section of the registry.
#[derive(Debug, Clone, Copy)]
pub struct DefaultEntry {
    name: &'static str,
    kind: Kind,
    binding: Binding,
    default: DefaultValue,
    bounds: Bounds,
    menu: MenuTag,
    ident: u16,
    menu_node: Option<MenuNodeId>,
}

impl DefaultEntry {
    const fn build(
        name: &'static str,
        kind: Kind,
        binding: Binding,
        default: DefaultValue,
        bounds: Bounds,
    ) -> Self {
        Self {
            name,
            kind,
            binding,
            default,
            bounds,
            menu: MenuTag::NONE,
            ident: 0,
            menu_node: None,
        }
    }

    /// Section header with the given title.
    #[must_use]
    pub const fn header(title: &'static str) -> Self {
        Self::build(title, Kind::None, Binding::None, DefaultValue::None, Bounds::UNBOUNDED)
    }

    /// Decimal integer entry.
    #[must_use]
    pub const fn integer(name: &'static str, field: Field<i32>, default: i32, bounds: Bounds) -> Self {
        Self::build(name, Kind::Integer, Binding::Int(field), DefaultValue::Int(default), bounds)
    }

    /// Integer entry written in hexadecimal.
    #[must_use]
    pub const fn hex(name: &'static str, field: Field<i32>, default: i32, bounds: Bounds) -> Self {
        Self::build(name, Kind::HexInteger, Binding::Int(field), DefaultValue::Int(default), bounds)
    }

    /// Palette color entry.
    #[must_use]
    pub const fn color(name: &'static str, field: Field<i32>, default: i32) -> Self {
        Self::build(name, Kind::Color, Binding::Int(field), DefaultValue::Int(default), Bounds::PALETTE)
    }

    /// On/off entry.
    #[must_use]
    pub const fn boolean(name: &'static str, field: Field<bool>, default: bool) -> Self {
        Self::build(name, Kind::Boolean, Binding::Bool(field), DefaultValue::Bool(default), Bounds::BOOLEAN)
    }

    /// Free text entry.
    #[must_use]
    pub const fn string(name: &'static str, field: Field<String>, default: &'static str) -> Self {
        Self::build(name, Kind::String, Binding::Str(field), DefaultValue::Str(default), Bounds::UNBOUNDED)
    }

    /// String list entry.
    #[must_use]
    pub const fn array(
        name: &'static str,
        field: Field<Vec<String>>,
        default: &'static [&'static str],
    ) -> Self {
        Self::build(name, Kind::Array, Binding::Array(field), DefaultValue::Array(default), Bounds::UNBOUNDED)
    }

    /// Input binding entry.
    #[must_use]
    pub const fn input(name: &'static str, field: Field<InputBinding>, default: InputBinding) -> Self {
        Self::build(name, Kind::Input, Binding::Input(field), DefaultValue::Input(default), Bounds::UNBOUNDED)
    }

    /// Places the entry on a setup screen.
    #[must_use]
    pub const fn with_menu(self, screen: SetupScreen, group: u16) -> Self {
        Self {
            menu: MenuTag::new(screen, group),
            ..self
        }
    }

    /// Sets the slot number of an entry that is one of a numbered family.
    #[must_use]
    pub const fn with_ident(self, ident: u16) -> Self {
        Self { ident, ..self }
    }

    /// Entry name, or section title for headers.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Type tag.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        self.kind
    }

    /// Storage handle.
    #[must_use]
    pub const fn binding(&self) -> Binding {
        self.binding
    }

    /// Validation range.
    #[must_use]
    pub const fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Setup menu placement.
    #[must_use]
    pub const fn menu(&self) -> MenuTag {
        self.menu
    }

    /// Slot number within a numbered family.
    #[must_use]
    pub const fn ident(&self) -> u16 {
        self.ident
    }

    /// Linked setup menu node, if any.
    #[must_use]
    pub const fn menu_node(&self) -> Option<MenuNodeId> {
        self.menu_node
    }

    pub(super) fn set_menu_node(&mut self, node: MenuNodeId) {
        self.menu_node = Some(node);
    }

    /// Returns `true` for section headers.
    #[must_use]
    pub const fn is_header(&self) -> bool {
        matches!(self.kind, Kind::None)
    }

    /// Compiled-in default.
    #[must_use]
    pub const fn default_raw(&self) -> DefaultValue {
        self.default
    }

    /// Owned default value, `None` for headers.
    #[must_use]
    pub fn default_value(&self) -> Option<Value> {
        self.default.to_value()
    }

    /// Current value in `settings`, `None` for headers.
    #[must_use]
    pub fn live_value(&self, settings: &Settings) -> Option<Value> {
        match self.binding {
            Binding::None => None,
            Binding::Int(f) => Some(Value::Int(*f.read(settings))),
            Binding::Bool(f) => Some(Value::Bool(*f.read(settings))),
            Binding::Str(f) => Some(Value::Str(f.read(settings).clone())),
            Binding::Array(f) => Some(Value::Array(f.read(settings).clone())),
            Binding::Input(f) => Some(Value::Input(*f.read(settings))),
        }
    }

    /// Writes the default into `settings`. Headers are left alone.
    pub fn reset(&self, settings: &mut Settings) {
        match (self.binding, self.default) {
            (Binding::Int(f), DefaultValue::Int(v)) => f.write(settings, v),
            (Binding::Bool(f), DefaultValue::Bool(v)) => f.write(settings, v),
            (Binding::Str(f), DefaultValue::Str(v)) => f.write(settings, v.to_string()),
            (Binding::Array(f), DefaultValue::Array(v)) => {
                f.write(settings, v.iter().map(ToString::to_string).collect());
            }
            (Binding::Input(f), DefaultValue::Input(v)) => f.write(settings, v),
            _ => {}
        }
    }

    /// Validates `value` and stores it, leaving `settings` untouched on error.
    ///
    /// Boolean entries also take the integers of their bounds (0 and 1).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotBindable`] for headers,
    /// [`ConfigError::TypeMismatch`] for a value of the wrong shape,
    /// [`ConfigError::OutOfRange`] for integers outside the bounds and
    /// [`ConfigError::InvalidInput`] for an invalid input binding field.
    pub fn set(&self, settings: &mut Settings, value: Value) -> Result<(), ConfigError> {
        match (self.binding, value) {
            (Binding::None, _) => Err(ConfigError::NotBindable(self.name.to_string())),
            (Binding::Int(f), Value::Int(v)) => {
                self.check_bounds(i64::from(v))?;
                f.write(settings, v);
                Ok(())
            }
            (Binding::Bool(f), Value::Bool(v)) => {
                f.write(settings, v);
                Ok(())
            }
            (Binding::Bool(f), Value::Int(v)) => {
                self.check_bounds(i64::from(v))?;
                f.write(settings, v != 0);
                Ok(())
            }
            (Binding::Str(f), Value::Str(v)) => {
                f.write(settings, v);
                Ok(())
            }
            (Binding::Array(f), Value::Array(v)) => {
                f.write(settings, v);
                Ok(())
            }
            (Binding::Input(f), Value::Input(v)) => {
                if let Some(e) = self.input_errors(v).into_iter().next() {
                    return Err(e);
                }
                f.write(settings, v);
                Ok(())
            }
            (_, other) => Err(ConfigError::TypeMismatch {
                name: self.name.to_string(),
                expected: self.kind,
                found: other.shape(),
            }),
        }
    }

    /// Applies a persisted value, falling back to the default when it is
    /// rejected.
    ///
    /// Input bindings are checked field by field: a bad key does not discard
    /// a good mouse or joystick button. Every rejection is emitted to `sink`
    /// as a warning and returned.
    pub fn apply(
        &self,
        settings: &mut Settings,
        value: Value,
        sink: &impl MessageSink,
    ) -> Vec<ConfigError> {
        let warnings = match (self.binding, value) {
            (Binding::Input(f), Value::Input(v)) => self.apply_input(f, settings, v),
            (_, value) => match self.set(settings, value) {
                Ok(()) => Vec::new(),
                Err(e) => {
                    self.reset(settings);
                    vec![e]
                }
            },
        };

        for warning in &warnings {
            sink.emit(MessageLevel::WARN, &format!("{warning}, using default"));
        }
        warnings
    }

    /// Integer range check; always passes for unbounded entries.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::OutOfRange`] when `value` is outside the bounds.
    pub fn check_bounds(&self, value: i64) -> Result<(), ConfigError> {
        if self.bounds.contains(value) {
            Ok(())
        } else {
            Err(ConfigError::OutOfRange {
                name: self.name.to_string(),
                value,
                bounds: self.bounds,
            })
        }
    }

    fn apply_input(
        &self,
        field: Field<InputBinding>,
        settings: &mut Settings,
        incoming: InputBinding,
    ) -> Vec<ConfigError> {
        let fallback = match self.default {
            DefaultValue::Input(v) => v,
            _ => InputBinding::NONE,
        };
        let mut warnings = Vec::new();
        let mut pick = |part: &'static str, value: i32, default: i32, limit: i32| {
            if input_field_valid(value, limit) {
                value
            } else {
                warnings.push(self.invalid_input(part, value));
                default
            }
        };

        let binding = InputBinding::new(
            pick("key", incoming.key, fallback.key, NUM_KEYS),
            pick("mouse", incoming.mouse, fallback.mouse, MAX_MOUSE_BUTTONS),
            pick("joy", incoming.joy, fallback.joy, MAX_JOY_BUTTONS),
        );
        field.write(settings, binding);
        warnings
    }

    fn input_errors(&self, binding: InputBinding) -> Vec<ConfigError> {
        [
            ("key", binding.key, NUM_KEYS),
            ("mouse", binding.mouse, MAX_MOUSE_BUTTONS),
            ("joy", binding.joy, MAX_JOY_BUTTONS),
        ]
        .into_iter()
        .filter(|&(_, value, limit)| !input_field_valid(value, limit))
        .map(|(part, value, _)| self.invalid_input(part, value))
        .collect()
    }

    fn invalid_input(&self, field: &'static str, value: i32) -> ConfigError {
        ConfigError::InvalidInput {
            name: self.name.to_string(),
            field,
            value,
        }
    }
}

fn input_field_valid(value: i32, limit: i32) -> bool {
    value == InputBinding::UNSET || (0..limit).contains(&value)
}
