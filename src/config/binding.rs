//! Accessor handles from entries into [`Settings`].
//!
//! An entry never owns the value it configures. It holds a [`Field`], a pair
//! of projections into the settings object owned by the caller.

use std::fmt;

use super::settings::Settings;
use super::value::{InputBinding, Kind};

/// Projection of one `T` out of [`Settings`].
pub struct Field<T> {
    get: fn(&Settings) -> &T,
    get_mut: fn(&mut Settings) -> &mut T,
}

impl<T> Field<T> {
    /// Creates a handle from a shared and a mutable projection.
    #[must_use]
    pub const fn new(get: fn(&Settings) -> &T, get_mut: fn(&mut Settings) -> &mut T) -> Self {
        Self { get, get_mut }
    }

    /// Reads the bound value.
    #[must_use]
    pub fn read<'a>(&self, settings: &'a Settings) -> &'a T {
        (self.get)(settings)
    }

    /// Borrows the bound value mutably.
    pub fn read_mut<'a>(&self, settings: &'a mut Settings) -> &'a mut T {
        (self.get_mut)(settings)
    }

    /// Overwrites the bound value.
    pub fn write(&self, settings: &mut Settings, value: T) {
        *self.read_mut(settings) = value;
    }
}

impl<T> Clone for Field<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Field<T> {}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Field")
    }
}

/// Builds a [`Field`] from a path into [`Settings`], e.g.
/// `field!(sound.sfx_volume)` or `field!(files.wadfiles[0])`.
#[macro_export]
macro_rules! field {
    ($($path:tt)+) => {
        $crate::config::Field::new(|s| &s.$($path)+, |s| &mut s.$($path)+)
    };
}

/// Where an entry's value lives. The active arm follows the entry's [`Kind`].
#[derive(Debug, Clone, Copy)]
pub enum Binding {
    /// Header pseudo-entry
    None,
    /// Integer, hex integer and color entries
    Int(Field<i32>),
    /// Boolean entries
    Bool(Field<bool>),
    /// String entries
    Str(Field<String>),
    /// Array entries
    Array(Field<Vec<String>>),
    /// Input entries
    Input(Field<InputBinding>),
}

impl Binding {
    /// Returns `true` if this arm may back an entry of `kind`.
    #[must_use]
    pub const fn accepts(&self, kind: Kind) -> bool {
        match self {
            Self::None => matches!(kind, Kind::None),
            Self::Int(_) => kind.is_integral(),
            Self::Bool(_) => matches!(kind, Kind::Boolean),
            Self::Str(_) => matches!(kind, Kind::String),
            Self::Array(_) => matches!(kind, Kind::Array),
            Self::Input(_) => matches!(kind, Kind::Input),
        }
    }
}
