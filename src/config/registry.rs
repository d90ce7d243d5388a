//! The defaults registry.
//!
//! An ordered, fixed set of [`DefaultEntry`] values built once from a table.
//! The registry describes settings; it never stores them. Values live in a
//! [`Settings`] passed to each call.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Serialize;

use crate::message::MessageSink;

use super::entry::DefaultEntry;
use super::error::ConfigError;
use super::menu::{MenuNodeId, MenuTag, SetupScreen};
use super::settings::Settings;
use super::table::DEFAULT_TABLE;
use super::value::{Kind, Value};

/// Registry built from [`DEFAULT_TABLE`] on first use.
static DEFAULTS: OnceLock<Registry> = OnceLock::new();

/// Ordered configuration entries with lookup by name.
#[derive(Debug, Clone)]
pub struct Registry {
    entries: Vec<DefaultEntry>,
    by_name: HashMap<&'static str, usize>,
}

impl Registry {
    /// Builds a registry from a table, keeping its order.
    ///
    /// Header entries are kept for display but are not indexed by name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateEntry`] if two non-header entries share
    /// a name.
    pub fn from_table(table: &[DefaultEntry]) -> Result<Self, ConfigError> {
        let mut by_name = HashMap::with_capacity(table.len());
        for (index, entry) in table.iter().enumerate() {
            if entry.is_header() {
                continue;
            }
            if by_name.insert(entry.name(), index).is_some() {
                return Err(ConfigError::DuplicateEntry(entry.name().to_string()));
            }
        }

        Ok(Self {
            entries: table.to_vec(),
            by_name,
        })
    }

    /// Builds a registry from the compiled-in table.
    ///
    /// # Errors
    ///
    /// Fails only if the compiled-in table has duplicate names.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_table(DEFAULT_TABLE)
    }

    /// Number of entries, headers included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the registry has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry named `name`. Headers are never returned.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&DefaultEntry> {
        self.position(name).map(|index| &self.entries[index])
    }

    /// Declaration index of the entry named `name`.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// All entries, headers included, in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, DefaultEntry> {
        self.entries.iter()
    }

    /// Value-carrying entries in declaration order.
    pub fn settings(&self) -> impl Iterator<Item = &DefaultEntry> {
        self.entries.iter().filter(|e| !e.is_header())
    }

    /// Entries listed on a setup screen.
    pub fn for_screen(&self, screen: SetupScreen) -> impl Iterator<Item = &DefaultEntry> {
        self.settings().filter(move |e| e.menu().screen == screen)
    }

    /// Entries listed in one group of a setup screen.
    pub fn for_group(&self, tag: MenuTag) -> impl Iterator<Item = &DefaultEntry> {
        self.settings().filter(move |e| e.menu() == tag)
    }

    /// Entries sharing `prefix` (e.g. `wadfile_`), ordered by identifier.
    #[must_use]
    pub fn family(&self, prefix: &str) -> Vec<&DefaultEntry> {
        let mut members: Vec<_> = self
            .settings()
            .filter(|e| e.name().starts_with(prefix))
            .collect();
        members.sort_by_key(|e| e.ident());
        members
    }

    /// Writes every default into `settings`.
    pub fn reset_to_defaults(&self, settings: &mut Settings) {
        for entry in self.settings() {
            entry.reset(settings);
        }
    }

    /// Applies a persisted value to the entry named `name`.
    ///
    /// Rejected values are replaced by the default, emitted to `sink` and
    /// returned as warnings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownEntry`] if no entry has that name.
    pub fn apply(
        &self,
        name: &str,
        settings: &mut Settings,
        value: Value,
        sink: &impl MessageSink,
    ) -> Result<Vec<ConfigError>, ConfigError> {
        let entry = self
            .get(name)
            .ok_or_else(|| ConfigError::UnknownEntry(name.to_string()))?;
        Ok(entry.apply(settings, value, sink))
    }

    /// Records the setup menu node that edits the entry named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownEntry`] if no value-carrying entry has
    /// that name; headers count as unknown.
    pub fn link_menu_node(&mut self, name: &str, node: MenuNodeId) -> Result<(), ConfigError> {
        let index = self
            .position(name)
            .ok_or_else(|| ConfigError::UnknownEntry(name.to_string()))?;
        self.entries[index].set_menu_node(node);
        Ok(())
    }

    /// Serializable description of every entry, for tooling and menus.
    #[must_use]
    pub fn describe(&self) -> Vec<EntryInfo> {
        self.entries.iter().map(EntryInfo::from).collect()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a DefaultEntry;
    type IntoIter = std::slice::Iter<'a, DefaultEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Metadata of one entry, without its binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryInfo {
    /// Entry name or section title
    pub name: &'static str,
    /// Type tag
    pub kind: Kind,
    /// Lower limit, absent when unbounded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<i32>,
    /// Upper limit, absent when unbounded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<i32>,
    /// Compiled-in default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Setup menu placement
    pub menu: MenuTag,
    /// Slot number within a numbered family
    pub ident: u16,
}

impl From<&DefaultEntry> for EntryInfo {
    fn from(entry: &DefaultEntry) -> Self {
        let bounds = entry.bounds();
        let (min, max) = if bounds.is_unbounded() {
            (None, None)
        } else {
            (Some(bounds.min()), Some(bounds.max()))
        };

        Self {
            name: entry.name(),
            kind: entry.kind(),
            min,
            max,
            default: entry.default_value(),
            menu: entry.menu(),
            ident: entry.ident(),
        }
    }
}

/// The process-wide registry built from the compiled-in table.
///
/// # Panics
///
/// Panics on first use if the compiled-in table has duplicate names; the
/// table is covered by tests, so this indicates a build from broken source.
pub fn defaults() -> &'static Registry {
    DEFAULTS.get_or_init(|| {
        Registry::builtin().unwrap_or_else(|e| panic!("invalid built-in defaults table: {e}"))
    })
}
