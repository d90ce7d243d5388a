//! Configuration defaults for the engine.
//!
//! This module provides:
//! - The settings storage ([`Settings`])
//! - Configuration entries and their value shapes ([`DefaultEntry`], [`Kind`], [`Value`])
//! - The ordered defaults registry ([`Registry`], [`defaults`])
//! - Setup menu placement and back-references ([`MenuTag`], [`MenuArena`])
//! - The config file text layer ([`load_str`], [`save_string`])
//! - Default values and limits ([`defaults`](mod@defaults))
//!
//! # Storage
//!
//! The registry is pure metadata. Each entry holds a [`Field`] projecting
//! into a [`Settings`] value owned by the caller, so one registry can
//! describe any number of settings objects (the live one, a scratch copy in
//! the setup menu, a fixture in a test).
//!
//! # Validation
//!
//! Integral entries are range checked unless their bounds are
//! [`Bounds::UNBOUNDED`]. Strings and arrays are taken as they are. Input
//! bindings are checked per field. Persisted values that fail validation are
//! replaced by the entry's default with a warning; loading never fails
//! because of a single bad value.

mod binding;
pub mod defaults;
mod entry;
mod error;
mod menu;
mod persist;
mod registry;
mod settings;
mod table;
mod value;

#[cfg(test)]
mod persist_tests;

pub use binding::{Binding, Field};
pub use entry::DefaultEntry;
pub use error::ConfigError;
pub use menu::{MenuArena, MenuNode, MenuNodeId, MenuTag, SetupScreen};
pub use persist::{LoadReport, load_str, save_string};
pub use registry::{EntryInfo, Registry, defaults};
pub use settings::{
    AutomapSettings, FileSettings, KeySettings, MessageSettings, MiscSettings, MouseSettings,
    Settings, SoundSettings, VideoSettings,
};
pub use table::DEFAULT_TABLE;
pub use value::{Bounds, DefaultValue, InputBinding, Kind, Value};
