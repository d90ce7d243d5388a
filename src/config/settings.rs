//! Process-wide settings storage.
//!
//! [`Settings`] owns every value the defaults registry describes. A fresh
//! `Settings::default()` is all zeroes and empty strings; the real defaults
//! come from the registry (see [`Registry::reset_to_defaults`]).
//!
//! [`Registry::reset_to_defaults`]: super::Registry::reset_to_defaults

use super::defaults::{MAX_DEH_SLOTS, MAX_WAD_SLOTS, NUM_CHAT_MACROS};
use super::value::InputBinding;

/// All configurable state of the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Miscellaneous options
    pub misc: MiscSettings,
    /// Autoloaded files
    pub files: FileSettings,
    /// Sound options
    pub sound: SoundSettings,
    /// Video options
    pub video: VideoSettings,
    /// Mouse options
    pub mouse: MouseSettings,
    /// Key bindings
    pub keys: KeySettings,
    /// Automap options
    pub automap: AutomapSettings,
    /// Message and chat options
    pub messages: MessageSettings,
}

/// Miscellaneous options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MiscSettings {
    pub default_skill: i32,
    pub player_name: String,
    pub demo_insurance: i32,
    pub hud_flags: i32,
    pub autoload: Vec<String>,
}

/// Files loaded at startup, one slot per entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSettings {
    pub wadfiles: [String; MAX_WAD_SLOTS],
    pub dehfiles: [String; MAX_DEH_SLOTS],
}

/// Sound options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SoundSettings {
    pub samplerate: i32,
    pub sfx_volume: i32,
    pub music_volume: i32,
    pub channels: i32,
    pub pitched_sounds: bool,
}

/// Video options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoSettings {
    pub screenblocks: i32,
    pub usegamma: i32,
    pub fullscreen: bool,
    pub screen_width: i32,
    pub screen_height: i32,
    pub uncapped_framerate: bool,
}

/// Mouse options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MouseSettings {
    pub use_mouse: bool,
    pub sensitivity_horiz: i32,
    pub sensitivity_vert: i32,
    pub acceleration: i32,
}

/// Game action bindings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeySettings {
    pub up: InputBinding,
    pub down: InputBinding,
    pub left: InputBinding,
    pub right: InputBinding,
    pub fire: InputBinding,
    pub use_action: InputBinding,
    pub strafe: InputBinding,
    pub speed: InputBinding,
    pub automap: InputBinding,
}

/// Automap options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutomapSettings {
    pub grid: bool,
    pub color_back: i32,
    pub color_grid: i32,
    pub color_wall: i32,
    pub color_floor_change: i32,
    pub color_ceiling_change: i32,
    pub color_player: i32,
}

/// Message and chat options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageSettings {
    pub show_messages: bool,
    pub message_timer: i32,
    pub message_color: i32,
    pub chat_macros: [String; NUM_CHAT_MACROS],
}
