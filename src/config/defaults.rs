//! Default values and limits for configuration options.
//!
//! Centralized constants to avoid magic numbers in the defaults table.

/// Number of `wadfile_N` slots.
pub const MAX_WAD_SLOTS: usize = 8;

/// Number of `dehfile_N` slots.
pub const MAX_DEH_SLOTS: usize = 4;

/// Number of `chatmacroN` entries.
pub const NUM_CHAT_MACROS: usize = 10;

/// Key codes are `0..NUM_KEYS`.
pub const NUM_KEYS: i32 = 512;

/// Mouse buttons are `0..MAX_MOUSE_BUTTONS`.
pub const MAX_MOUSE_BUTTONS: i32 = 16;

/// Joystick buttons are `0..MAX_JOY_BUTTONS`.
pub const MAX_JOY_BUTTONS: i32 = 32;

/// Default sound sample rate in Hz.
pub const SAMPLERATE: i32 = 44_100;

/// Lowest accepted sample rate in Hz.
pub const SAMPLERATE_MIN: i32 = 11_025;

/// Highest accepted sample rate in Hz.
pub const SAMPLERATE_MAX: i32 = 48_000;

/// Default sound effect and music volume.
pub const VOLUME: i32 = 8;

/// Highest volume step.
pub const VOLUME_MAX: i32 = 15;

/// Default screen size in blocks.
pub const SCREENBLOCKS: i32 = 10;

/// Default on-screen message duration in milliseconds.
pub const MESSAGE_TIMER_MS: i32 = 4_000;

/// Key codes for the keys the default bindings use.
pub mod key {
    pub const RIGHTARROW: i32 = 0xae;
    pub const LEFTARROW: i32 = 0xac;
    pub const UPARROW: i32 = 0xad;
    pub const DOWNARROW: i32 = 0xaf;
    pub const TAB: i32 = 9;
    pub const SPACE: i32 = b' ' as i32;
    pub const RCTRL: i32 = 0x80 + 0x1d;
    pub const RSHIFT: i32 = 0x80 + 0x36;
    pub const RALT: i32 = 0x80 + 0x38;
}
