//! doomcfg: process configuration core for a Doom source port.
//!
//! A library for rebuilding the startup parameter list from a raw command
//! line and for describing, validating and persisting the engine's named
//! configuration defaults.

pub mod config;
pub mod message;
pub mod params;
pub mod version;

#[cfg(test)]
mod test_fixtures;
