//! Leveled message channel.
//!
//! The configuration core never routes messages itself. It reports through a
//! [`MessageSink`], whose production implementation forwards to `tracing`.

use bitflags::bitflags;

/// Exit code used when a fatal configuration error terminates the process.
pub const FATAL_EXIT_CODE: i32 = -1;

bitflags! {
    /// Message severity levels, combinable into masks.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MessageLevel: u8 {
        /// Informational output.
        const INFO = 0b0001;
        /// Recoverable problems.
        const WARN = 0b0010;
        /// Errors that do not stop the process on their own.
        const ERROR = 0b0100;
        /// Developer diagnostics.
        const DEBUG = 0b1000;
    }
}

impl Default for MessageLevel {
    fn default() -> Self {
        Self::INFO | Self::WARN | Self::ERROR
    }
}

/// Destination for messages emitted by the configuration core.
pub trait MessageSink {
    /// Emits a message at the given level.
    fn emit(&self, level: MessageLevel, message: &str);

    /// Reports an unrecoverable error and terminates. Never returns.
    fn fatal(&self, message: &str) -> !;
}

/// Sink that forwards to the `tracing` macros.
///
/// Levels missing from `mask` are dropped before they reach the subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink {
    mask: MessageLevel,
}

impl TracingSink {
    /// Creates a sink that only forwards levels contained in `mask`.
    #[must_use]
    pub const fn with_mask(mask: MessageLevel) -> Self {
        Self { mask }
    }

    /// Returns the enabled level mask.
    #[must_use]
    pub const fn mask(&self) -> MessageLevel {
        self.mask
    }
}

impl MessageSink for TracingSink {
    fn emit(&self, level: MessageLevel, message: &str) {
        if !self.mask.intersects(level) {
            return;
        }
        if level.contains(MessageLevel::ERROR) {
            tracing::error!("{message}");
        } else if level.contains(MessageLevel::WARN) {
            tracing::warn!("{message}");
        } else if level.contains(MessageLevel::INFO) {
            tracing::info!("{message}");
        } else {
            tracing::debug!("{message}");
        }
    }

    fn fatal(&self, message: &str) -> ! {
        tracing::error!("{message}");
        std::process::exit(FATAL_EXIT_CODE)
    }
}
