//! Shared test fixtures.

use std::sync::Mutex;

use crate::message::{MessageLevel, MessageSink};

/// Sink that records every emitted message and panics on fatal.
#[derive(Default)]
pub struct RecordingSink {
    messages: Mutex<Vec<(MessageLevel, String)>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages emitted at exactly `level`.
    pub fn at(&self, level: MessageLevel) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl MessageSink for RecordingSink {
    fn emit(&self, level: MessageLevel, message: &str) {
        self.messages.lock().unwrap().push((level, message.to_string()));
    }

    fn fatal(&self, message: &str) -> ! {
        panic!("fatal: {message}");
    }
}
