//! Discard backend

use crate::core::LogSink;

/// Logger that drops every write
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardLogger;

impl LogSink for DiscardLogger {
    fn write(&self, _bytes: &[u8]) {}

    fn name(&self) -> &str {
        "discard"
    }

    fn use_colors(&self) -> bool {
        false
    }
}
