//! In-memory backend
//!
//! Captures everything written to it so callers can inspect console output
//! without touching the terminal.

use super::format_line;
use crate::core::{LogLevel, LogSink, Prefix};
use parking_lot::{Mutex, RwLock};

#[derive(Debug)]
pub struct MemoryLogger {
    buffer: Mutex<Vec<u8>>,
    level: RwLock<LogLevel>,
    use_colors: bool,
}

impl MemoryLogger {
    pub fn new(level: LogLevel) -> Self {
        Self {
            buffer: Mutex::new(Vec::new()),
            level: RwLock::new(level),
            use_colors: true,
        }
    }

    /// Keep or drop color escapes in colored writes and table headers
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    pub fn level(&self) -> LogLevel {
        *self.level.read()
    }

    pub fn set_level(&self, level: LogLevel) {
        *self.level.write() = level;
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    /// Return the captured output and clear the buffer
    pub fn take(&self) -> String {
        let bytes = std::mem::take(&mut *self.buffer.lock());
        String::from_utf8_lossy(&bytes).into_owned()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }

    pub(crate) fn log_prefixed(&self, prefix: Prefix, message: &str) {
        if prefix.level < self.level() {
            return;
        }
        self.write(format_line(prefix, message, false).as_bytes());
    }
}

impl Default for MemoryLogger {
    fn default() -> Self {
        Self::new(LogLevel::default())
    }
}

impl LogSink for MemoryLogger {
    fn write(&self, bytes: &[u8]) {
        self.buffer.lock().extend_from_slice(bytes);
    }

    fn name(&self) -> &str {
        "memory"
    }

    fn use_colors(&self) -> bool {
        self.use_colors
    }
}
