//! Logger variants and the shared handle type

use super::{error::Result, log_level::LogLevel, sink::LogSink};
use crate::backends::{DiscardLogger, MemoryLogger, StdoutLogger};
use crate::console::color::colorize_if;
use colored::Color;
use std::sync::Arc;

/// Shared reference to a logger, as stored in a [`Registry`](super::Registry)
pub type LoggerHandle = Arc<Logger>;

/// Console prefix for a leveled message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prefix {
    pub level: LogLevel,
    pub tag: &'static str,
    pub color: Color,
}

impl Prefix {
    pub const DONE: Prefix = Prefix {
        level: LogLevel::Info,
        tag: "[done] √ ",
        color: Color::Green,
    };

    pub const FAIL: Prefix = Prefix {
        level: LogLevel::Error,
        tag: "[fail] X ",
        color: Color::Red,
    };

    pub fn for_level(level: LogLevel) -> Self {
        Self {
            level,
            tag: level.tag(),
            color: level.color_code(),
        }
    }
}

/// The closed set of logger backends
///
/// Only [`StdoutLogger`] can mirror its output to a file; the other variants
/// have no file-logging capability.
#[derive(Debug)]
pub enum Logger {
    /// Console output, optionally mirrored to a file logger
    Stdout(StdoutLogger),
    /// Drops everything
    Discard(DiscardLogger),
    /// Keeps everything in memory
    Memory(MemoryLogger),
}

impl Logger {
    /// Console logger at the given minimum level
    pub fn stdout(level: LogLevel) -> LoggerHandle {
        Logger::Stdout(StdoutLogger::new(level)).into_handle()
    }

    pub fn discard() -> LoggerHandle {
        Logger::Discard(DiscardLogger).into_handle()
    }

    /// In-memory logger capturing everything at or above `level`
    pub fn memory(level: LogLevel) -> LoggerHandle {
        Logger::Memory(MemoryLogger::new(level)).into_handle()
    }

    pub fn into_handle(self) -> LoggerHandle {
        Arc::new(self)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Logger::Stdout(_) => "stdout",
            Logger::Discard(_) => "discard",
            Logger::Memory(_) => "memory",
        }
    }

    pub fn as_stdout(&self) -> Option<&StdoutLogger> {
        match self {
            Logger::Stdout(stdout) => Some(stdout),
            _ => None,
        }
    }

    pub fn as_memory(&self) -> Option<&MemoryLogger> {
        match self {
            Logger::Memory(memory) => Some(memory),
            _ => None,
        }
    }

    pub fn is_discard(&self) -> bool {
        matches!(self, Logger::Discard(_))
    }

    /// Minimum level, `None` for the discard logger
    pub fn level(&self) -> Option<LogLevel> {
        match self {
            Logger::Stdout(stdout) => Some(stdout.level()),
            Logger::Memory(memory) => Some(memory.level()),
            Logger::Discard(_) => None,
        }
    }

    pub fn set_level(&self, level: LogLevel) {
        match self {
            Logger::Stdout(stdout) => stdout.set_level(level),
            Logger::Memory(memory) => memory.set_level(level),
            Logger::Discard(_) => {}
        }
    }

    pub fn log(&self, level: LogLevel, message: impl AsRef<str>) {
        self.log_prefixed(Prefix::for_level(level), message.as_ref());
    }

    fn log_prefixed(&self, prefix: Prefix, message: &str) {
        match self {
            Logger::Stdout(stdout) => stdout.log_prefixed(prefix, message),
            Logger::Memory(memory) => memory.log_prefixed(prefix, message),
            Logger::Discard(_) => {}
        }
    }

    #[inline]
    pub fn trace(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Trace, message);
    }

    #[inline]
    pub fn debug(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Error, message);
    }

    /// Log at fatal level. Terminating the process is left to the caller.
    #[inline]
    pub fn fatal(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Fatal, message);
    }

    /// Report a finished step (`[done] √ `), logged at info level
    pub fn done(&self, message: impl AsRef<str>) {
        self.log_prefixed(Prefix::DONE, message.as_ref());
    }

    /// Report a failed step (`[fail] X `), logged at error level
    pub fn fail(&self, message: impl AsRef<str>) {
        self.log_prefixed(Prefix::FAIL, message.as_ref());
    }

    /// Write `message` wrapped in the escapes for `color` (e.g. `"cyan+b"`)
    ///
    /// Written plain when the backend has colors turned off.
    pub fn write_colored(&self, message: &str, color: &str) {
        self.write(colorize_if(message, color, self.use_colors()).as_bytes());
    }

    pub fn flush(&self) -> Result<()> {
        match self {
            Logger::Stdout(stdout) => stdout.flush(),
            Logger::Memory(_) | Logger::Discard(_) => Ok(()),
        }
    }
}

impl LogSink for Logger {
    fn write(&self, bytes: &[u8]) {
        match self {
            Logger::Stdout(stdout) => stdout.write(bytes),
            Logger::Discard(discard) => discard.write(bytes),
            Logger::Memory(memory) => memory.write(bytes),
        }
    }

    fn name(&self) -> &str {
        self.kind()
    }

    fn use_colors(&self) -> bool {
        match self {
            Logger::Stdout(stdout) => stdout.use_colors(),
            Logger::Discard(discard) => discard.use_colors(),
            Logger::Memory(memory) => LogSink::use_colors(memory),
        }
    }
}

impl From<StdoutLogger> for Logger {
    fn from(logger: StdoutLogger) -> Self {
        Logger::Stdout(logger)
    }
}

impl From<DiscardLogger> for Logger {
    fn from(logger: DiscardLogger) -> Self {
        Logger::Discard(logger)
    }
}

impl From<MemoryLogger> for Logger {
    fn from(logger: MemoryLogger) -> Self {
        Logger::Memory(logger)
    }
}
