//! Console backend

use super::{format_line, FileLogger};
use crate::core::{LogLevel, LogSink, LoggerMetrics, Prefix, Result};
use parking_lot::RwLock;
use std::io::{self, Write};
use std::sync::Arc;

/// Logger writing to the process console
///
/// Raw writes go to stdout; leveled messages at error level and above go to
/// stderr. Once a file logger is attached every write and every leveled
/// message is mirrored to it as well.
#[derive(Debug)]
pub struct StdoutLogger {
    level: RwLock<LogLevel>,
    use_colors: bool,
    file_logger: RwLock<Option<Arc<FileLogger>>>,
    metrics: LoggerMetrics,
}

impl StdoutLogger {
    pub fn new(level: LogLevel) -> Self {
        Self {
            level: RwLock::new(level),
            use_colors: true,
            file_logger: RwLock::new(None),
            metrics: LoggerMetrics::new(),
        }
    }

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

    pub fn use_colors(&self) -> bool {
        self.use_colors
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Mirror all further output to `file_logger`, replacing any previous one
    pub fn set_file_logger(&self, file_logger: Arc<FileLogger>) {
        *self.file_logger.write() = Some(file_logger);
    }

    pub fn file_logger(&self) -> Option<Arc<FileLogger>> {
        self.file_logger.read().clone()
    }

    pub(crate) fn log_prefixed(&self, prefix: Prefix, message: &str) {
        if prefix.level >= self.level() {
            let line = format_line(prefix, message, self.use_colors);
            self.emit(line.as_bytes(), prefix.level.is_error());
        }

        if let Some(file_logger) = self.file_logger() {
            file_logger.log(prefix.level, message);
        }
    }

    pub fn flush(&self) -> Result<()> {
        io::stdout().flush()?;
        io::stderr().flush()?;
        if let Some(file_logger) = self.file_logger() {
            file_logger.flush()?;
        }
        Ok(())
    }

    fn emit(&self, bytes: &[u8], to_stderr: bool) {
        let result = if to_stderr {
            let mut stderr = io::stderr().lock();
            stderr.write_all(bytes).and_then(|()| stderr.flush())
        } else {
            let mut stdout = io::stdout().lock();
            stdout.write_all(bytes).and_then(|()| stdout.flush())
        };

        match result {
            Ok(()) => self.metrics.record_written(bytes.len()),
            Err(e) => {
                if self.metrics.record_failed() == 0 {
                    let _ = writeln!(io::stderr(), "[LOGGER ERROR] Console write failed: {}", e);
                }
            }
        }
    }
}

impl Default for StdoutLogger {
    fn default() -> Self {
        Self::new(LogLevel::Debug)
    }
}

impl LogSink for StdoutLogger {
    fn write(&self, bytes: &[u8]) {
        self.emit(bytes, false);

        if let Some(file_logger) = self.file_logger() {
            file_logger.write(bytes);
        }
    }

    fn name(&self) -> &str {
        "stdout"
    }

    fn use_colors(&self) -> bool {
        self.use_colors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LoggerConfig;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_file_logger_is_replaced() {
        let dir = TempDir::new().unwrap();
        let logger = StdoutLogger::new(LogLevel::Info);
        assert!(logger.file_logger().is_none());

        let first = Arc::new(FileLogger::new("a", dir.path().join("a.log"), LogLevel::Info));
        let second = Arc::new(FileLogger::new("b", dir.path().join("b.log"), LogLevel::Info));

        logger.set_file_logger(Arc::clone(&first));
        logger.set_file_logger(Arc::clone(&second));

        let attached = logger.file_logger().unwrap();
        assert!(Arc::ptr_eq(&attached, &second));
    }

    #[test]
    fn test_mirrors_to_file_logger() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mirror.log");
        let logger = StdoutLogger::new(LogLevel::Info).with_colors(false);
        logger.set_file_logger(Arc::new(FileLogger::new("mirror", &path, LogLevel::Info)));

        logger.write(b"raw output\n");
        logger.log_prefixed(Prefix::for_level(LogLevel::Warn), "careful");
        logger.flush().unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("raw output\n"));
        assert!(content.contains("[WARN ] careful"));
        assert!(logger.metrics().writes() >= 2);
    }

    #[test]
    fn test_default_matches_registry_default() {
        let logger = StdoutLogger::default();
        assert_eq!(logger.level(), LoggerConfig::default().level);
        assert!(LogSink::use_colors(&logger));
    }

    #[test]
    fn test_colors_off_reported_to_sink() {
        let logger = StdoutLogger::new(LogLevel::Info).with_colors(false);
        assert!(!LogSink::use_colors(&logger));
    }

    #[test]
    fn test_level_threshold_applies_to_console() {
        let logger = StdoutLogger::new(LogLevel::Error);
        logger.log_prefixed(Prefix::for_level(LogLevel::Info), "quiet");
        assert_eq!(logger.metrics().writes(), 0);

        logger.set_level(LogLevel::Info);
        assert_eq!(logger.level(), LogLevel::Info);
    }
}
