//! File backend and the named file-logger factory

use crate::console::color::strip_ansi;
use crate::core::{LogLevel, LogSink, LoggerConfig, LoggerError, LoggerMetrics, Result};
use chrono::{SecondsFormat, Utc};
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Append-only log file
///
/// The file (and its parent directory) is created on the first write, so
/// constructing a `FileLogger` never touches the filesystem. Console escape
/// sequences are stripped before anything reaches the file.
#[derive(Debug)]
pub struct FileLogger {
    name: String,
    path: PathBuf,
    level: RwLock<LogLevel>,
    writer: Mutex<Option<BufWriter<File>>>,
    metrics: LoggerMetrics,
}

impl FileLogger {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, level: LogLevel) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            level: RwLock::new(level),
            writer: Mutex::new(None),
            metrics: LoggerMetrics::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn level(&self) -> LogLevel {
        *self.level.read()
    }

    pub fn set_level(&self, level: LogLevel) {
        *self.level.write() = level;
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Append a timestamped line, e.g. `[2025-01-08T10:30:45.123Z] [INFO ] message`
    ///
    /// Newlines in `message` are escaped so one call always yields one line.
    pub fn log(&self, level: LogLevel, message: impl AsRef<str>) {
        if level < self.level() {
            return;
        }

        let line = format!(
            "[{}] [{:5}] {}\n",
            Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            level.to_str(),
            sanitize(&strip_ansi(message.as_ref()))
        );
        self.append(line.as_bytes());
    }

    pub fn flush(&self) -> Result<()> {
        if let Some(writer) = self.writer.lock().as_mut() {
            writer.flush().map_err(|e| {
                LoggerError::io_operation("flushing log file", self.path.display().to_string(), e)
            })?;
        }
        Ok(())
    }

    fn open(path: &Path) -> Result<BufWriter<File>> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                LoggerError::io_operation("creating log directory", parent.display().to_string(), e)
            })?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                LoggerError::io_operation("opening log file", path.display().to_string(), e)
            })?;
        Ok(BufWriter::new(file))
    }

    fn append(&self, bytes: &[u8]) {
        let mut guard = self.writer.lock();

        if guard.is_none() {
            match Self::open(&self.path) {
                Ok(writer) => *guard = Some(writer),
                Err(e) => {
                    self.report_failure(&e);
                    return;
                }
            }
        }

        if let Some(writer) = guard.as_mut() {
            match writer.write_all(bytes).and_then(|()| writer.flush()) {
                Ok(()) => self.metrics.record_written(bytes.len()),
                Err(e) => self.report_failure(&LoggerError::io_operation(
                    "writing log file",
                    self.path.display().to_string(),
                    e,
                )),
            }
        }
    }

    fn report_failure(&self, err: &LoggerError) {
        let previous = self.metrics.record_failed();

        // First failure and every 100th after that
        if previous == 0 || (previous + 1) % 100 == 0 {
            let _ = writeln!(
                io::stderr(),
                "[LOGGER ERROR] File logger '{}' failed ({} failures, {:.1}% of writes): {}",
                self.name,
                previous + 1,
                self.metrics.failure_rate(),
                err
            );
        }
    }
}

impl LogSink for FileLogger {
    fn write(&self, bytes: &[u8]) {
        let text = String::from_utf8_lossy(bytes);
        self.append(strip_ansi(&text).as_bytes());
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn use_colors(&self) -> bool {
        false
    }
}

impl Drop for FileLogger {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

fn sanitize(message: &str) -> String {
    message
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Factory handing out one shared [`FileLogger`] per name
///
/// `get("default")` always returns the same logger, writing to
/// `<log_dir>/default.log`. Clones share the cache.
#[derive(Debug, Clone)]
pub struct FileLoggers {
    log_dir: PathBuf,
    level: LogLevel,
    loggers: Arc<RwLock<HashMap<String, Arc<FileLogger>>>>,
}

impl FileLoggers {
    pub fn new(log_dir: impl Into<PathBuf>, level: LogLevel) -> Self {
        Self {
            log_dir: log_dir.into(),
            level,
            loggers: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn from_config(config: &LoggerConfig) -> Self {
        Self::new(config.log_dir.clone(), config.level)
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    pub fn get(&self, name: &str) -> Arc<FileLogger> {
        if let Some(logger) = self.loggers.read().get(name) {
            return Arc::clone(logger);
        }

        let mut loggers = self.loggers.write();
        let logger = loggers.entry(name.to_string()).or_insert_with(|| {
            Arc::new(FileLogger::new(
                name,
                self.log_dir.join(format!("{}.log", name)),
                self.level,
            ))
        });
        Arc::clone(logger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_lazy_open() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("app.log");
        let logger = FileLogger::new("app", &path, LogLevel::Info);

        assert!(!path.exists());
        logger.log(LogLevel::Info, "started");
        assert!(path.exists());
        assert_eq!(logger.metrics().writes(), 1);
    }

    #[test]
    fn test_log_line_format() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.log");
        let logger = FileLogger::new("app", &path, LogLevel::Info);

        logger.log(LogLevel::Debug, "below threshold");
        logger.log(LogLevel::Warn, "disk\nalmost full");
        logger.flush().unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with('['));
        assert!(lines[0].ends_with("[WARN ] disk\\nalmost full"));
    }

    #[test]
    fn test_raw_write_strips_escapes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("raw.log");
        let logger = FileLogger::new("raw", &path, LogLevel::Info);

        logger.write(b"\x1b[1;32mgreen\x1b[0m text\n");
        logger.flush().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "green text\n");
    }

    #[test]
    fn test_open_failure_is_counted() {
        let dir = TempDir::new().unwrap();
        // A directory cannot be opened as a log file
        let logger = FileLogger::new("broken", dir.path(), LogLevel::Info);

        logger.write(b"lost");
        assert_eq!(logger.metrics().failed_writes(), 1);
        assert_eq!(logger.metrics().writes(), 0);
    }

    #[test]
    fn test_factory_caches_by_name() {
        let dir = TempDir::new().unwrap();
        let loggers = FileLoggers::new(dir.path(), LogLevel::Debug);

        let first = loggers.get("default");
        let second = loggers.clone().get("default");
        let errors = loggers.get("errors");

        assert!(Arc::ptr_eq(&first, &second));
        assert!(!Arc::ptr_eq(&first, &errors));
        assert_eq!(first.path(), dir.path().join("default.log"));
        assert_eq!(errors.name(), "errors");
        assert_eq!(first.level(), LogLevel::Debug);
    }
}
