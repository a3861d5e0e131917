//! Logger registry
//!
//! A [`Registry`] owns "the current logger" and the named file loggers it can
//! attach. Components that log can be handed a `Registry` (or just a
//! [`LoggerHandle`]) directly. For the common CLI case there is also one
//! process-wide registry behind [`get_instance`], [`set_instance`] and
//! [`enable_file_logging`]; it is created by [`init`] or, failing that, with
//! the default configuration on first use.

use super::{
    config::LoggerConfig,
    error::{LoggerError, Result},
    logger::{Logger, LoggerHandle},
    runtime_error::override_runtime_error_handler,
    sink::LogSink,
};
use crate::backends::{FileLoggers, StdoutLogger};
use crate::console::{color::colorize_if, table::write_table};
use parking_lot::RwLock;
use std::sync::{Arc, OnceLock};

/// File logger that stdout output is mirrored to
pub const DEFAULT_FILE_LOGGER: &str = "default";

#[derive(Debug)]
pub struct Registry {
    current: RwLock<LoggerHandle>,
    file_loggers: FileLoggers,
    use_colors: bool,
}

impl Registry {
    /// Registry with a stdout logger configured from `config`
    ///
    /// `config.use_colors` also applies to whatever logger is installed
    /// later: colored writes and tables through the registry stay plain when
    /// it is off.
    pub fn new(config: &LoggerConfig) -> Self {
        let stdout = StdoutLogger::new(config.level).with_colors(config.use_colors);
        Self::with_logger(
            Logger::from(stdout).into_handle(),
            FileLoggers::from_config(config),
        )
        .with_colors(config.use_colors)
    }

    pub fn with_logger(logger: LoggerHandle, file_loggers: FileLoggers) -> Self {
        Self {
            current: RwLock::new(logger),
            file_loggers,
            use_colors: true,
        }
    }

    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    pub fn use_colors(&self) -> bool {
        self.use_colors
    }

    /// The current logger
    pub fn get_instance(&self) -> LoggerHandle {
        Arc::clone(&self.current.read())
    }

    /// Replace the current logger; later `get_instance` calls return `logger` itself
    pub fn set_instance(&self, logger: LoggerHandle) {
        *self.current.write() = logger;
    }

    pub fn file_loggers(&self) -> &FileLoggers {
        &self.file_loggers
    }

    /// Mirror the current logger to the `"default"` file logger
    ///
    /// Returns `true` when a file logger was attached. Only the stdout
    /// variant can mirror to a file; for the discard and memory variants
    /// this does nothing and returns `false`.
    pub fn enable_file_logging(&self) -> bool {
        let current = self.get_instance();
        match current.as_ref() {
            Logger::Stdout(stdout) => {
                stdout.set_file_logger(self.file_loggers.get(DEFAULT_FILE_LOGGER));
                true
            }
            Logger::Discard(_) | Logger::Memory(_) => false,
        }
    }

    /// Write `message` in `color` through the current logger
    pub fn write_colored(&self, message: &str, color: &str) {
        let logger = self.get_instance();
        let colors = self.use_colors && logger.use_colors();
        logger.write(colorize_if(message, color, colors).as_bytes());
    }

    /// Print a table through the current logger
    pub fn print_table<S, R>(&self, header: &[S], rows: &[R])
    where
        S: AsRef<str>,
        R: AsRef<[S]>,
    {
        let logger = self.get_instance();
        let colors = self.use_colors && logger.use_colors();
        write_table(&*logger, header, rows, colors);
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(&LoggerConfig::default())
    }
}

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// Create the process-wide registry from `config`
///
/// Call once at startup, before anything logs. Fails with
/// [`LoggerError::AlreadyInitialized`] if the registry already exists,
/// including when it was created implicitly by an earlier [`global`] call.
pub fn init(config: LoggerConfig) -> Result<&'static Registry> {
    let mut created = false;
    let registry = GLOBAL.get_or_init(|| {
        created = true;
        Registry::new(&config)
    });

    if created {
        Ok(registry)
    } else {
        Err(LoggerError::AlreadyInitialized)
    }
}

/// The process-wide registry, created with defaults if [`init`] was never called
pub fn global() -> &'static Registry {
    GLOBAL.get_or_init(Registry::default)
}

/// The process-wide current logger
pub fn get_instance() -> LoggerHandle {
    global().get_instance()
}

/// Replace the process-wide current logger
pub fn set_instance(logger: LoggerHandle) {
    global().set_instance(logger);
}

/// Mirror the process-wide logger to `default.log` and capture panics in `errors.log`
///
/// Nothing happens unless the current logger is the stdout variant.
pub fn enable_file_logging() {
    let registry = global();
    if registry.enable_file_logging() {
        override_runtime_error_handler(false, registry.file_loggers());
    }
}

/// Write `message` in `color` through the process-wide logger
pub fn write_colored(message: &str, color: &str) {
    global().write_colored(message, color);
}

/// Color setting of the process-wide registry
///
/// Does not create the registry: before [`init`] or first use this is the
/// default, `true`.
pub fn colors_enabled() -> bool {
    GLOBAL.get().map_or(true, Registry::use_colors)
}
