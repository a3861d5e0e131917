//! # termlog
//!
//! Process-wide logging facade for command-line tools.
//!
//! ## Features
//!
//! - **Swappable backends**: stdout (optionally mirrored to a file), discard and in-memory
//! - **Registry**: one current logger per process, replaceable at any time
//! - **Tables**: column-aligned console tables with a colored header
//! - **Colors**: symbolic color specs such as `"cyan+b"`
//!
//! ```
//! use termlog::prelude::*;
//!
//! let registry = Registry::default();
//! registry.set_instance(Logger::memory(LogLevel::Info));
//!
//! let logger = registry.get_instance();
//! logger.info("Deploying");
//! print_table(&*logger, &["NAME", "STATUS"], &[["web", "Running"]]);
//!
//! let output = logger.as_memory().unwrap().contents();
//! assert!(output.contains("[info]   Deploying"));
//! assert!(output.contains(" web    Running  "));
//! ```

pub mod backends;
pub mod console;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::backends::{DiscardLogger, FileLogger, FileLoggers, MemoryLogger, StdoutLogger};
    pub use crate::console::{colorize, print_logo, print_table, set_fake_print_table};
    pub use crate::core::registry::{
        enable_file_logging, get_instance, set_instance, write_colored,
    };
    pub use crate::core::{
        LogLevel, LogSink, Logger, LoggerConfig, LoggerError, LoggerHandle, LoggerMetrics,
        Registry, Result,
    };
}

pub use crate::backends::{DiscardLogger, FileLogger, FileLoggers, MemoryLogger, StdoutLogger};
pub use crate::console::{print_logo, print_table, set_fake_print_table};
pub use crate::core::registry::{
    colors_enabled, enable_file_logging, get_instance, global, init, set_instance,
    write_colored,
};
pub use crate::core::{
    override_runtime_error_handler, LogLevel, LogSink, Logger, LoggerConfig, LoggerError,
    LoggerHandle, LoggerMetrics, Prefix, Registry, Result, DEFAULT_FILE_LOGGER,
    ERRORS_FILE_LOGGER,
};
