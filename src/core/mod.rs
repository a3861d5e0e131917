//! Core logger types and traits

pub mod config;
pub mod error;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod registry;
pub mod runtime_error;
pub mod sink;

pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerHandle, Prefix};
pub use metrics::LoggerMetrics;
pub use registry::{Registry, DEFAULT_FILE_LOGGER};
pub use runtime_error::{override_runtime_error_handler, ERRORS_FILE_LOGGER};
pub use sink::LogSink;
