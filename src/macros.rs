//! Logging macros for ergonomic log message formatting.
//!
//! Each macro takes anything that derefs to a [`Logger`](crate::Logger)
//! (a `LoggerHandle` from the registry, for instance) followed by
//! `format!`-style arguments.
//!
//! # Examples
//!
//! ```
//! use termlog::prelude::*;
//! use termlog::{done, info};
//!
//! let logger = Logger::memory(LogLevel::Info);
//!
//! let port = 8080;
//! info!(logger, "Listening on port {}", port);
//! done!(logger, "Deployed {} services", 3);
//!
//! let output = logger.as_memory().unwrap().contents();
//! assert!(output.contains("Listening on port 8080"));
//! ```

/// Log a message at an explicit level.
///
/// ```
/// # use termlog::prelude::*;
/// # let logger = Logger::memory(LogLevel::Info);
/// use termlog::log;
/// log!(logger, LogLevel::Warn, "Retry {} of {}", 2, 5);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message. The process keeps running.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}

/// Report a finished step with the `[done] √ ` prefix.
#[macro_export]
macro_rules! done {
    ($logger:expr, $($arg:tt)+) => {
        $logger.done(format!($($arg)+))
    };
}

/// Report a failed step with the `[fail] X ` prefix.
#[macro_export]
macro_rules! fail {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fail(format!($($arg)+))
    };
}
