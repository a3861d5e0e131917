//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// The process-wide registry was initialized twice
    #[error("Logger registry already initialized")]
    AlreadyInitialized,
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::config("LoggerConfig", "unknown level");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: LoggerError = io_err.into();
        assert!(matches!(err, LoggerError::IoError(_)));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::config("TERMLOG_LEVEL", "Invalid log level: 'loud'");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for TERMLOG_LEVEL: Invalid log level: 'loud'"
        );

        assert_eq!(
            LoggerError::AlreadyInitialized.to_string(),
            "Logger registry already initialized"
        );
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::io_operation("opening log file", "default.log", io_err);

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("opening log file"));
        assert!(err.to_string().contains("default.log"));
    }
}
