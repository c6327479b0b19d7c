//! Error types for the logger

use std::path::Path;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Invalid configuration, raised when a sink or logger is constructed
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Writing an entry to a sink failed
    #[error("Failed to write log entry to '{path}': {source}")]
    SinkWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Archiving a full log file failed
    #[error("File rotation failed for '{path}': {source}")]
    Rotation {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Entry could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LoggerError {
    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a sink write error for the given path
    pub fn sink_write(path: &Path, source: std::io::Error) -> Self {
        LoggerError::SinkWrite {
            path: path.display().to_string(),
            source,
        }
    }

    /// Create a file rotation error for the given path
    pub fn rotation(path: &Path, source: std::io::Error) -> Self {
        LoggerError::Rotation {
            path: path.display().to_string(),
            source,
        }
    }

    /// Whether this error was raised while validating configuration
    pub fn is_configuration(&self) -> bool {
        matches!(self, LoggerError::InvalidConfiguration { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_error_creation() {
        let err = LoggerError::config("FileSink", "Invalid path");
        assert!(err.is_configuration());

        let err = LoggerError::sink_write(
            Path::new("/var/log/app.log"),
            Error::new(ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, LoggerError::SinkWrite { .. }));
        assert!(!err.is_configuration());
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::config("FileSink", "Log directory is not writable: /nope");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for FileSink: Log directory is not writable: /nope"
        );

        let err = LoggerError::rotation(
            Path::new("/var/log/app.log"),
            Error::new(ErrorKind::Other, "disk full"),
        );
        assert_eq!(
            err.to_string(),
            "File rotation failed for '/var/log/app.log': disk full"
        );
    }

    #[test]
    fn test_sink_write_keeps_source() {
        let err = LoggerError::sink_write(
            Path::new("app.log"),
            Error::new(ErrorKind::PermissionDenied, "access denied"),
        );

        let source = err.source().expect("source should be preserved");
        assert!(source.to_string().contains("access denied"));
        assert!(err.to_string().contains("app.log"));
    }
}
