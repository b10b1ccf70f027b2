//! Error types for Climblog
//!
//! Centralized error handling using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// All error types that can occur in Climblog
#[derive(Debug, Error)]
pub enum ClimbError {
    /// Standard input hit end-of-file while a prompt was waiting
    #[error("Input closed")]
    InputClosed,

    /// A report or session file could not be written
    #[error("Failed to write {}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Climblog operations
pub type Result<T> = std::result::Result<T, ClimbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_closed_error() {
        assert_eq!(ClimbError::InputClosed.to_string(), "Input closed");
    }

    #[test]
    fn test_persist_error_names_path() {
        let err = ClimbError::Persist {
            path: PathBuf::from("/nowhere/climbing_report.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/nowhere/climbing_report.txt"));
        assert!(msg.contains("no such directory"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: ClimbError = io_err.into();
        assert!(matches!(err, ClimbError::Io(_)));
        assert!(err.to_string().contains("pipe closed"));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_ok() -> Result<u32> {
            Ok(50)
        }

        fn returns_err() -> Result<u32> {
            Err(ClimbError::InputClosed)
        }

        assert!(returns_ok().is_ok());
        assert!(returns_err().is_err());
    }
}
