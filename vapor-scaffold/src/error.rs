//! Error types and error handling

use std::path::PathBuf;
use thiserror::Error;

/// Scaffold error type
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Entity name missing or empty
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Field argument without exactly one `:` delimiter (strict mode only)
    #[error("Malformed field argument: '{0}'. Expected format: name:Type")]
    MalformedFieldArgument(String),

    /// A directory or file could not be written
    #[error("Failed to write {}: {source}", path.display())]
    WriteFailure {
        /// Path that could not be created or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<figment::Error> for ScaffoldError {
    fn from(err: figment::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, ScaffoldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_failure_display_includes_path() {
        let err = ScaffoldError::WriteFailure {
            path: PathBuf::from("Sources/App/Models/Post.swift"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let message = err.to_string();
        assert!(message.contains("Sources/App/Models/Post.swift"));
        assert!(message.contains("denied"));
    }

    #[test]
    fn test_malformed_field_display() {
        let err = ScaffoldError::MalformedFieldArgument("bad_entry".to_string());
        assert_eq!(
            err.to_string(),
            "Malformed field argument: 'bad_entry'. Expected format: name:Type"
        );
    }
}
