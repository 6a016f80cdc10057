//! Error types for crud-demo
//!
//! Centralized error handling using snafu for ergonomic error definitions.
//! Every kind is recoverable by the caller; nothing here ends the process.

use snafu::Snafu;

use crate::domain::{FieldName, RecordId};

/// Main error type for the crate
#[derive(Debug, Snafu)]
pub enum Error {
    /// Required draft fields are missing or hold an unknown option code
    #[snafu(display("Validation failed: {}", join_fields(fields)))]
    ValidationFailed { fields: Vec<FieldName> },

    /// Another submission is still in flight
    #[snafu(display("A submission is already in progress"))]
    SubmissionInProgress,

    /// No record with this id exists in the store
    #[snafu(display("Record not found: {id}"))]
    NotFound { id: RecordId },

    /// A record with this id already exists in the store
    #[snafu(display("Duplicate record id: {id}"))]
    DuplicateKey { id: RecordId },

    /// The field is not part of the active form layout
    #[snafu(display("Invalid form field: {name}"))]
    InvalidField { name: String },

    /// The (simulated) write step failed
    #[snafu(display("Write failed: {message}"))]
    WriteFailed { message: String },

    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// IO error (config file operations)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },
}

impl Error {
    /// Whether retrying the same action may succeed without changing input
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::WriteFailed { .. } | Error::SubmissionInProgress)
    }
}

fn join_fields(fields: &[FieldName]) -> String {
    fields
        .iter()
        .map(|f| f.key())
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_lists_fields() {
        let err = Error::ValidationFailed {
            fields: vec![FieldName::Name, FieldName::Category],
        };
        assert_eq!(err.to_string(), "Validation failed: name, category");
    }

    #[test]
    fn only_transient_errors_are_retryable() {
        assert!(Error::WriteFailed { message: "boom".into() }.is_retryable());
        assert!(Error::SubmissionInProgress.is_retryable());
        assert!(!Error::NotFound { id: RecordId::from("x") }.is_retryable());
    }
}
