//! Shared error types for leadmap operations.
//!
//! Field-level parse failures are never errors: normalizers are total and
//! resolve them to sentinel values. These variants cover the failures that
//! do surface: schema problems (fatal before any output), per-record read
//! failures (tallied, batch continues), configuration and I/O problems.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for leadmap operations.
#[derive(Debug, Error)]
pub enum LeadmapError {
    /// The input schema lacks columns the pipeline depends on. Raised
    /// before any record is processed; no partial output is produced.
    #[error("input is missing required columns: {}", missing.join(", "))]
    MissingColumns { missing: Vec<String> },

    /// File system related errors.
    #[error("file error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// One record failed to read or process; recovered per record.
    #[error("record error at row {row}: {message}")]
    Record { row: usize, message: String },

    /// Configuration file errors.
    #[error("configuration error: {0}")]
    Config(String),

    /// Scored-output validation failures.
    #[error("validation error: {0}")]
    Validation(String),
}

impl LeadmapError {
    pub fn missing_columns(missing: Vec<String>) -> Self {
        Self::MissingColumns { missing }
    }

    pub fn io(message: impl Into<String>, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            path: Some(path.into()),
            source: Some(source),
        }
    }

    pub fn record(row: usize, message: impl Into<String>) -> Self {
        Self::Record {
            row,
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_columns_lists_every_column() {
        let err = LeadmapError::missing_columns(vec!["Revenue".into(), "Region".into()]);
        assert_eq!(
            err.to_string(),
            "input is missing required columns: Revenue, Region"
        );
    }

    #[test]
    fn record_error_carries_row() {
        let err = LeadmapError::record(7, "unequal field count");
        assert!(err.to_string().contains("row 7"));
    }
}
