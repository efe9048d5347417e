//! Error types for StaffQuery.
//!
//! Library crates use [`StaffQueryError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all StaffQuery operations.
#[derive(Debug, thiserror::Error)]
pub enum StaffQueryError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Roster file could not be decoded.
    #[error("parse error: {message}")]
    Parse { message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Roster data violates an invariant (negative salary, duplicate id, ...).
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Report could not be written in the requested format.
    #[error("render error: {0}")]
    Render(String),

    /// A query that needs at least one employee ran over an empty roster.
    #[error("no result for {query}: roster is empty")]
    Absent { query: String },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, StaffQueryError>;

impl StaffQueryError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a parse error from any displayable message.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse {
            message: msg.into(),
        }
    }

    /// Create a validation error from any displayable message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
        }
    }

    /// Create an absent-value error naming the query that had no result.
    pub fn absent(query: impl Into<String>) -> Self {
        Self::Absent {
            query: query.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Turn an optional query result into a hard error when absence is not acceptable.
pub fn require<T>(value: Option<T>, query: &str) -> Result<T> {
    value.ok_or_else(|| StaffQueryError::absent(query))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formatting() {
        let err = StaffQueryError::config("unknown format 'yaml'");
        assert_eq!(err.to_string(), "config error: unknown format 'yaml'");

        let err = StaffQueryError::validation("duplicate employee id 3");
        assert!(err.to_string().contains("duplicate employee id 3"));
    }

    #[test]
    fn require_maps_none_to_absent() {
        let err = require::<u32>(None, "highest paid").unwrap_err();
        assert!(matches!(err, StaffQueryError::Absent { ref query } if query == "highest paid"));
        assert_eq!(err.to_string(), "no result for highest paid: roster is empty");

        assert_eq!(require(Some(7), "highest paid").unwrap(), 7);
    }
}
