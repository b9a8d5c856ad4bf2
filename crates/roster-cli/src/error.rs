//! CLI-specific error types and mappings.
//!
//! This module maps `CoreError` to exit codes and user-facing messages.

use roster_core::CoreError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The requested employee does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Constraint violation reported by the database.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Storage failure.
    #[error("Database error: {0}")]
    Database(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h where one fits.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound(_) => 1,
            Self::Arguments(_) => 64, // EX_USAGE
            Self::Database(_) => 74,  // EX_IOERR
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound(not_found) => Self::NotFound(not_found.to_string()),
            CoreError::Repository(roster_core::RepositoryError::Constraint(msg)) => {
                Self::Arguments(msg)
            }
            CoreError::Repository(repo_err) => Self::Database(repo_err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::{RepositoryError, ResourceNotFound};

    #[test]
    fn test_not_found_keeps_message() {
        let err = CliError::from(CoreError::from(ResourceNotFound::new("Employee", "Id", 5)));
        assert_eq!(err.to_string(), "Employee not found with Id: '5'");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_repository_errors_map_by_kind() {
        let constraint = CliError::from(CoreError::from(RepositoryError::Constraint(
            "NOT NULL constraint failed".into(),
        )));
        assert_eq!(constraint.exit_code(), 64);

        let storage = CliError::from(CoreError::from(RepositoryError::Storage("locked".into())));
        assert_eq!(storage.to_string(), "Database error: Storage error: locked");
        assert_eq!(storage.exit_code(), 74);
    }
}
