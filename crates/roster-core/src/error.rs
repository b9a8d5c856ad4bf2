//! Core error types.
//!
//! `ResourceNotFound` is the only domain error. It is raised by the
//! service's lookup-by-id and nowhere else. Adapters map `CoreError`
//! to their own error types (HTTP status codes, CLI messages).

use thiserror::Error;

use crate::ports::RepositoryError;

/// A lookup found no record for the given field value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{resource_kind} not found with {field_name}: '{field_value}'")]
pub struct ResourceNotFound {
    /// Type of resource (e.g. "Employee").
    pub resource_kind: &'static str,
    /// Field used for the lookup (e.g. "Id").
    pub field_name: &'static str,
    /// The identifier that matched nothing.
    pub field_value: i64,
}

impl ResourceNotFound {
    pub const fn new(
        resource_kind: &'static str,
        field_name: &'static str,
        field_value: i64,
    ) -> Self {
        Self {
            resource_kind,
            field_name,
            field_value,
        }
    }
}

/// Core error type for service operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The requested record does not exist.
    #[error(transparent)]
    NotFound(#[from] ResourceNotFound),

    /// Storage failed underneath the service.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl CoreError {
    /// The not-found payload, if this is a not-found error.
    pub const fn as_not_found(&self) -> Option<&ResourceNotFound> {
        match self {
            Self::NotFound(inner) => Some(inner),
            Self::Repository(_) => None,
        }
    }
}
