//! Employee repository trait definition.
//!
//! This port defines the interface for employee persistence operations.
//! Implementations must handle all storage details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{Employee, NewEmployee};

/// Repository for employee persistence operations.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - CRUD-only: list, find, insert, save, delete
/// - Existence checks belong in `EmployeeService`, not here
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// List all employees, in whatever order the store yields them.
    async fn list(&self) -> Result<Vec<Employee>, RepositoryError>;

    /// Look up an employee by ID.
    ///
    /// Returns `Ok(None)` when no record has that ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, RepositoryError>;

    /// Insert a new employee.
    ///
    /// Returns the persisted employee with its assigned ID.
    async fn insert(&self, employee: &NewEmployee) -> Result<Employee, RepositoryError>;

    /// Overwrite the stored record with the same ID (last write wins).
    ///
    /// Returns `Ok(None)` when no record has that ID; a deleted record is
    /// never re-created.
    async fn save(&self, employee: &Employee) -> Result<Option<Employee>, RepositoryError>;

    /// Delete the given employee.
    async fn delete(&self, employee: &Employee) -> Result<(), RepositoryError>;
}
