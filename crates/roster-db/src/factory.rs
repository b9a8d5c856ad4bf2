//! Composition utilities for building roster services with `SQLite` backends.
//!
//! This module provides factory functions for wiring up the application
//! with `SQLite` repositories. It is focused purely on construction and
//! should not contain any domain logic.

use sqlx::SqlitePool;
use std::sync::Arc;

use roster_core::EmployeeService;

use crate::repositories::SqliteEmployeeRepository;

/// Factory for creating repository and service instances with `SQLite` backends.
pub struct CoreFactory;

impl CoreFactory {
    /// Create an employee repository from a pool.
    pub fn employee_repository(pool: SqlitePool) -> Arc<SqliteEmployeeRepository> {
        Arc::new(SqliteEmployeeRepository::new(pool))
    }

    /// Build an `EmployeeService` backed by `SQLite`.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use roster_db::{CoreFactory, setup_database};
    ///
    /// let pool = setup_database(&db_path).await?;
    /// let employees = CoreFactory::build_employee_service(pool);
    /// ```
    pub fn build_employee_service(pool: SqlitePool) -> EmployeeService {
        EmployeeService::new(Self::employee_repository(pool))
    }
}

/// Test database helper for integration tests.
///
/// Provides an in-memory `SQLite` database with the production schema applied.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database with full schema.
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database().await?;
        Ok(Self { pool })
    }

    /// Get the underlying pool.
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create an employee repository using this test database.
    pub fn employee_repository(&self) -> SqliteEmployeeRepository {
        SqliteEmployeeRepository::new(self.pool.clone())
    }

    /// Create an employee service using this test database.
    pub fn employee_service(&self) -> EmployeeService {
        CoreFactory::build_employee_service(self.pool.clone())
    }
}
