//! `SQLite` storage adapter for roster.
//!
//! Implements the `EmployeeRepository` port from `roster-core` on top of an
//! `sqlx` connection pool. `sqlx` types stay inside this crate.

#![deny(unsafe_code)]

// Linked for the bundled SQLite build only
use libsqlite3_sys as _;

pub mod factory;
pub mod repositories;
pub mod setup;

// Re-export factory for convenient access
pub use factory::CoreFactory;

// Re-export TestDb for integration tests
#[cfg(any(test, feature = "test-utils"))]
pub use factory::TestDb;

// Re-export repository implementations
pub use repositories::SqliteEmployeeRepository;

// Re-export setup functions for convenient access
pub use setup::setup_database;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;
