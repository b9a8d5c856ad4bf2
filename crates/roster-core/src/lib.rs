//! Core domain types and port definitions for roster.
//!
//! This crate owns everything that does not depend on a concrete storage
//! engine or transport:
//!
//! - [`domain`]: the `Employee` record and its create/update payloads
//! - [`ports`]: the `EmployeeRepository` trait that storage adapters implement
//! - [`services`]: `EmployeeService`, which enforces existence invariants
//! - [`error`]: the `ResourceNotFound` signal and `CoreError`
//! - [`paths`]: data directory and database path resolution
//!
//! Adapters (`roster-db`, `roster-axum`, `roster-cli`) depend on this crate;
//! it depends on none of them.

#![deny(unsafe_code)]

pub mod domain;
pub mod error;
pub mod paths;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{Employee, EmployeeUpdate, NewEmployee};
pub use error::{CoreError, ResourceNotFound};
pub use paths::{PathError, data_root, database_path};
pub use ports::{EmployeeRepository, RepositoryError};
pub use services::EmployeeService;
