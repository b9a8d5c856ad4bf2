//! HTTP request handlers for the Axum web server.
//!
//! Handlers are thin wrappers that delegate to `EmployeeService`.

pub mod employees;
