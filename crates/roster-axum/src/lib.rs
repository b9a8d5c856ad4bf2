//! Axum web adapter for roster.
//!
//! Exposes the employee service over HTTP under `/api/employees`, plus a
//! `/health` probe. Handlers are thin: they extract the request, call
//! `EmployeeService` and let `HttpError` render failures.

#![deny(unsafe_code)]

pub mod bootstrap;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{AxumContext, CorsConfig, ServerConfig, bootstrap, start_server};
pub use error::HttpError;
pub use routes::create_router;
pub use state::AppState;
