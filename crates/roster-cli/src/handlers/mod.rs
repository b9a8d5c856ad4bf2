//! Command handlers that delegate to `EmployeeService`.
//!
//! Handlers follow the pattern
//! `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`: they call the
//! service and format the result for the terminal. Service errors are
//! converted to `CliError` so `main` can pick an exit code.

pub mod add;
pub mod list;
pub mod remove;
pub mod show;
pub mod update;
pub mod web;
