//! Shared CLI presentation utilities.
//!
//! Format-only helpers: no domain transforms live here.

pub mod employee_display;
pub mod tables;

// Re-export commonly used items
pub use employee_display::{display_employee_summary, employee_row, table_header};
pub use tables::{print_separator, truncate_string};
