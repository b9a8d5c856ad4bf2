//! Domain types for roster.
//!
//! These types represent records in the system, independent of any
//! infrastructure concerns (database, HTTP, etc.).

mod employee;

pub use employee::{Employee, EmployeeUpdate, NewEmployee};
