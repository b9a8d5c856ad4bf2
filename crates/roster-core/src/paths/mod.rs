//! Path resolution for roster data.
//!
//! All adapters (CLI, web) resolve the data directory and database file
//! through this module so they share one database by default.

mod database;
mod error;
mod platform;

pub use database::database_path;
pub use error::PathError;
pub use platform::data_root;
