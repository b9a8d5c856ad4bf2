//! Command-line front end for roster.
//!
//! The `roster` binary manages employee records directly against the
//! database (`list`, `add`, `show`, `update`, `remove`) or serves them over
//! HTTP (`web`).

#![deny(unsafe_code)]

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;
pub mod utils;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
