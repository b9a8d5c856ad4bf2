//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the employee roster.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Manage employee records")]
#[command(version)]
pub struct Cli {
    /// Database file to use instead of the default location
    #[arg(long = "database", global = true, env = "ROSTER_DATABASE_PATH")]
    pub database: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
