//! Main commands enum.
//!
//! This module defines the available commands for the CLI tool.

use clap::Subcommand;

/// Available commands for the roster tool.
#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Web {
        /// Interface to bind
        #[arg(long, default_value = "0.0.0.0", env = "ROSTER_HOST")]
        host: String,
        /// Port to listen on
        #[arg(short, long, default_value = "8080", env = "ROSTER_PORT")]
        port: u16,
        /// Allow only this CORS origin (repeatable; all origins when omitted)
        #[arg(long = "allowed-origin")]
        allowed_origins: Vec<String>,
    },

    /// List all employees
    List,

    /// Add a new employee
    Add {
        /// Full name
        #[arg(long)]
        name: String,
        /// Email address
        #[arg(long)]
        email: String,
        /// Job role
        #[arg(long)]
        role: String,
    },

    /// Show a single employee
    Show {
        /// Employee ID
        id: i64,
    },

    /// Overwrite name, email and role of an employee
    Update {
        /// Employee ID
        id: i64,
        /// New full name
        #[arg(long)]
        name: String,
        /// New email address
        #[arg(long)]
        email: String,
        /// New job role
        #[arg(long)]
        role: String,
    },

    /// Remove an employee
    Remove {
        /// Employee ID
        id: i64,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Cli;
    use clap::Parser;

    #[test]
    fn test_web_defaults() {
        let cli = Cli::parse_from(["roster", "web"]);
        match cli.command {
            Some(Commands::Web {
                host,
                port,
                allowed_origins,
            }) => {
                assert_eq!(host, "0.0.0.0");
                assert_eq!(port, 8080);
                assert!(allowed_origins.is_empty());
            }
            _ => panic!("expected web command"),
        }
    }

    #[test]
    fn test_web_repeated_origins() {
        let cli = Cli::parse_from([
            "roster",
            "web",
            "--port",
            "3000",
            "--allowed-origin",
            "http://a.test",
            "--allowed-origin",
            "http://b.test",
        ]);
        match cli.command {
            Some(Commands::Web {
                port,
                allowed_origins,
                ..
            }) => {
                assert_eq!(port, 3000);
                assert_eq!(allowed_origins, vec!["http://a.test", "http://b.test"]);
            }
            _ => panic!("expected web command"),
        }
    }

    #[test]
    fn test_update_requires_all_fields() {
        let result = Cli::try_parse_from(["roster", "update", "1", "--name", "Ramesh"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_remove_force_flag() {
        let cli = Cli::parse_from(["roster", "remove", "7", "-f"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Remove { id: 7, force: true })
        ));
    }

    #[test]
    fn test_non_numeric_id_is_rejected() {
        assert!(Cli::try_parse_from(["roster", "show", "abc"]).is_err());
    }
}
