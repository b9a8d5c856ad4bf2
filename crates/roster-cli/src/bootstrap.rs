//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter. Command handlers receive the composed `CliContext`.

use std::path::PathBuf;

use anyhow::Result;
use roster_core::EmployeeService;
use roster_core::paths::database_path;
use roster_db::{CoreFactory, setup_database};

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Database file. `None` resolves the default under the data root.
    pub database_path: Option<PathBuf>,
}

impl CliConfig {
    /// Create config with default paths.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Use an explicit database file.
    #[must_use]
    pub fn with_database_path(mut self, path: Option<PathBuf>) -> Self {
        self.database_path = path;
        self
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    employees: EmployeeService,
    database_path: PathBuf,
}

impl CliContext {
    /// Build a context around an existing service.
    pub fn new(employees: EmployeeService, database_path: impl Into<PathBuf>) -> Self {
        Self {
            employees,
            database_path: database_path.into(),
        }
    }

    /// Access the employee service.
    pub const fn employees(&self) -> &EmployeeService {
        &self.employees
    }

    /// Database file backing this context.
    pub const fn database_path(&self) -> &PathBuf {
        &self.database_path
    }
}

/// Bootstrap the CLI application.
pub async fn bootstrap(config: CliConfig) -> Result<CliContext> {
    let db_path = match config.database_path {
        Some(path) => path,
        None => database_path()?,
    };

    let pool = setup_database(&db_path).await?;
    tracing::debug!(database_path = %db_path.display(), "CLI bootstrap complete");

    Ok(CliContext::new(
        CoreFactory::build_employee_service(pool),
        db_path,
    ))
}
