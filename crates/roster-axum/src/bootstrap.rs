//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the Axum web adapter. All concrete implementations are instantiated here.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use roster_core::EmployeeService;
use roster_core::paths::database_path;
use roster_db::{CoreFactory, setup_database};

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port for the HTTP server.
    pub port: u16,
    /// Database file. `None` resolves the default under the data root.
    pub database_path: Option<PathBuf>,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Create config with default values (`0.0.0.0:8080`, default database).
    pub fn with_defaults() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            database_path: None,
            cors: CorsConfig::default(),
        }
    }

    /// Set the interface to bind.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the listening port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Use an explicit database file instead of the default location.
    #[must_use]
    pub fn with_database_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.database_path = Some(path.into());
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }

    /// Socket address string for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Application context for the Axum adapter.
///
/// Holds every service the handlers need.
pub struct AxumContext {
    /// Employee CRUD service.
    pub employees: Arc<EmployeeService>,
}

impl AxumContext {
    /// Wrap an already-built employee service.
    pub fn new(employees: EmployeeService) -> Self {
        Self {
            employees: Arc::new(employees),
        }
    }
}

/// Bootstrap the Axum server with all services.
pub async fn bootstrap(config: ServerConfig) -> Result<AxumContext> {
    let db_path = match config.database_path {
        Some(path) => path,
        None => database_path()?,
    };

    tracing::info!(
        target: "roster.paths",
        database_path = %db_path.display(),
        "Axum bootstrap resolved paths"
    );

    let pool = setup_database(&db_path).await?;
    let employees = CoreFactory::build_employee_service(pool);

    Ok(AxumContext::new(employees))
}

/// Start the web server and serve until the process is stopped.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(config.clone()).await?;
    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;

    info!("roster web server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
