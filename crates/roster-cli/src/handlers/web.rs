//! Web command handler.

use std::path::PathBuf;

use anyhow::Result;
use roster_axum::{ServerConfig, start_server};

/// Build the server configuration from command-line values.
///
/// An empty origin list keeps the allow-all CORS default.
pub fn server_config(
    host: String,
    port: u16,
    allowed_origins: Vec<String>,
    database: Option<PathBuf>,
) -> ServerConfig {
    let mut config = ServerConfig::with_defaults().with_host(host).with_port(port);

    if let Some(path) = database {
        config = config.with_database_path(path);
    }
    if !allowed_origins.is_empty() {
        config = config.with_allowed_origins(allowed_origins);
    }

    config
}

/// Execute the web command. Runs until the process is stopped.
pub async fn execute(config: ServerConfig) -> Result<()> {
    start_server(config).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_axum::CorsConfig;

    #[test]
    fn test_server_config_defaults_to_allow_all() {
        let config = server_config("127.0.0.1".into(), 9000, vec![], None);

        assert_eq!(config.bind_addr(), "127.0.0.1:9000");
        assert!(config.database_path.is_none());
        assert!(matches!(config.cors, CorsConfig::AllowAll));
    }

    #[test]
    fn test_server_config_with_origins_and_database() {
        let config = server_config(
            "0.0.0.0".into(),
            8080,
            vec!["http://localhost:5173".into()],
            Some(PathBuf::from("/tmp/roster.db")),
        );

        assert_eq!(config.database_path, Some(PathBuf::from("/tmp/roster.db")));
        assert!(matches!(config.cors, CorsConfig::AllowOrigins(_)));
    }
}
