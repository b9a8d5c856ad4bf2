//! CLI entry point - the composition root.
//!
//! Command dispatch routes to handlers which delegate to `EmployeeService`.

use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use roster_cli::{Cli, CliConfig, CliContext, CliError, Commands, bootstrap, handlers};

/// Install the global subscriber. `RUST_LOG` wins over the defaults.
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr),
        )
        .try_init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before parsing so env-backed flags see it
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    let default_level = match (&command, cli.verbose) {
        (_, true) => "debug",
        (Commands::Web { .. }, false) => "info",
        _ => "warn",
    };
    init_tracing(default_level);

    let result = run(command, cli.database).await;

    if let Err(err) = &result {
        if let Some(cli_err) = err.downcast_ref::<CliError>() {
            eprintln!("Error: {cli_err}");
            std::process::exit(cli_err.exit_code());
        }
    }

    result
}

async fn context(database: Option<PathBuf>) -> anyhow::Result<CliContext> {
    bootstrap(CliConfig::with_defaults().with_database_path(database)).await
}

async fn run(command: Commands, database: Option<PathBuf>) -> anyhow::Result<()> {
    match command {
        Commands::Web {
            host,
            port,
            allowed_origins,
        } => {
            let config = handlers::web::server_config(host, port, allowed_origins, database);
            handlers::web::execute(config).await?;
        }
        Commands::List => {
            let ctx = context(database).await?;
            handlers::list::execute(&ctx).await?;
        }
        Commands::Add { name, email, role } => {
            let ctx = context(database).await?;
            handlers::add::execute(&ctx, name, email, role).await?;
        }
        Commands::Show { id } => {
            let ctx = context(database).await?;
            handlers::show::execute(&ctx, id).await?;
        }
        Commands::Update {
            id,
            name,
            email,
            role,
        } => {
            let ctx = context(database).await?;
            handlers::update::execute(&ctx, id, name, email, role).await?;
        }
        Commands::Remove { id, force } => {
            let ctx = context(database).await?;
            handlers::remove::execute(&ctx, id, force).await?;
        }
    }

    Ok(())
}
