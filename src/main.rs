use clap::Parser;
use schema_inspector::config::{Config, DEFAULT_LOG_FILTER};
use schema_inspector::{inspector, report};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Print the column names and data types of a PostgreSQL table.
///
/// The connection URL is read from DB_URL, DATABASE_URL or POSTGRES_URL
/// (a `.env` file in the working directory is honoured).
#[derive(Parser, Debug)]
#[command(name = "inspect-schema")]
#[command(version)]
struct Cli {
    /// Table to inspect (defaults to INSPECT_TABLE, then `user_profiles`)
    table: Option<String>,

    /// Only match the table in this schema (defaults to INSPECT_SCHEMA)
    #[arg(long)]
    schema: Option<String>,

    /// Fail instead of printing an empty listing when the table does not exist
    #[arg(long)]
    require_exists: bool,
}

/// Main entry point for the schema inspection utility.
///
/// Logs go to stderr so that stdout carries only the listing.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config::from_env()?.with_overrides(cli.table, cli.schema, cli.require_exists)?;
    tracing::info!("Inspecting table {}", config.table_name);

    let columns = inspector::run(&config).await?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report::write_report(&mut out, &columns)?;

    Ok(())
}
