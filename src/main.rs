//! Command-line interface for airport-seed
//!
//! # Usage Examples
//!
//! ```bash
//! # Seed the database named in .env with the default row counts
//! airport-seed
//!
//! # Reproduce an earlier run with a custom plan and env file
//! airport-seed --env-file config/.env --plan seed_plan.yaml --seed 42
//!
//! # Generate every row without touching the database
//! RUST_LOG=debug airport-seed --dry-run
//! ```
//!
//! The env file provides `DB_HOST`, `DB_USER`, `DB_PASSWORD`, `DB_NAME` and
//! optionally `DB_PORT`.

use anyhow::Context;
use clap::Parser;
use seed_populate_mysql::SeedArgs;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "airport-seed")]
#[command(about = "Seed the airport database with randomized, consistent rows")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    args: SeedArgs,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    let report = seed_populate_mysql::run_seed(&cli.args)
        .await
        .context("Seeding failed")?;

    for table in &report.tables {
        tracing::debug!("{:>20}: {} rows", table.table.name(), table.rows);
    }
    tracing::info!(
        "Inserted {} rows (seed={})",
        report.total_rows(),
        report.seed
    );
    Ok(())
}
