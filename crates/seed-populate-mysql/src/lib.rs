//! MySQL populator for the airport-seed database seeder.
//!
//! Loads connection settings from an env file, generates rows with
//! [`seed_generator`] and inserts them table by table over a single
//! connection, committing after each table.
//!
//! ```text
//!  .env ──▶ DbConfig ──▶ MySqlSession ◀── populate() ◀── SeedGenerator
//!                          (SeedSink)         │
//!                                             ▼
//!                                         SeedReport
//! ```

pub mod args;
pub mod config;
pub mod error;
pub mod insert;
pub mod password;
pub mod populate;
pub mod sink;
pub mod testing;

pub use args::SeedArgs;
pub use config::DbConfig;
pub use error::SeedError;
pub use insert::{Insert, ToInsert};
pub use populate::{populate, SeedReport, TableReport};
pub use sink::{DryRunSink, MySqlSession, SeedSink};

use seed_generator::{SeedGenerator, SeedPlan};

/// Build the generator a run described by `args` uses.
pub fn build_generator(args: &SeedArgs) -> Result<SeedGenerator, SeedError> {
    let plan = match &args.plan {
        Some(path) => {
            tracing::info!("Loading seed plan from {}", path.display());
            SeedPlan::from_file(path)?
        }
        None => SeedPlan::default(),
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!("Using seed {seed} (pass --seed {seed} to reproduce this run)");

    let password_hash = password::hash_seed_password(&args.password)?;
    Ok(SeedGenerator::new(plan, seed, password_hash)?)
}

/// Run one seeding session end to end.
///
/// The connection is closed whether or not seeding succeeds.
pub async fn run_seed(args: &SeedArgs) -> Result<SeedReport, SeedError> {
    let mut generator = build_generator(args)?;

    if args.dry_run {
        tracing::info!("[DRY-RUN] Generating rows without connecting to MySQL");
        let mut sink = DryRunSink::new();
        let report = populate(&mut sink, &mut generator).await?;
        tracing::info!("[DRY-RUN] {} statements generated", sink.statements());
        return Ok(report);
    }

    let config = DbConfig::from_env_file(&args.env_file)?;
    tracing::info!("Connecting to {}", config.masked_url());
    let mut session = MySqlSession::connect(&config).await?;

    let result = populate(&mut session, &mut generator).await;

    if let Err(e) = session.close().await {
        tracing::warn!("Failed to close MySQL connection: {e}");
    }
    result
}
