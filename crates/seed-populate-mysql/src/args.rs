//! CLI argument definitions for the MySQL populator.

use crate::password::DEFAULT_SEED_PASSWORD;
use clap::Args;
use std::path::PathBuf;

/// Arguments of a seeding run.
#[derive(Args, Clone, Debug)]
pub struct SeedArgs {
    /// Env file with DB_HOST, DB_USER, DB_PASSWORD and DB_NAME (DB_PORT optional).
    /// Values containing '$' or ' #' must be single-quoted.
    #[arg(long, default_value = ".env", env = "AIRPORT_SEED_ENV_FILE")]
    pub env_file: PathBuf,

    /// Seed plan YAML overriding the default row counts
    #[arg(long, short = 'p')]
    pub plan: Option<PathBuf>,

    /// Random seed for deterministic generation (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Plain-text password given to every seeded user
    #[arg(long, default_value = DEFAULT_SEED_PASSWORD)]
    pub password: String,

    /// Dry-run mode: generate every row without connecting to the database
    #[arg(long)]
    pub dry_run: bool,
}
