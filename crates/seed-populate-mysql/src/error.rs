//! Error types for the MySQL populator.

use seed_generator::{GeneratorError, PlanError, Table};
use thiserror::Error;

/// Errors that can occur while seeding.
///
/// Every variant aborts the run; the open transaction is rolled back and the
/// error is returned to the caller.
#[derive(Error, Debug)]
pub enum SeedError {
    /// MySQL connection or query error.
    #[error("MySQL error: {0}")]
    MySQL(#[from] mysql_async::Error),

    /// Configuration error (missing or malformed env key).
    #[error("Configuration error: {0}")]
    Config(String),

    /// The env file could not be read or parsed.
    #[error("Env file error: {0}")]
    EnvFile(#[from] dotenvy::Error),

    /// The seed plan file could not be loaded.
    #[error("Seed plan error: {0}")]
    Plan(#[from] PlanError),

    /// Generator error.
    #[error("Generator error: {0}")]
    Generator(#[from] GeneratorError),

    /// Hashing the seed password failed.
    #[error("Password hashing error: {0}")]
    Password(#[from] bcrypt::BcryptError),

    /// An auto-increment insert did not report the id it issued.
    #[error("No insert id returned for table '{0}'")]
    MissingInsertId(Table),
}
