//! Password hash shared by every seeded user.
//!
//! The login backend verifies passwords with bcrypt, so the seed hash must be
//! a bcrypt hash. It is computed once per run.

use crate::error::SeedError;

/// Plain-text password of every seeded user unless overridden.
pub const DEFAULT_SEED_PASSWORD: &str = "Seed1234!";

/// bcrypt cost used by the login backend.
pub const SEED_HASH_COST: u32 = 10;

pub fn hash_seed_password(password: &str) -> Result<String, SeedError> {
    Ok(bcrypt::hash(password, SEED_HASH_COST)?)
}
