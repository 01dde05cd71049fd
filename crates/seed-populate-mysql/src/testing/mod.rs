//! Testing utilities for the MySQL populator
//!
//! Docker container management and the fixture schema for end-to-end seeding
//! tests.

pub mod container;
pub mod schema;

pub use container::MySQLContainer;
pub use schema::AIRPORT_SCHEMA;
