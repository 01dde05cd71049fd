//! Row generator for the airport-seed database seeder.
//!
//! This crate produces the synthetic rows for every table of the airport
//! schema. It performs no I/O against the database: the populator inserts the
//! rows, feeds the issued identifiers back into an [`IdCache`], and asks the
//! generator for the next table's rows.
//!
//! # Architecture
//!
//! ```text
//!   SeedPlan (defaults or YAML)
//!          │
//!          ▼
//! ┌──────────────────┐        rows         ┌─────────────┐
//! │  SeedGenerator   │ ──────────────────▶ │  populator  │
//! │                  │                     │ (INSERT ..) │
//! │  - rng (StdRng)  │ ◀────────────────── │             │
//! │  - passports     │   IdCache (ids of   └─────────────┘
//! │  - runway slots  │    parent rows)
//! └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use seed_generator::{SeedGenerator, SeedPlan};
//!
//! let mut generator = SeedGenerator::new(SeedPlan::default(), 42, "$2b$10$hash").unwrap();
//! let users = generator.users();
//! assert_eq!(users.len(), 100);
//! ```
//!
//! # Invariants
//!
//! - Passport numbers are unique across all commuters.
//! - Flights sharing a runway are spaced one slot (90 minutes by default) apart.
//! - A flight never receives more tickets than its seat capacity, and seat
//!   numbers are unique within a flight.
//! - Every user gets exactly one loyalty row whose tier follows the point
//!   thresholds.

pub mod generator;
pub mod generators;
pub mod ids;
pub mod plan;
pub mod reference;
pub mod rows;

// Re-exports for convenience
pub use generator::{GeneratorError, SeedGenerator};
pub use generators::loyalty::LoyaltyTier;
pub use generators::passport::PassportAllocator;
pub use generators::runway::{RunwayScheduler, RunwaySlot};
pub use generators::seats::{SeatBooking, SeatLedger};
pub use ids::{CommuterRef, FlightRef, IdCache};
pub use plan::{PlanError, SeedPlan};
pub use rows::Table;
