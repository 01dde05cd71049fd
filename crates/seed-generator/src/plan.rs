//! Seed plan: how many rows to generate and how flights are scheduled.

use crate::generators::runway::{MINUTES_PER_DAY, MIN_RUNWAY_SEPARATION_MINUTES};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Stall ids are `201..=200 + stalls` in a 32-bit column.
pub const MAX_STALLS: usize = 1_000_000;

/// Error type for plan loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// Error reading plan file
    #[error("Failed to read plan file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Plan values that cannot produce a consistent data set
    #[error("Invalid plan: {0}")]
    Invalid(String),
}

/// Row counts and scheduling parameters for one seeding run.
///
/// Airports and airlines come from fixed reference lists and are not part of
/// the plan. Commuters, loyalty rows and staff phones follow their parent
/// counts (one per user or staff member).
///
/// ```yaml
/// users: 10
/// flights: 8
/// tickets: 5
/// runways: 4
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeedPlan {
    pub users: usize,
    pub buses: usize,
    pub flights: usize,
    pub staff: usize,
    pub stalls: usize,
    pub tickets: usize,
    pub point_transactions: usize,
    pub waitlist: usize,
    /// Runways flights are spread over, numbered from 1.
    pub runways: u32,
    /// Spacing between consecutive departures on one runway.
    pub slot_minutes: u32,
    /// Flights are dated within this many days after today.
    pub flight_days: u32,
    /// Probability that a point transaction carries no ticket reference.
    pub unlinked_transaction_ratio: f64,
}

impl Default for SeedPlan {
    fn default() -> Self {
        Self {
            users: 100,
            buses: 50,
            flights: 100,
            staff: 100,
            stalls: 60,
            tickets: 100,
            point_transactions: 100,
            waitlist: 50,
            runways: 20,
            slot_minutes: 90,
            flight_days: 15,
            unlinked_transaction_ratio: 0.2,
        }
    }
}

impl SeedPlan {
    /// Load a plan from a YAML file. Missing keys keep their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PlanError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a plan from a YAML string and validate it.
    pub fn from_yaml(yaml: &str) -> Result<Self, PlanError> {
        let plan: SeedPlan = serde_yaml::from_str(yaml)?;
        plan.validate()?;
        Ok(plan)
    }

    /// Most flights any single runway receives.
    pub fn flights_per_runway(&self) -> usize {
        if self.runways == 0 {
            return self.flights;
        }
        self.flights.div_ceil(self.runways as usize)
    }

    /// Check that the plan can be generated without breaking a constraint.
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.users == 0 {
            return Err(PlanError::Invalid(
                "at least one user is required (users own commuters and loyalty rows)".into(),
            ));
        }
        if self.flights == 0 {
            return Err(PlanError::Invalid(
                "at least one flight is required (tickets and waitlist entries reference flights)"
                    .into(),
            ));
        }
        if self.runways == 0 {
            return Err(PlanError::Invalid("runways must be at least 1".into()));
        }
        if self.slot_minutes < MIN_RUNWAY_SEPARATION_MINUTES {
            return Err(PlanError::Invalid(format!(
                "slot_minutes must be at least {MIN_RUNWAY_SEPARATION_MINUTES}, got {}",
                self.slot_minutes
            )));
        }
        // Slots wrap at midnight; a runway must not wrap back onto its first slot.
        let busiest = self.flights_per_runway() as u64;
        if busiest * u64::from(self.slot_minutes) > u64::from(MINUTES_PER_DAY) {
            return Err(PlanError::Invalid(format!(
                "{busiest} flights per runway at {} minute slots do not fit in one day; add runways",
                self.slot_minutes
            )));
        }
        if self.flight_days == 0 {
            return Err(PlanError::Invalid("flight_days must be at least 1".into()));
        }
        if self.stalls > MAX_STALLS {
            return Err(PlanError::Invalid(format!(
                "stalls must not exceed {MAX_STALLS}, got {}",
                self.stalls
            )));
        }
        if self.tickets > self.users {
            return Err(PlanError::Invalid(format!(
                "tickets ({}) cannot exceed commuters ({}); each commuter holds at most one ticket",
                self.tickets, self.users
            )));
        }
        if !(0.0..=1.0).contains(&self.unlinked_transaction_ratio) {
            return Err(PlanError::Invalid(format!(
                "unlinked_transaction_ratio must be within 0..=1, got {}",
                self.unlinked_transaction_ratio
            )));
        }
        Ok(())
    }
}
