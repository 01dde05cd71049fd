//! Loyalty tiers.

use std::fmt;

pub const PLATINUM_THRESHOLD: u32 = 10_000;
pub const GOLD_THRESHOLD: u32 = 5_000;
pub const SILVER_THRESHOLD: u32 = 1_000;

/// Upper bound of the random point balance given to seeded users.
pub const MAX_SEED_POINTS: u32 = 15_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LoyaltyTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl LoyaltyTier {
    /// Tier for a point balance.
    pub fn from_points(points: u32) -> Self {
        match points {
            p if p >= PLATINUM_THRESHOLD => LoyaltyTier::Platinum,
            p if p >= GOLD_THRESHOLD => LoyaltyTier::Gold,
            p if p >= SILVER_THRESHOLD => LoyaltyTier::Silver,
            _ => LoyaltyTier::Bronze,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LoyaltyTier::Bronze => "Bronze",
            LoyaltyTier::Silver => "Silver",
            LoyaltyTier::Gold => "Gold",
            LoyaltyTier::Platinum => "Platinum",
        }
    }
}

impl fmt::Display for LoyaltyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
