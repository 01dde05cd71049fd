//! Unique passport numbers.

use rand::Rng;
use std::collections::HashSet;
use std::ops::RangeInclusive;

/// Passport numbers are nine digits.
pub const PASSPORT_RANGE: RangeInclusive<u64> = 100_000_000..=999_999_999;

/// Issues passport numbers that never repeat within one run.
///
/// A random candidate that is already taken is incremented until a free
/// number is found, wrapping to the start of [`PASSPORT_RANGE`].
#[derive(Debug, Clone, Default)]
pub struct PassportAllocator {
    issued: HashSet<u64>,
}

impl PassportAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw a random passport number and claim it.
    pub fn allocate<R: Rng>(&mut self, rng: &mut R) -> u64 {
        let candidate = rng.gen_range(PASSPORT_RANGE);
        self.claim(candidate)
    }

    /// Claim `candidate`, or the next free number after it.
    pub fn claim(&mut self, candidate: u64) -> u64 {
        let mut number = candidate;
        while !self.issued.insert(number) {
            number = if number >= *PASSPORT_RANGE.end() {
                *PASSPORT_RANGE.start()
            } else {
                number + 1
            };
        }
        number
    }

    pub fn len(&self) -> usize {
        self.issued.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issued.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_collision_is_incremented() {
        let mut passports = PassportAllocator::new();
        assert_eq!(passports.claim(123_456_789), 123_456_789);
        assert_eq!(passports.claim(123_456_789), 123_456_790);
        assert_eq!(passports.claim(123_456_789), 123_456_791);
        assert_eq!(passports.len(), 3);
    }

    #[test]
    fn test_collision_at_range_end_wraps() {
        let mut passports = PassportAllocator::new();
        passports.claim(999_999_999);
        assert_eq!(passports.claim(999_999_999), 100_000_000);
    }

    #[test]
    fn test_allocated_numbers_are_unique() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut passports = PassportAllocator::new();
        let mut seen = HashSet::new();
        for _ in 0..1000 {
            let number = passports.allocate(&mut rng);
            assert!(PASSPORT_RANGE.contains(&number));
            assert!(seen.insert(number), "duplicate passport {number}");
        }
    }
}
