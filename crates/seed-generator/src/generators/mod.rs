//! Individual value generators.
//!
//! Each module owns one piece of generation logic: sampling helpers live
//! here, constraint-carrying generators (passports, runway slots, seats,
//! loyalty tiers) live in their own modules.

pub mod clock;
pub mod loyalty;
pub mod passport;
pub mod person;
pub mod runway;
pub mod seats;
pub mod uuid;

use rand::Rng;

/// Pick one element of a non-empty slice uniformly.
///
/// Returns `None` for an empty slice.
pub fn pick<T: Copy, R: Rng>(rng: &mut R, items: &[T]) -> Option<T> {
    if items.is_empty() {
        None
    } else {
        let idx = rng.gen_range(0..items.len());
        Some(items[idx])
    }
}

/// Pick two distinct elements of a slice, in random order.
pub fn pick_pair<T: Copy, R: Rng>(rng: &mut R, items: &[T]) -> Option<(T, T)> {
    if items.len() < 2 {
        return None;
    }
    let picked = rand::seq::index::sample(rng, items.len(), 2);
    Some((items[picked.index(0)], items[picked.index(1)]))
}

/// Random ten-digit phone number.
pub fn phone_number<R: Rng>(rng: &mut R) -> u64 {
    rng.gen_range(1_000_000_000..=9_999_999_999)
}
