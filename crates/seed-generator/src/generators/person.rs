//! Names, emails and other fake text backed by the `fake` crate.

use fake::faker::address::en::CityName;
use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::{DomainSuffix, Username};
use fake::faker::lorem::en::Word;
use fake::faker::name::en::{FirstName, LastName, Name};
use fake::Fake;
use rand::Rng;

/// Stall vendor names are stored in a 40 character column.
pub const VENDOR_NAME_MAX_CHARS: usize = 40;

pub fn first_name<R: Rng>(rng: &mut R) -> String {
    FirstName().fake_with_rng(rng)
}

pub fn last_name<R: Rng>(rng: &mut R) -> String {
    LastName().fake_with_rng(rng)
}

pub fn full_name<R: Rng>(rng: &mut R) -> String {
    Name().fake_with_rng(rng)
}

pub fn city<R: Rng>(rng: &mut R) -> String {
    CityName().fake_with_rng(rng)
}

/// Email unique per `index`: `seed{index}_{username}@{word}.{suffix}`.
pub fn seed_email<R: Rng>(rng: &mut R, index: usize) -> String {
    let username: String = Username().fake_with_rng(rng);
    let word: String = Word().fake_with_rng(rng);
    let suffix: String = DomainSuffix().fake_with_rng(rng);
    format!("seed{index}_{username}@{}.{suffix}", word.to_lowercase())
}

/// Company name truncated to [`VENDOR_NAME_MAX_CHARS`] characters.
pub fn vendor_name<R: Rng>(rng: &mut R) -> String {
    let company: String = CompanyName().fake_with_rng(rng);
    company.chars().take(VENDOR_NAME_MAX_CHARS).collect()
}
