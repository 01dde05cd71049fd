//! Times of day and flight dates.

use chrono::{Days, NaiveDate, NaiveTime};
use rand::Rng;

/// Random time of day with second precision.
pub fn random_time_of_day<R: Rng>(rng: &mut R) -> NaiveTime {
    let seconds = rng.gen_range(0..86_400);
    NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0).unwrap_or_default()
}

/// The `days` dates following `today` (today itself excluded).
pub fn upcoming_dates(today: NaiveDate, days: u32) -> Vec<NaiveDate> {
    (1..=u64::from(days))
        .filter_map(|offset| today.checked_add_days(Days::new(offset)))
        .collect()
}
