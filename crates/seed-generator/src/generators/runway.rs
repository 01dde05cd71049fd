//! Runway time-slot assignment.
//!
//! Flights are spread round-robin over the runways (`index mod runways`).
//! Each runway hands out departure slots one slot length apart, wrapping at
//! midnight. Slots are not date-aware: two flights on different dates may
//! share a clock time on the same runway.

use chrono::NaiveTime;

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Minimum gap between two departures on the same runway.
pub const MIN_RUNWAY_SEPARATION_MINUTES: u32 = 30;

/// A departure slot on a runway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunwaySlot {
    /// Runway number, starting at 1.
    pub runway_no: u32,
    /// Position of this flight among the flights on its runway.
    pub slot: u32,
    /// Departure as minutes after midnight.
    pub departure_minute: u32,
}

impl RunwaySlot {
    pub fn departure_time(&self) -> NaiveTime {
        time_from_minutes(self.departure_minute)
    }
}

/// Hands out departure slots per runway.
#[derive(Debug, Clone)]
pub struct RunwayScheduler {
    slot_minutes: u32,
    next_slot: Vec<u32>,
}

impl RunwayScheduler {
    /// `runways` is clamped to at least one runway.
    pub fn new(runways: u32, slot_minutes: u32) -> Self {
        Self {
            slot_minutes,
            next_slot: vec![0; runways.max(1) as usize],
        }
    }

    pub fn runways(&self) -> u32 {
        self.next_slot.len() as u32
    }

    /// Assign the slot for the flight at `index` in insertion order.
    pub fn assign(&mut self, index: usize) -> RunwaySlot {
        let runway = index % self.next_slot.len();
        let slot = self.next_slot[runway];
        self.next_slot[runway] += 1;

        let departure_minute = (u64::from(slot) * u64::from(self.slot_minutes)
            % u64::from(MINUTES_PER_DAY)) as u32;

        RunwaySlot {
            runway_no: runway as u32 + 1,
            slot,
            departure_minute,
        }
    }
}

/// Add minutes to a minute-of-day, wrapping at midnight.
pub fn wrap_minutes(minute: u32, offset: u32) -> u32 {
    ((u64::from(minute) + u64::from(offset)) % u64::from(MINUTES_PER_DAY)) as u32
}

/// Convert minutes after midnight (taken modulo one day) to a time of day.
pub fn time_from_minutes(minute: u32) -> NaiveTime {
    let minute = minute % MINUTES_PER_DAY;
    NaiveTime::from_hms_opt(minute / 60, minute % 60, 0).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_runway_is_index_mod_runways() {
        let mut scheduler = RunwayScheduler::new(20, 90);
        for index in 0..100 {
            let slot = scheduler.assign(index);
            assert_eq!(slot.runway_no, (index % 20) as u32 + 1);
        }
    }

    #[test]
    fn test_consecutive_departures_on_a_runway_are_one_slot_apart() {
        let mut scheduler = RunwayScheduler::new(20, 90);
        let mut by_runway: HashMap<u32, Vec<u32>> = HashMap::new();
        for index in 0..100 {
            let slot = scheduler.assign(index);
            by_runway
                .entry(slot.runway_no)
                .or_default()
                .push(slot.departure_minute);
        }

        assert_eq!(by_runway.len(), 20);
        for departures in by_runway.values() {
            assert_eq!(departures[0], 0);
            for pair in departures.windows(2) {
                let gap = (pair[1] + MINUTES_PER_DAY - pair[0]) % MINUTES_PER_DAY;
                assert_eq!(gap, 90);
            }
        }
    }

    #[test]
    fn test_slots_wrap_at_midnight() {
        let mut scheduler = RunwayScheduler::new(1, 90);
        let minutes: Vec<u32> = (0..17).map(|i| scheduler.assign(i).departure_minute).collect();
        // Slot 16 lands on 1440 minutes, which is midnight again.
        assert_eq!(minutes[15], 1350);
        assert_eq!(minutes[16], 0);
    }

    #[test]
    fn test_departure_time() {
        let mut scheduler = RunwayScheduler::new(2, 90);
        scheduler.assign(0);
        scheduler.assign(1);
        let slot = scheduler.assign(2);
        assert_eq!(slot.runway_no, 1);
        assert_eq!(slot.departure_time(), NaiveTime::from_hms_opt(1, 30, 0).unwrap());
    }

    #[test]
    fn test_wrap_minutes() {
        assert_eq!(wrap_minutes(1400, 60), 20);
        assert_eq!(wrap_minutes(0, 300), 300);
        assert_eq!(time_from_minutes(1439), NaiveTime::from_hms_opt(23, 59, 0).unwrap());
    }
}
