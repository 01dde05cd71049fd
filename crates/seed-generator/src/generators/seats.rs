//! Per-flight seat ledger.
//!
//! The database decrements `available_seats` on every ticket insert, so the
//! generator must never book a flight past its capacity. The ledger tracks
//! booked seats per flight and only offers flights with seats left.

use crate::ids::FlightRef;
use rand::Rng;
use std::collections::HashSet;

/// A seat handed out by the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatBooking {
    pub flight: FlightRef,
    pub seat_no: u32,
}

#[derive(Debug, Clone)]
struct FlightSeats {
    flight: FlightRef,
    taken: HashSet<u32>,
}

impl FlightSeats {
    fn remaining(&self) -> usize {
        (self.flight.capacity as usize).saturating_sub(self.taken.len())
    }
}

#[derive(Debug, Clone, Default)]
pub struct SeatLedger {
    flights: Vec<FlightSeats>,
}

impl SeatLedger {
    pub fn new(flights: &[FlightRef]) -> Self {
        Self {
            flights: flights
                .iter()
                .map(|flight| FlightSeats {
                    flight: *flight,
                    taken: HashSet::new(),
                })
                .collect(),
        }
    }

    /// Seats still available across all flights.
    pub fn remaining(&self) -> usize {
        self.flights.iter().map(FlightSeats::remaining).sum()
    }

    /// Seats booked so far on `flight_id`.
    pub fn booked(&self, flight_id: u64) -> usize {
        self.flights
            .iter()
            .find(|f| f.flight.flight_id == flight_id)
            .map_or(0, |f| f.taken.len())
    }

    /// Book a random free seat on a random flight that still has room.
    ///
    /// Seat numbers lie in `1..=capacity`; a taken seat is advanced to the
    /// next free one. Returns `None` once every flight is full.
    pub fn book<R: Rng>(&mut self, rng: &mut R) -> Option<SeatBooking> {
        let open: Vec<usize> = self
            .flights
            .iter()
            .enumerate()
            .filter(|(_, f)| f.remaining() > 0)
            .map(|(idx, _)| idx)
            .collect();
        if open.is_empty() {
            return None;
        }

        let seats = &mut self.flights[open[rng.gen_range(0..open.len())]];
        let capacity = seats.flight.capacity;
        let mut seat_no = rng.gen_range(1..=capacity);
        while !seats.taken.insert(seat_no) {
            seat_no = if seat_no >= capacity { 1 } else { seat_no + 1 };
        }

        Some(SeatBooking {
            flight: seats.flight,
            seat_no,
        })
    }
}
