//! In-memory cache of identifiers issued to parent rows.
//!
//! Child tables reference parents through this cache instead of reading the
//! database back.

use crate::rows::{AirlineRow, CommuterRow, FlightRow, StaffRow};

/// A commuter and the user who owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommuterRef {
    pub passenger_no: u64,
    pub user_id: u64,
}

/// The parts of a flight that tickets and waitlist entries need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlightRef {
    pub flight_id: u64,
    pub capacity: u32,
    pub source: &'static str,
    pub destination: &'static str,
}

/// Identifiers issued so far, grouped by table.
#[derive(Debug, Clone, Default)]
pub struct IdCache {
    pub user_ids: Vec<u64>,
    pub commuters: Vec<CommuterRef>,
    pub airline_ids: Vec<u32>,
    pub flights: Vec<FlightRef>,
    pub staff_ids: Vec<u64>,
    pub ticket_ids: Vec<u64>,
}

impl IdCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_user(&mut self, user_id: u64) {
        self.user_ids.push(user_id);
    }

    pub fn record_airline(&mut self, row: &AirlineRow) {
        self.airline_ids.push(row.airline_id);
    }

    pub fn record_commuter(&mut self, row: &CommuterRow) {
        self.commuters.push(CommuterRef {
            passenger_no: row.passenger_no,
            user_id: row.user_id,
        });
    }

    pub fn record_flight(&mut self, row: &FlightRow) {
        self.flights.push(FlightRef {
            flight_id: row.flight_id,
            capacity: row.available_seats,
            source: row.source,
            destination: row.destination,
        });
    }

    pub fn record_staff(&mut self, row: &StaffRow) {
        self.staff_ids.push(row.id);
    }

    pub fn record_ticket(&mut self, ticket_id: u64) {
        self.ticket_ids.push(ticket_id);
    }

    pub fn passenger_nos(&self) -> Vec<u64> {
        self.commuters.iter().map(|c| c.passenger_no).collect()
    }

    pub fn flight_ids(&self) -> Vec<u64> {
        self.flights.iter().map(|f| f.flight_id).collect()
    }
}
