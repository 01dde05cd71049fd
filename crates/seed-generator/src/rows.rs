//! Typed rows for every table of the airport schema.

use crate::generators::loyalty::LoyaltyTier;
use crate::reference::{
    BusStatus, FlightStatus, FoodPreference, Gender, PaymentStatus, StaffDomain, TravelClass,
    WaitlistStatus,
};
use chrono::{NaiveDate, NaiveTime};
use std::fmt;
use uuid::Uuid;

/// Tables of the airport schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Table {
    Users,
    Airport,
    Airlines,
    Bus,
    Commuters,
    CommuterPhone,
    Flights,
    Staff,
    StaffPhone,
    Stalls,
    Ticket,
    LoyaltyPoints,
    PointTransactions,
    Waitlist,
}

impl Table {
    /// All tables in dependency order: every table appears after the tables
    /// its foreign keys point at.
    pub const ALL: [Table; 14] = [
        Table::Users,
        Table::Airport,
        Table::Airlines,
        Table::Bus,
        Table::Commuters,
        Table::CommuterPhone,
        Table::Flights,
        Table::Staff,
        Table::StaffPhone,
        Table::Stalls,
        Table::Ticket,
        Table::LoyaltyPoints,
        Table::PointTransactions,
        Table::Waitlist,
    ];

    /// Table name in the database.
    pub fn name(self) -> &'static str {
        match self {
            Table::Users => "users",
            Table::Airport => "airport",
            Table::Airlines => "airlines",
            Table::Bus => "bus",
            Table::Commuters => "commuters",
            Table::CommuterPhone => "commuter_phone",
            Table::Flights => "flights",
            Table::Staff => "staff",
            Table::StaffPhone => "staff_phone",
            Table::Stalls => "stalls",
            Table::Ticket => "ticket",
            Table::LoyaltyPoints => "loyalty_points",
            Table::PointTransactions => "point_transactions",
            Table::Waitlist => "waitlist",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserRow {
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub role: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AirlineRow {
    pub airline_id: u32,
    pub airline_name: &'static str,
    pub airport_name: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BusRow {
    pub airport_name: &'static str,
    pub number_plate: u64,
    pub status: BusStatus,
    pub destination: String,
    pub start_time: NaiveTime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommuterRow {
    pub passenger_no: u64,
    pub passport_no: u64,
    pub fname: String,
    pub mname: String,
    pub lname: String,
    pub age: u8,
    pub airport_name: &'static str,
    /// Owning user.
    pub user_id: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommuterPhoneRow {
    pub passenger_no: u64,
    pub phone_no: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlightRow {
    pub flight_id: u64,
    pub airline_id: u32,
    pub status: FlightStatus,
    pub source: &'static str,
    pub destination: &'static str,
    pub arrival: NaiveTime,
    pub departure: NaiveTime,
    /// Seat capacity at creation; the ticket trigger decrements it.
    pub available_seats: u32,
    pub price: u32,
    pub date: NaiveDate,
    pub runway_no: u32,
    pub stops: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StaffRow {
    pub id: u64,
    pub airport_name: &'static str,
    pub salary: u32,
    pub domain: StaffDomain,
    pub age: u8,
    pub gender: Gender,
    pub fname: String,
    pub mname: String,
    pub lname: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StaffPhoneRow {
    pub id: u64,
    pub phone: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StallRow {
    pub airport_name: &'static str,
    pub stall_id: u32,
    pub name: String,
    pub owner_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TicketRow {
    pub passenger_no: u64,
    pub class: TravelClass,
    pub food_preference: FoodPreference,
    pub source: &'static str,
    pub destination: &'static str,
    pub seat_no: u32,
    pub flight_id: u64,
    pub user_id: u64,
    pub transaction_id: Uuid,
    pub payment_status: PaymentStatus,
    pub amount_paid_cents: u64,
}

impl TicketRow {
    /// Amount paid as a two-decimal string, e.g. `"1234.50"`.
    pub fn amount_paid(&self) -> String {
        format!(
            "{}.{:02}",
            self.amount_paid_cents / 100,
            self.amount_paid_cents % 100
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoyaltyPointsRow {
    pub user_id: u64,
    pub points: u32,
    pub tier: LoyaltyTier,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointTransactionRow {
    pub user_id: u64,
    pub ticket_id: Option<u64>,
    pub points_earned: u32,
    pub points_redeemed: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WaitlistRow {
    pub user_id: u64,
    pub flight_id: u64,
    pub class: TravelClass,
    pub status: WaitlistStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_puts_parents_first() {
        let position = |t: Table| Table::ALL.iter().position(|x| *x == t).unwrap();

        assert!(position(Table::Users) < position(Table::Commuters));
        assert!(position(Table::Airlines) < position(Table::Flights));
        assert!(position(Table::Commuters) < position(Table::Ticket));
        assert!(position(Table::Flights) < position(Table::Ticket));
        assert!(position(Table::Ticket) < position(Table::PointTransactions));
        assert!(position(Table::Staff) < position(Table::StaffPhone));
    }

    #[test]
    fn test_amount_paid_formatting() {
        let ticket = TicketRow {
            passenger_no: 1,
            class: TravelClass::Economy,
            food_preference: FoodPreference::Veg,
            source: "Heathrow",
            destination: "Changi",
            seat_no: 1,
            flight_id: 1001,
            user_id: 1,
            transaction_id: Uuid::nil(),
            payment_status: PaymentStatus::Paid,
            amount_paid_cents: 123_405,
        };
        assert_eq!(ticket.amount_paid(), "1234.05");
    }
}
