//! Parameterized INSERT statements for every seeded table.

use mysql_async::Value;
use seed_generator::reference::Airport;
use seed_generator::rows::{
    AirlineRow, BusRow, CommuterPhoneRow, CommuterRow, FlightRow, LoyaltyPointsRow,
    PointTransactionRow, StaffPhoneRow, StaffRow, StallRow, TicketRow, UserRow, WaitlistRow,
};
use seed_generator::Table;

const TIME_FORMAT: &str = "%H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// One INSERT with its positional parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub table: Table,
    /// `INSERT IGNORE`: rows colliding with existing keys are skipped.
    pub ignore: bool,
    pub columns: &'static [&'static str],
    pub params: Vec<Value>,
}

impl Insert {
    fn new(table: Table, columns: &'static [&'static str], params: Vec<Value>) -> Self {
        debug_assert_eq!(columns.len(), params.len());
        Self {
            table,
            ignore: false,
            columns,
            params,
        }
    }

    fn ignoring_duplicates(mut self) -> Self {
        self.ignore = true;
        self
    }

    /// SQL text with one `?` placeholder per column.
    pub fn sql(&self) -> String {
        let placeholders: Vec<&str> = self.columns.iter().map(|_| "?").collect();
        format!(
            "INSERT{} INTO `{}` ({}) VALUES ({})",
            if self.ignore { " IGNORE" } else { "" },
            self.table.name(),
            self.columns
                .iter()
                .map(|c| format!("`{c}`"))
                .collect::<Vec<_>>()
                .join(", "),
            placeholders.join(", ")
        )
    }
}

/// Rows that can be written with a single INSERT.
pub trait ToInsert {
    fn to_insert(&self) -> Insert;
}

impl ToInsert for UserRow {
    fn to_insert(&self) -> Insert {
        Insert::new(
            Table::Users,
            &["email", "password", "name", "role"],
            vec![
                self.email.clone().into(),
                self.password_hash.clone().into(),
                self.name.clone().into(),
                self.role.into(),
            ],
        )
    }
}

impl ToInsert for Airport {
    fn to_insert(&self) -> Insert {
        Insert::new(
            Table::Airport,
            &["airport_name", "city", "state", "country"],
            vec![
                self.name.into(),
                self.city.into(),
                self.state.into(),
                self.country.into(),
            ],
        )
        .ignoring_duplicates()
    }
}

impl ToInsert for AirlineRow {
    fn to_insert(&self) -> Insert {
        Insert::new(
            Table::Airlines,
            &["airline_id", "airline_name", "airport_name"],
            vec![
                self.airline_id.into(),
                self.airline_name.into(),
                self.airport_name.into(),
            ],
        )
        .ignoring_duplicates()
    }
}

impl ToInsert for BusRow {
    fn to_insert(&self) -> Insert {
        Insert::new(
            Table::Bus,
            &[
                "airport_name",
                "number_plate",
                "status",
                "destination",
                "start_time",
            ],
            vec![
                self.airport_name.into(),
                self.number_plate.into(),
                self.status.as_str().into(),
                self.destination.clone().into(),
                self.start_time.format(TIME_FORMAT).to_string().into(),
            ],
        )
    }
}

impl ToInsert for CommuterRow {
    fn to_insert(&self) -> Insert {
        Insert::new(
            Table::Commuters,
            &[
                "passenger_no",
                "passport_no",
                "fname",
                "mname",
                "lname",
                "age",
                "airport_name",
                "user_id",
            ],
            vec![
                self.passenger_no.into(),
                self.passport_no.into(),
                self.fname.clone().into(),
                self.mname.clone().into(),
                self.lname.clone().into(),
                self.age.into(),
                self.airport_name.into(),
                self.user_id.into(),
            ],
        )
    }
}

impl ToInsert for CommuterPhoneRow {
    fn to_insert(&self) -> Insert {
        Insert::new(
            Table::CommuterPhone,
            &["passenger_no", "phone_no"],
            vec![self.passenger_no.into(), self.phone_no.into()],
        )
    }
}

impl ToInsert for FlightRow {
    fn to_insert(&self) -> Insert {
        Insert::new(
            Table::Flights,
            &[
                "flight_id",
                "airline_id",
                "status",
                "source",
                "destination",
                "arrival",
                "departure",
                "available_seats",
                "price",
                "date",
                "runway_no",
                "stops",
            ],
            vec![
                self.flight_id.into(),
                self.airline_id.into(),
                self.status.as_str().into(),
                self.source.into(),
                self.destination.into(),
                self.arrival.format(TIME_FORMAT).to_string().into(),
                self.departure.format(TIME_FORMAT).to_string().into(),
                self.available_seats.into(),
                self.price.into(),
                self.date.format(DATE_FORMAT).to_string().into(),
                self.runway_no.into(),
                self.stops.into(),
            ],
        )
    }
}

impl ToInsert for StaffRow {
    fn to_insert(&self) -> Insert {
        Insert::new(
            Table::Staff,
            &[
                "id",
                "airport_name",
                "salary",
                "domain",
                "age",
                "gender",
                "fname",
                "mname",
                "lname",
            ],
            vec![
                self.id.into(),
                self.airport_name.into(),
                self.salary.into(),
                self.domain.as_str().into(),
                self.age.into(),
                self.gender.as_str().into(),
                self.fname.clone().into(),
                self.mname.clone().into(),
                self.lname.clone().into(),
            ],
        )
    }
}

impl ToInsert for StaffPhoneRow {
    fn to_insert(&self) -> Insert {
        Insert::new(
            Table::StaffPhone,
            &["id", "phone"],
            vec![self.id.into(), self.phone.into()],
        )
    }
}

impl ToInsert for StallRow {
    fn to_insert(&self) -> Insert {
        Insert::new(
            Table::Stalls,
            &["airport_name", "stall_id", "name", "owner_name"],
            vec![
                self.airport_name.into(),
                self.stall_id.into(),
                self.name.clone().into(),
                self.owner_name.clone().into(),
            ],
        )
    }
}

impl ToInsert for TicketRow {
    fn to_insert(&self) -> Insert {
        Insert::new(
            Table::Ticket,
            &[
                "passenger_no",
                "class",
                "food_preference",
                "source",
                "destination",
                "seat_no",
                "flight_id",
                "user_id",
                "transaction_id",
                "payment_status",
                "amount_paid",
            ],
            vec![
                self.passenger_no.into(),
                self.class.as_str().into(),
                self.food_preference.as_str().into(),
                self.source.into(),
                self.destination.into(),
                self.seat_no.into(),
                self.flight_id.into(),
                self.user_id.into(),
                self.transaction_id.to_string().into(),
                self.payment_status.as_str().into(),
                self.amount_paid().into(),
            ],
        )
    }
}

impl ToInsert for LoyaltyPointsRow {
    fn to_insert(&self) -> Insert {
        Insert::new(
            Table::LoyaltyPoints,
            &["user_id", "points", "tier"],
            vec![
                self.user_id.into(),
                self.points.into(),
                self.tier.as_str().into(),
            ],
        )
    }
}

impl ToInsert for PointTransactionRow {
    fn to_insert(&self) -> Insert {
        Insert::new(
            Table::PointTransactions,
            &["user_id", "ticket_id", "points_earned", "points_redeemed"],
            vec![
                self.user_id.into(),
                self.ticket_id.into(),
                self.points_earned.into(),
                self.points_redeemed.into(),
            ],
        )
    }
}

impl ToInsert for WaitlistRow {
    fn to_insert(&self) -> Insert {
        Insert::new(
            Table::Waitlist,
            &["user_id", "flight_id", "class", "status"],
            vec![
                self.user_id.into(),
                self.flight_id.into(),
                self.class.as_str().into(),
                self.status.as_str().into(),
            ],
        )
    }
}
