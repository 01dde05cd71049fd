//! Main seed generator producing the rows of every table.

use crate::generators::clock::{random_time_of_day, upcoming_dates};
use crate::generators::loyalty::{LoyaltyTier, MAX_SEED_POINTS};
use crate::generators::passport::PassportAllocator;
use crate::generators::runway::{time_from_minutes, wrap_minutes, RunwayScheduler};
use crate::generators::seats::SeatLedger;
use crate::generators::uuid::generate_uuid_v4;
use crate::generators::{person, phone_number, pick, pick_pair};
use crate::ids::{CommuterRef, FlightRef};
use crate::plan::{PlanError, SeedPlan, MAX_STALLS};
use crate::reference::{
    Airport, BusStatus, FoodPreference, Gender, StaffDomain, TravelClass, WaitlistStatus,
    AIRLINE_NAMES, AIRPORTS, FLIGHT_STATUS_POOL, PAYMENT_STATUS_POOL, STOPS_POOL, USER_ROLE,
};
use crate::rows::{
    AirlineRow, BusRow, CommuterPhoneRow, CommuterRow, FlightRow, LoyaltyPointsRow,
    PointTransactionRow, StaffPhoneRow, StaffRow, StallRow, Table, TicketRow, UserRow, WaitlistRow,
};
use chrono::{Local, NaiveDate};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const BUS_PLATE_START: u64 = 10_000_000;
const PASSENGER_NO_START: u64 = 2_000_000_000;
const FLIGHT_ID_START: u64 = 1_000;
const STAFF_ID_START: u64 = 5_000;
const STALL_ID_START: u32 = 200;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// The plan cannot produce a consistent data set
    #[error(transparent)]
    Plan(#[from] PlanError),

    /// A child table needs parent ids that were never issued
    #[error("Cannot generate {table}: no {parent} ids have been issued")]
    MissingParent { table: Table, parent: Table },

    /// Every flight is full before all tickets were issued
    #[error("Seat capacity exhausted after {issued} of {requested} tickets")]
    SeatsExhausted { issued: usize, requested: usize },
}

/// Seed generator that produces the rows of one seeding run.
///
/// Rows are generated table by table. Tables whose rows reference other
/// tables take the issued parent identifiers as arguments; the caller
/// collects them in an [`IdCache`](crate::IdCache) while inserting.
pub struct SeedGenerator {
    plan: SeedPlan,
    seed: u64,
    rng: StdRng,
    /// Flight dates are drawn from the days after this date.
    today: NaiveDate,
    password_hash: String,
    passports: PassportAllocator,
}

impl SeedGenerator {
    /// Create a generator for a validated plan.
    ///
    /// `password_hash` is stored on every user row.
    pub fn new(
        plan: SeedPlan,
        seed: u64,
        password_hash: impl Into<String>,
    ) -> Result<Self, GeneratorError> {
        plan.validate()?;
        Ok(Self {
            plan,
            seed,
            rng: StdRng::seed_from_u64(seed),
            today: Local::now().date_naive(),
            password_hash: password_hash.into(),
            passports: PassportAllocator::new(),
        })
    }

    /// Fix the reference date flight dates are computed from.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn plan(&self) -> &SeedPlan {
        &self.plan
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn airport(&mut self) -> &'static Airport {
        &AIRPORTS[self.rng.gen_range(0..AIRPORTS.len())]
    }

    pub fn users(&mut self) -> Vec<UserRow> {
        (0..self.plan.users)
            .map(|index| UserRow {
                email: person::seed_email(&mut self.rng, index),
                password_hash: self.password_hash.clone(),
                name: person::full_name(&mut self.rng),
                role: USER_ROLE,
            })
            .collect()
    }

    /// The static airport list.
    pub fn airports(&self) -> &'static [Airport] {
        &AIRPORTS
    }

    /// One airline per name, numbered from 1, based at the airport in the
    /// same position.
    pub fn airlines(&self) -> Vec<AirlineRow> {
        AIRLINE_NAMES
            .iter()
            .zip(AIRPORTS.iter())
            .enumerate()
            .map(|(idx, (name, airport))| AirlineRow {
                airline_id: idx as u32 + 1,
                airline_name: *name,
                airport_name: airport.name,
            })
            .collect()
    }

    pub fn buses(&mut self) -> Vec<BusRow> {
        let mut plate = BUS_PLATE_START;
        (0..self.plan.buses)
            .map(|_| {
                plate += self.rng.gen_range(10..=99);
                BusRow {
                    airport_name: self.airport().name,
                    number_plate: plate,
                    status: BusStatus::ALL[self.rng.gen_range(0..BusStatus::ALL.len())],
                    destination: person::city(&mut self.rng),
                    start_time: random_time_of_day(&mut self.rng),
                }
            })
            .collect()
    }

    /// One commuter per user, each with a unique passport number.
    pub fn commuters(&mut self, user_ids: &[u64]) -> Vec<CommuterRow> {
        let mut passenger_no = PASSENGER_NO_START;
        user_ids
            .iter()
            .map(|&user_id| {
                passenger_no += self.rng.gen_range(1..=9);
                CommuterRow {
                    passenger_no,
                    passport_no: self.passports.allocate(&mut self.rng),
                    fname: person::first_name(&mut self.rng),
                    mname: person::first_name(&mut self.rng),
                    lname: person::last_name(&mut self.rng),
                    age: self.rng.gen_range(18..=75),
                    airport_name: self.airport().name,
                    user_id,
                }
            })
            .collect()
    }

    /// One or two phone numbers per commuter.
    pub fn commuter_phones(&mut self, passenger_nos: &[u64]) -> Vec<CommuterPhoneRow> {
        let mut rows = Vec::with_capacity(passenger_nos.len() * 2);
        for &passenger_no in passenger_nos {
            for _ in 0..self.rng.gen_range(1..=2) {
                rows.push(CommuterPhoneRow {
                    passenger_no,
                    phone_no: phone_number(&mut self.rng),
                });
            }
        }
        rows
    }

    /// Flights spread round-robin over the runways, one slot apart per runway.
    pub fn flights(&mut self, airline_ids: &[u32]) -> Result<Vec<FlightRow>, GeneratorError> {
        if airline_ids.is_empty() {
            return Err(GeneratorError::MissingParent {
                table: Table::Flights,
                parent: Table::Airlines,
            });
        }

        let dates = upcoming_dates(self.today, self.plan.flight_days);
        let mut scheduler = RunwayScheduler::new(self.plan.runways, self.plan.slot_minutes);
        let mut flight_id = FLIGHT_ID_START;
        let mut rows = Vec::with_capacity(self.plan.flights);

        for index in 0..self.plan.flights {
            let slot = scheduler.assign(index);
            let arrival_minute = wrap_minutes(slot.departure_minute, self.rng.gen_range(60..=300));
            let (source, destination) =
                pick_pair(&mut self.rng, &AIRPORTS).unwrap_or((AIRPORTS[0], AIRPORTS[1]));
            flight_id += self.rng.gen_range(1..=9);

            rows.push(FlightRow {
                flight_id,
                airline_id: pick(&mut self.rng, airline_ids).unwrap_or(airline_ids[0]),
                status: FLIGHT_STATUS_POOL[self.rng.gen_range(0..FLIGHT_STATUS_POOL.len())],
                source: source.name,
                destination: destination.name,
                arrival: time_from_minutes(arrival_minute),
                departure: slot.departure_time(),
                available_seats: self.rng.gen_range(100..=200),
                price: self.rng.gen_range(5_000..=80_000),
                date: pick(&mut self.rng, &dates).unwrap_or(self.today),
                runway_no: slot.runway_no,
                stops: STOPS_POOL[self.rng.gen_range(0..STOPS_POOL.len())],
            });
        }
        Ok(rows)
    }

    pub fn staff(&mut self) -> Vec<StaffRow> {
        let mut id = STAFF_ID_START;
        (0..self.plan.staff)
            .map(|_| {
                id += self.rng.gen_range(1..=9);
                StaffRow {
                    id,
                    airport_name: self.airport().name,
                    salary: self.rng.gen_range(30_000..=120_000),
                    domain: StaffDomain::ALL[self.rng.gen_range(0..StaffDomain::ALL.len())],
                    age: self.rng.gen_range(22..=60),
                    gender: Gender::ALL[self.rng.gen_range(0..Gender::ALL.len())],
                    fname: person::first_name(&mut self.rng),
                    mname: person::first_name(&mut self.rng),
                    lname: person::last_name(&mut self.rng),
                }
            })
            .collect()
    }

    /// One phone number per staff member.
    pub fn staff_phones(&mut self, staff_ids: &[u64]) -> Vec<StaffPhoneRow> {
        staff_ids
            .iter()
            .map(|&id| StaffPhoneRow {
                id,
                phone: phone_number(&mut self.rng),
            })
            .collect()
    }

    pub fn stalls(&mut self) -> Vec<StallRow> {
        // Bounded by `MAX_STALLS` in plan validation.
        let count = u32::try_from(self.plan.stalls).unwrap_or(MAX_STALLS as u32);
        (1..=count)
            .map(|offset| StallRow {
                airport_name: self.airport().name,
                stall_id: STALL_ID_START + offset,
                name: person::vendor_name(&mut self.rng),
                owner_name: person::full_name(&mut self.rng),
            })
            .collect()
    }

    /// Tickets for randomly chosen commuters, at most one per commuter.
    ///
    /// Each ticket books a free seat on a flight with remaining capacity and
    /// copies that flight's route. The ticket is owned by the commuter's user.
    pub fn tickets(
        &mut self,
        commuters: &[CommuterRef],
        flights: &[FlightRef],
    ) -> Result<Vec<TicketRow>, GeneratorError> {
        if flights.is_empty() {
            return Err(GeneratorError::MissingParent {
                table: Table::Ticket,
                parent: Table::Flights,
            });
        }

        let mut holders = commuters.to_vec();
        holders.shuffle(&mut self.rng);
        holders.truncate(self.plan.tickets);

        let requested = holders.len();
        let mut ledger = SeatLedger::new(flights);
        let mut rows = Vec::with_capacity(requested);

        for holder in holders {
            let booking = ledger
                .book(&mut self.rng)
                .ok_or(GeneratorError::SeatsExhausted {
                    issued: rows.len(),
                    requested,
                })?;

            rows.push(TicketRow {
                passenger_no: holder.passenger_no,
                class: TravelClass::ALL[self.rng.gen_range(0..TravelClass::ALL.len())],
                food_preference: FoodPreference::ALL
                    [self.rng.gen_range(0..FoodPreference::ALL.len())],
                source: booking.flight.source,
                destination: booking.flight.destination,
                seat_no: booking.seat_no,
                flight_id: booking.flight.flight_id,
                user_id: holder.user_id,
                transaction_id: generate_uuid_v4(&mut self.rng),
                payment_status: PAYMENT_STATUS_POOL
                    [self.rng.gen_range(0..PAYMENT_STATUS_POOL.len())],
                amount_paid_cents: self.rng.gen_range(100_000..=8_000_000),
            });
        }
        Ok(rows)
    }

    /// Exactly one loyalty row per user.
    pub fn loyalty_points(&mut self, user_ids: &[u64]) -> Vec<LoyaltyPointsRow> {
        user_ids
            .iter()
            .map(|&user_id| {
                let points = self.rng.gen_range(0..=MAX_SEED_POINTS);
                LoyaltyPointsRow {
                    user_id,
                    points,
                    tier: LoyaltyTier::from_points(points),
                }
            })
            .collect()
    }

    /// Point transactions, a share of which reference no ticket.
    pub fn point_transactions(
        &mut self,
        user_ids: &[u64],
        ticket_ids: &[u64],
    ) -> Result<Vec<PointTransactionRow>, GeneratorError> {
        if user_ids.is_empty() {
            return Err(GeneratorError::MissingParent {
                table: Table::PointTransactions,
                parent: Table::Users,
            });
        }

        let linked_ratio = 1.0 - self.plan.unlinked_transaction_ratio;
        let mut rows = Vec::with_capacity(self.plan.point_transactions);
        for _ in 0..self.plan.point_transactions {
            let user_id = pick(&mut self.rng, user_ids).unwrap_or(user_ids[0]);
            let ticket_id = if self.rng.gen_bool(linked_ratio) {
                pick(&mut self.rng, ticket_ids)
            } else {
                None
            };
            rows.push(PointTransactionRow {
                user_id,
                ticket_id,
                points_earned: self.rng.gen_range(0..=500),
                points_redeemed: self.rng.gen_range(0..=200),
            });
        }
        Ok(rows)
    }

    pub fn waitlist(
        &mut self,
        user_ids: &[u64],
        flight_ids: &[u64],
    ) -> Result<Vec<WaitlistRow>, GeneratorError> {
        if user_ids.is_empty() {
            return Err(GeneratorError::MissingParent {
                table: Table::Waitlist,
                parent: Table::Users,
            });
        }
        if flight_ids.is_empty() {
            return Err(GeneratorError::MissingParent {
                table: Table::Waitlist,
                parent: Table::Flights,
            });
        }

        Ok((0..self.plan.waitlist)
            .map(|_| WaitlistRow {
                user_id: pick(&mut self.rng, user_ids).unwrap_or(user_ids[0]),
                flight_id: pick(&mut self.rng, flight_ids).unwrap_or(flight_ids[0]),
                class: TravelClass::ALL[self.rng.gen_range(0..TravelClass::ALL.len())],
                status: WaitlistStatus::ALL[self.rng.gen_range(0..WaitlistStatus::ALL.len())],
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::runway::MINUTES_PER_DAY;
    use crate::IdCache;
    use chrono::Timelike;
    use std::collections::{HashMap, HashSet};

    const HASH: &str = "$2b$10$abcdefghijklmnopqrstuu";

    fn generator(seed: u64) -> SeedGenerator {
        SeedGenerator::new(SeedPlan::default(), seed, HASH)
            .unwrap()
            .with_today(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())
    }

    /// Run the whole generation with sequential ids standing in for the
    /// auto-increment columns.
    fn generate_all(generator: &mut SeedGenerator) -> (IdCache, Vec<TicketRow>) {
        let mut cache = IdCache::new();
        for (idx, _) in generator.users().iter().enumerate() {
            cache.record_user(idx as u64 + 1);
        }
        for airline in generator.airlines() {
            cache.record_airline(&airline);
        }
        for commuter in generator.commuters(&cache.user_ids.clone()) {
            cache.record_commuter(&commuter);
        }
        for flight in generator.flights(&cache.airline_ids.clone()).unwrap() {
            cache.record_flight(&flight);
        }
        let tickets = generator
            .tickets(&cache.commuters.clone(), &cache.flights.clone())
            .unwrap();
        for idx in 0..tickets.len() {
            cache.record_ticket(idx as u64 + 1);
        }
        (cache, tickets)
    }

    #[test]
    fn test_invalid_plan_is_rejected() {
        let plan = SeedPlan {
            users: 0,
            ..SeedPlan::default()
        };
        let result = SeedGenerator::new(plan, 42, HASH);
        assert!(matches!(result, Err(GeneratorError::Plan(_))));
    }

    #[test]
    fn test_users_have_unique_emails_and_shared_hash() {
        let mut generator = generator(42);
        let users = generator.users();

        assert_eq!(users.len(), 100);
        let emails: HashSet<_> = users.iter().map(|u| u.email.as_str()).collect();
        assert_eq!(emails.len(), 100);
        assert!(users.iter().all(|u| u.password_hash == HASH));
        assert!(users.iter().all(|u| u.role == "user"));
    }

    #[test]
    fn test_deterministic_generation() {
        let mut gen1 = generator(42);
        let mut gen2 = generator(42);

        assert_eq!(gen1.users(), gen2.users());
        assert_eq!(gen1.buses(), gen2.buses());
        assert_eq!(gen1.commuters(&[1, 2, 3]), gen2.commuters(&[1, 2, 3]));
    }

    #[test]
    fn test_airlines_are_based_at_reference_airports() {
        let generator = generator(42);
        let airlines = generator.airlines();

        assert_eq!(airlines.len(), 20);
        assert_eq!(airlines[0].airline_id, 1);
        assert_eq!(airlines[0].airline_name, "Delta Airlines");
        assert_eq!(airlines[0].airport_name, "JFK International");
        assert_eq!(airlines[19].airline_id, 20);
        assert_eq!(generator.airports().len(), 20);
    }

    #[test]
    fn test_bus_plates_increase() {
        let mut generator = generator(42);
        let buses = generator.buses();

        assert_eq!(buses.len(), 50);
        let mut previous = BUS_PLATE_START;
        for bus in &buses {
            let step = bus.number_plate - previous;
            assert!((10..=99).contains(&step));
            previous = bus.number_plate;
        }
    }

    #[test]
    fn test_commuter_passports_are_unique() {
        let mut generator = generator(42);
        let user_ids: Vec<u64> = (1..=100).collect();
        let commuters = generator.commuters(&user_ids);

        assert_eq!(commuters.len(), 100);
        let passports: HashSet<_> = commuters.iter().map(|c| c.passport_no).collect();
        assert_eq!(passports.len(), 100);
        let passenger_nos: HashSet<_> = commuters.iter().map(|c| c.passenger_no).collect();
        assert_eq!(passenger_nos.len(), 100);
        for (commuter, user_id) in commuters.iter().zip(&user_ids) {
            assert_eq!(commuter.user_id, *user_id);
            assert!((18..=75).contains(&commuter.age));
        }
    }

    #[test]
    fn test_commuter_phones_per_commuter() {
        let mut generator = generator(42);
        let passenger_nos: Vec<u64> = (0..100).map(|i| 2_000_000_000 + i).collect();
        let phones = generator.commuter_phones(&passenger_nos);

        assert!((100..=200).contains(&phones.len()));
        let mut per_commuter: HashMap<u64, usize> = HashMap::new();
        for phone in &phones {
            *per_commuter.entry(phone.passenger_no).or_default() += 1;
        }
        assert_eq!(per_commuter.len(), 100);
        assert!(per_commuter.values().all(|n| (1..=2).contains(n)));
    }

    #[test]
    fn test_flights_respect_runway_slots() {
        let mut generator = generator(42);
        let airline_ids: Vec<u32> = (1..=20).collect();
        let flights = generator.flights(&airline_ids).unwrap();

        assert_eq!(flights.len(), 100);

        let mut by_runway: HashMap<u32, Vec<&FlightRow>> = HashMap::new();
        for flight in &flights {
            by_runway.entry(flight.runway_no).or_default().push(flight);
        }
        assert_eq!(by_runway.len(), 20);

        for runway in by_runway.values() {
            for pair in runway.windows(2) {
                let previous = pair[0].departure.num_seconds_from_midnight() / 60;
                let next = pair[1].departure.num_seconds_from_midnight() / 60;
                assert_eq!((next + MINUTES_PER_DAY - previous) % MINUTES_PER_DAY, 90);
            }
            // Any two departures on one runway are at least 30 minutes apart.
            for a in runway.iter() {
                for b in runway.iter() {
                    if a.flight_id != b.flight_id {
                        let a = a.departure.num_seconds_from_midnight() / 60;
                        let b = b.departure.num_seconds_from_midnight() / 60;
                        let gap = a.abs_diff(b).min(MINUTES_PER_DAY - a.abs_diff(b));
                        assert!(gap >= 30);
                    }
                }
            }
        }
    }

    #[test]
    fn test_flight_fields_within_bounds() {
        let mut generator = generator(42);
        let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let flights = generator.flights(&[1, 2, 3]).unwrap();

        let mut previous_id = FLIGHT_ID_START;
        for flight in &flights {
            assert!(flight.flight_id > previous_id && flight.flight_id - previous_id <= 9);
            previous_id = flight.flight_id;
            assert_ne!(flight.source, flight.destination);
            assert!((100..=200).contains(&flight.available_seats));
            assert!((5_000..=80_000).contains(&flight.price));
            assert!(flight.date > today);
            assert!((flight.date - today).num_days() <= 15);
            assert!([1, 2, 3].contains(&flight.airline_id));

            let departure = flight.departure.num_seconds_from_midnight() / 60;
            let arrival = flight.arrival.num_seconds_from_midnight() / 60;
            let duration = (arrival + MINUTES_PER_DAY - departure) % MINUTES_PER_DAY;
            assert!((60..=300).contains(&duration));
        }
    }

    #[test]
    fn test_flights_need_airlines() {
        let mut generator = generator(42);
        let result = generator.flights(&[]);
        assert!(matches!(
            result,
            Err(GeneratorError::MissingParent {
                parent: Table::Airlines,
                ..
            })
        ));
    }

    #[test]
    fn test_tickets_never_exceed_capacity() {
        let mut generator = generator(42);
        let (cache, tickets) = generate_all(&mut generator);

        assert_eq!(tickets.len(), 100);

        let capacity: HashMap<u64, u32> = cache
            .flights
            .iter()
            .map(|f| (f.flight_id, f.capacity))
            .collect();
        let mut seats: HashMap<u64, HashSet<u32>> = HashMap::new();
        for ticket in &tickets {
            let cap = capacity[&ticket.flight_id];
            assert!((1..=cap).contains(&ticket.seat_no));
            assert!(seats.entry(ticket.flight_id).or_default().insert(ticket.seat_no));
        }
        for (flight_id, booked) in &seats {
            assert!(booked.len() as u32 <= capacity[flight_id]);
        }
    }

    #[test]
    fn test_tickets_follow_commuter_and_flight() {
        let mut generator = generator(42);
        let (cache, tickets) = generate_all(&mut generator);

        let owners: HashMap<u64, u64> = cache
            .commuters
            .iter()
            .map(|c| (c.passenger_no, c.user_id))
            .collect();
        let routes: HashMap<u64, (&str, &str)> = cache
            .flights
            .iter()
            .map(|f| (f.flight_id, (f.source, f.destination)))
            .collect();

        let holders: HashSet<_> = tickets.iter().map(|t| t.passenger_no).collect();
        assert_eq!(holders.len(), tickets.len());
        for ticket in &tickets {
            assert_eq!(owners[&ticket.passenger_no], ticket.user_id);
            assert_eq!(routes[&ticket.flight_id], (ticket.source, ticket.destination));
            assert!((100_000..=8_000_000).contains(&ticket.amount_paid_cents));
        }
    }

    #[test]
    fn test_tickets_fail_when_seats_run_out() {
        let plan = SeedPlan {
            users: 5,
            flights: 1,
            tickets: 5,
            ..SeedPlan::default()
        };
        let mut generator = SeedGenerator::new(plan, 42, HASH).unwrap();
        let commuters: Vec<CommuterRef> = (1..=5)
            .map(|i| CommuterRef {
                passenger_no: 2_000_000_000 + i,
                user_id: i,
            })
            .collect();
        let flights = [FlightRef {
            flight_id: 1001,
            capacity: 3,
            source: "Heathrow",
            destination: "Changi",
        }];

        let result = generator.tickets(&commuters, &flights);
        assert!(matches!(
            result,
            Err(GeneratorError::SeatsExhausted {
                issued: 3,
                requested: 5
            })
        ));
    }

    #[test]
    fn test_one_loyalty_row_per_user() {
        let mut generator = generator(42);
        let user_ids: Vec<u64> = (1..=100).collect();
        let rows = generator.loyalty_points(&user_ids);

        assert_eq!(rows.len(), 100);
        let users: HashSet<_> = rows.iter().map(|r| r.user_id).collect();
        assert_eq!(users.len(), 100);
        for row in &rows {
            assert!(row.points <= MAX_SEED_POINTS);
            assert_eq!(row.tier, LoyaltyTier::from_points(row.points));
        }
    }

    #[test]
    fn test_point_transactions_reference_issued_ids() {
        let mut generator = generator(42);
        let user_ids: Vec<u64> = (1..=100).collect();
        let ticket_ids: Vec<u64> = (500..600).collect();
        let rows = generator.point_transactions(&user_ids, &ticket_ids).unwrap();

        assert_eq!(rows.len(), 100);
        let unlinked = rows.iter().filter(|r| r.ticket_id.is_none()).count();
        assert!(unlinked > 0 && unlinked < 50, "unlinked = {unlinked}");
        for row in &rows {
            assert!(user_ids.contains(&row.user_id));
            if let Some(ticket_id) = row.ticket_id {
                assert!(ticket_ids.contains(&ticket_id));
            }
            assert!(row.points_earned <= 500);
            assert!(row.points_redeemed <= 200);
        }
    }

    #[test]
    fn test_point_transactions_without_tickets() {
        let mut generator = generator(42);
        let rows = generator.point_transactions(&[1, 2], &[]).unwrap();
        assert!(rows.iter().all(|r| r.ticket_id.is_none()));
    }

    #[test]
    fn test_waitlist() {
        let mut generator = generator(42);
        let rows = generator.waitlist(&[1, 2, 3], &[1001, 1005]).unwrap();

        assert_eq!(rows.len(), 50);
        assert!(rows.iter().all(|r| [1, 2, 3].contains(&r.user_id)));
        assert!(rows.iter().all(|r| [1001, 1005].contains(&r.flight_id)));

        let result = generator.waitlist(&[1], &[]);
        assert!(matches!(result, Err(GeneratorError::MissingParent { .. })));
    }

    #[test]
    fn test_oversized_stall_plan_is_rejected() {
        let plan = SeedPlan {
            stalls: MAX_STALLS + 1,
            ..SeedPlan::default()
        };
        assert!(matches!(
            SeedGenerator::new(plan, 42, HASH),
            Err(GeneratorError::Plan(PlanError::Invalid(_)))
        ));
    }

    #[test]
    fn test_stalls_and_staff() {
        let mut generator = generator(42);
        let stalls = generator.stalls();
        assert_eq!(stalls.len(), 60);
        assert_eq!(stalls[0].stall_id, 201);
        assert_eq!(stalls[59].stall_id, 260);

        let staff = generator.staff();
        assert_eq!(staff.len(), 100);
        let ids: HashSet<_> = staff.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), 100);
        assert!(staff.iter().all(|s| (30_000..=120_000).contains(&s.salary)));

        let phones = generator.staff_phones(&staff.iter().map(|s| s.id).collect::<Vec<_>>());
        assert_eq!(phones.len(), 100);
    }
}
