//! Static reference data and the fixed enumerations sampled by the generator.

use std::fmt;

/// A row of the `airport` reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Airport {
    pub name: &'static str,
    pub city: &'static str,
    pub state: &'static str,
    pub country: &'static str,
}

const fn airport(
    name: &'static str,
    city: &'static str,
    state: &'static str,
    country: &'static str,
) -> Airport {
    Airport {
        name,
        city,
        state,
        country,
    }
}

/// Airports inserted with `INSERT IGNORE`; the name is the natural key.
pub static AIRPORTS: [Airport; 20] = [
    airport("JFK International", "New York", "New York", "USA"),
    airport("LAX International", "Los Angeles", "California", "USA"),
    airport("OHare International", "Chicago", "Illinois", "USA"),
    airport("Heathrow", "London", "England", "UK"),
    airport("Charles de Gaulle", "Paris", "Ile-de-France", "France"),
    airport("Dubai International", "Dubai", "Dubai", "UAE"),
    airport("Changi", "Singapore", "Singapore", "Singapore"),
    airport("Narita International", "Tokyo", "Kanto", "Japan"),
    airport("Frankfurt Airport", "Frankfurt", "Hesse", "Germany"),
    airport("Sydney Kingsford Smith", "Sydney", "NSW", "Australia"),
    airport("Toronto Pearson", "Toronto", "Ontario", "Canada"),
    airport("Mumbai Chhatrapati Shivaji", "Mumbai", "Maharashtra", "India"),
    airport("Cape Town International", "Cape Town", "Western Cape", "South Africa"),
    airport("Sao Paulo Guarulhos", "Sao Paulo", "Sao Paulo", "Brazil"),
    airport("Mexico City Benito Juarez", "Mexico City", "CDMX", "Mexico"),
    airport("Beijing Capital", "Beijing", "Beijing", "China"),
    airport("Incheon International", "Seoul", "Incheon", "South Korea"),
    airport("Amsterdam Schiphol", "Amsterdam", "North Holland", "Netherlands"),
    airport("Istanbul Airport", "Istanbul", "Istanbul", "Turkey"),
    airport("Cairo International", "Cairo", "Cairo", "Egypt"),
];

/// Airline names, paired by position with their home airport in [`AIRPORTS`].
pub static AIRLINE_NAMES: [&str; 20] = [
    "Delta Airlines",
    "American Airlines",
    "United Airlines",
    "British Airways",
    "Air France",
    "Emirates",
    "Singapore Airlines",
    "Japan Airlines",
    "Lufthansa",
    "Qantas",
    "Air Canada",
    "IndiGo",
    "South African Airways",
    "LATAM Airlines",
    "Aeromexico",
    "Air China",
    "Korean Air",
    "KLM",
    "Turkish Airlines",
    "EgyptAir",
];

/// Role given to every seeded user.
pub const USER_ROLE: &str = "user";

macro_rules! labelled_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The value stored in the database column.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

labelled_enum!(
    /// Status of a flight.
    FlightStatus {
        Scheduled => "scheduled",
        Delayed => "delayed",
        Canceled => "canceled",
    }
);

labelled_enum!(
    /// Status of an airport bus.
    BusStatus {
        Active => "active",
        Inactive => "inactive",
        Maintenance => "maintenance",
    }
);

labelled_enum!(
    /// Cabin class of a ticket or waitlist entry.
    TravelClass {
        Economy => "Economy",
        Business => "Business",
        First => "First",
    }
);

labelled_enum!(
    FoodPreference {
        Veg => "Veg",
        NonVeg => "Non-Veg",
        Vegan => "Vegan",
        NoPreference => "None",
    }
);

labelled_enum!(
    /// Department a staff member works in.
    StaffDomain {
        Security => "Security",
        Operations => "Operations",
        Maintenance => "Maintenance",
        CustomerService => "Customer Service",
        AirTrafficControl => "Air Traffic Control",
    }
);

labelled_enum!(
    Gender {
        Male => "M",
        Female => "F",
    }
);

labelled_enum!(
    /// Payment outcome recorded on a ticket.
    PaymentStatus {
        Paid => "Paid",
        Pending => "Pending",
        Failed => "Failed",
    }
);

labelled_enum!(
    WaitlistStatus {
        Waiting => "waiting",
        Confirmed => "confirmed",
        Cancelled => "cancelled",
    }
);

/// Flight statuses weighted 3:1:1 towards `scheduled`.
pub const FLIGHT_STATUS_POOL: [FlightStatus; 5] = [
    FlightStatus::Scheduled,
    FlightStatus::Scheduled,
    FlightStatus::Scheduled,
    FlightStatus::Delayed,
    FlightStatus::Canceled,
];

/// Payment statuses weighted 3:1:1 towards `Paid`.
pub const PAYMENT_STATUS_POOL: [PaymentStatus; 5] = [
    PaymentStatus::Paid,
    PaymentStatus::Paid,
    PaymentStatus::Paid,
    PaymentStatus::Pending,
    PaymentStatus::Failed,
];

/// Stop counts weighted towards non-stop flights.
pub const STOPS_POOL: [u8; 5] = [0, 0, 0, 1, 2];
