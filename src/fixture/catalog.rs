//! Fixed enumerations and value ranges the factories draw from.

use chrono::{Duration, NaiveDateTime, Utc};
use rand::Rng;

/// Business aviation airports (ICAO).
pub const AIRPORTS: &[&str] = &[
    "KTEB", "KHPN", "KBED", "KBOS", "KIAD", "KOPF", "KMIA", "KPBI", "KFLL", "KMDW", "KORD",
    "KDAL", "KHOU", "KAPA", "KASE", "KSDL", "KLAS", "KVNY", "KSNA", "KSJC", "KSFO", "EGGW",
    "LFPB", "MYNN", "TNCM",
];

/// Operator account states.
pub const OPERATOR_STATUSES: &[&str] = &["active", "pending", "suspended"];
/// Aircraft availability states.
pub const AIRCRAFT_STATUSES: &[&str] = &["available", "in_maintenance", "chartered"];
/// Flight leg lifecycle states.
pub const FLIGHT_LEG_STATUSES: &[&str] =
    &["scheduled", "boarding", "departed", "completed", "cancelled"];
/// Charter request lifecycle states.
pub const CHARTER_REQUEST_STATUSES: &[&str] =
    &["pending", "quoted", "booked", "cancelled", "expired"];
/// Itinerary shapes of a charter request.
pub const TRIP_TYPES: &[&str] = &["one_way", "round_trip", "multi_leg"];
/// Pricing quote lifecycle states.
pub const QUOTE_STATUSES: &[&str] = &["draft", "sent", "accepted", "rejected", "expired"];
/// Booking lifecycle states.
pub const BOOKING_STATUSES: &[&str] = &["pending", "confirmed", "completed", "cancelled"];
/// Payment states of a booking.
pub const PAYMENT_STATUSES: &[&str] = &["pending", "paid", "refunded", "failed"];
/// Booking leg states.
pub const BOOKING_LEG_STATUSES: &[&str] = &["scheduled", "completed", "cancelled"];
/// Maintenance record states.
pub const MAINTENANCE_STATUSES: &[&str] = &["scheduled", "in_progress", "completed"];
/// Kinds of money movement.
pub const TRANSACTION_TYPES: &[&str] = &["payment", "deposit", "refund", "payout"];
/// Accepted payment methods.
pub const PAYMENT_METHODS: &[&str] = &["card", "wire", "ach", "crypto"];
/// Transaction settlement states.
pub const TRANSACTION_STATUSES: &[&str] = &["pending", "completed", "failed"];
/// Alert severities, least severe first.
pub const ALERT_SEVERITIES: &[&str] = &["info", "warning", "critical"];
/// Channels a user can be notified on.
pub const NOTIFICATION_CHANNELS: &[&str] = &["email", "sms", "push"];
/// Tracked user actions.
pub const BEHAVIOR_EVENTS: &[&str] =
    &["search", "view_aircraft", "request_quote", "book", "cancel"];
/// Marketplace pages user sessions land on.
pub const PAGES: &[&str] = &[
    "/",
    "/search",
    "/aircraft",
    "/empty-legs",
    "/quotes",
    "/bookings",
    "/account",
];
/// Device classes of a user session.
pub const DEVICES: &[&str] = &["desktop", "mobile", "tablet"];
/// Traffic sources of a user session.
pub const REFERRERS: &[&str] = &["direct", "google", "newsletter", "partner", "linkedin"];
/// Operator safety certifications.
pub const CERTIFICATIONS: &[&str] = &[
    "FAA Part 135",
    "ARGUS Platinum",
    "ARGUS Gold",
    "Wyvern Wingman",
    "IS-BAO Stage 3",
    "EASA AOC",
];
/// Versions of the pricing model behind predictions.
pub const PRICING_MODEL_VERSIONS: &[&str] = &["pricing-v1.2", "pricing-v1.3", "pricing-v2.0"];
/// Currency of every generated amount.
pub const CURRENCY: &str = "USD";

/// First word of a generated operator name.
pub const OPERATOR_NAME_PREFIXES: &[&str] = &[
    "Summit", "Atlantic", "Pacific", "Sterling", "Horizon", "Apex", "Falcon", "Meridian",
    "Vista", "Northstar", "Bluewater", "Keystone",
];
/// Last words of a generated operator name.
pub const OPERATOR_NAME_SUFFIXES: &[&str] =
    &["Aviation", "Charter", "Air", "Jets", "Flight Group", "Air Partners"];

/// Given names of reviewers and passengers.
pub const FIRST_NAMES: &[&str] = &[
    "Alex", "Jordan", "Taylor", "Morgan", "Casey", "Riley", "Jamie", "Avery", "Quinn", "Drew",
    "Harper", "Rowan",
];
/// Family names of reviewers and passengers.
pub const LAST_NAMES: &[&str] = &[
    "Walker", "Chen", "Okafor", "Silva", "Novak", "Haddad", "Larsen", "Moreau", "Patel", "Reyes",
];

/// Free-text passenger requests.
pub const SPECIAL_REQUESTS: &[&str] = &[
    "Pet travelling in cabin",
    "Catering for a vegetarian group",
    "Ground transport at arrival",
    "Extra baggage: two sets of golf clubs",
    "Wi-Fi required for the full flight",
];

/// Review title and comment for four and five stars.
pub const POSITIVE_REVIEWS: &[(&str, &str)] = &[
    ("Flawless trip", "Crew was punctual and the cabin spotless."),
    ("Will book again", "Smooth booking process and a great flight."),
    ("Excellent service", "Catering and ground handling were perfect."),
    ("On time, every time", "Departed exactly on schedule both ways."),
];
/// Review title and comment for three stars or less.
pub const NEGATIVE_REVIEWS: &[(&str, &str)] = &[
    ("Delayed departure", "Left ninety minutes late with little communication."),
    ("Not as advertised", "Cabin was older than the listing photos suggested."),
    ("Average experience", "Flight was fine but catering was missing."),
];

/// Maintenance providers.
pub const TECHNICIANS: &[&str] = &[
    "Duncan Aviation",
    "Western Aircraft",
    "Signature TECHNICAIR",
    "Jet Aviation MRO",
    "In-house line crew",
];

/// Maintenance event type, description and cost range in USD.
pub const MAINTENANCE_EVENTS: &[(&str, &str, f64, f64)] = &[
    ("a_check", "Routine A-check and fluid servicing", 8_000.0, 25_000.0),
    ("b_check", "B-check with landing gear inspection", 25_000.0, 60_000.0),
    ("c_check", "Heavy C-check and corrosion inspection", 150_000.0, 400_000.0),
    ("inspection", "Phase inspection per manufacturer program", 2_000.0, 10_000.0),
    ("repair", "Unscheduled repair of hydraulic leak", 5_000.0, 80_000.0),
    ("avionics_upgrade", "ADS-B and FMS software upgrade", 50_000.0, 300_000.0),
];

/// Alert type with a title and message template (`{}` is replaced by an airport).
pub const ALERTS: &[(&str, &str, &str)] = &[
    ("price_drop", "Price drop on a saved route", "Quotes departing {} dropped 12% this week."),
    ("empty_leg_available", "New empty leg", "An empty leg out of {} was just listed."),
    ("weather_delay", "Weather delay expected", "Low visibility forecast at {} this evening."),
    ("maintenance_due", "Maintenance due", "An aircraft based at {} is due for inspection."),
    ("booking_update", "Booking updated", "A booking departing {} changed its schedule."),
];

/// Performance envelope of an aircraft category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AircraftProfile {
    /// Category name stored on the aircraft
    pub category: &'static str,
    /// Models of the category
    pub models: &'static [&'static str],
    /// Passenger seats, min and max
    pub passengers: (i32, i32),
    /// Range in nautical miles, min and max
    pub range_nm: (i32, i32),
    /// Cruise speed in knots, min and max
    pub cruise_speed_kts: (i32, i32),
    /// Charter rate per flight hour in USD, min and max
    pub hourly_rate: (f64, f64),
}

/// Profiles of the categories, smallest first.
pub const AIRCRAFT_PROFILES: &[AircraftProfile] = &[
    AircraftProfile {
        category: "turboprop",
        models: &["King Air 350i", "Pilatus PC-12 NGX"],
        passengers: (6, 9),
        range_nm: (1_500, 1_800),
        cruise_speed_kts: (280, 310),
        hourly_rate: (2_000.0, 3_000.0),
    },
    AircraftProfile {
        category: "light_jet",
        models: &["Citation CJ3+", "Phenom 300E", "Learjet 75"],
        passengers: (6, 8),
        range_nm: (1_800, 2_000),
        cruise_speed_kts: (400, 450),
        hourly_rate: (3_000.0, 4_200.0),
    },
    AircraftProfile {
        category: "midsize_jet",
        models: &["Citation XLS+", "Hawker 900XP", "Learjet 60XR"],
        passengers: (7, 9),
        range_nm: (2_000, 2_500),
        cruise_speed_kts: (430, 460),
        hourly_rate: (4_000.0, 5_200.0),
    },
    AircraftProfile {
        category: "super_midsize_jet",
        models: &["Challenger 350", "Citation Longitude", "Praetor 600"],
        passengers: (8, 10),
        range_nm: (3_200, 3_600),
        cruise_speed_kts: (460, 480),
        hourly_rate: (5_000.0, 6_500.0),
    },
    AircraftProfile {
        category: "heavy_jet",
        models: &["Gulfstream G450", "Falcon 900LX", "Global 6000"],
        passengers: (12, 16),
        range_nm: (4_000, 6_000),
        cruise_speed_kts: (470, 500),
        hourly_rate: (6_500.0, 8_000.0),
    },
];

/// Pick an element uniformly at random. `items` must not be empty.
pub fn pick<'a, T>(rng: &mut impl Rng, items: &'a [T]) -> &'a T {
    &items[rng.random_range(0..items.len())]
}

/// Pick up to `amount` distinct elements.
pub fn pick_many<T: Copy>(rng: &mut impl Rng, items: &[T], amount: usize) -> Vec<T> {
    rand::seq::index::sample(rng, items.len(), amount.min(items.len()))
        .into_iter()
        .map(|i| items[i])
        .collect()
}

/// Pick two different airports.
pub fn route(rng: &mut impl Rng) -> (&'static str, &'static str) {
    let departure = *pick(rng, AIRPORTS);
    loop {
        let arrival = *pick(rng, AIRPORTS);
        if arrival != departure {
            return (departure, arrival);
        }
    }
}

/// A route as `DEPARTURE-ARRIVAL`.
pub fn route_code(rng: &mut impl Rng) -> String {
    let (departure, arrival) = route(rng);
    format!("{}-{}", departure, arrival)
}

/// The profile of a category name, falling back to midsize for unknown categories.
pub fn profile_for(category: &str) -> &'static AircraftProfile {
    AIRCRAFT_PROFILES
        .iter()
        .find(|p| p.category == category)
        .unwrap_or(&AIRCRAFT_PROFILES[2])
}

/// A full name.
pub fn person_name(rng: &mut impl Rng) -> String {
    let first = *pick(rng, FIRST_NAMES);
    format!("{} {}", first, pick(rng, LAST_NAMES))
}

/// Round to cents.
pub fn money(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Round to `places` decimal places.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// The current UTC time, without zone.
pub fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// A timestamp a random number of days (and minutes) away from now.
pub fn days_from_now(rng: &mut impl Rng, min_days: i64, max_days: i64) -> NaiveDateTime {
    let days = rng.random_range(min_days..=max_days);
    let minutes = rng.random_range(0..24 * 60);
    now() + Duration::days(days) + Duration::minutes(minutes)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn hourly_rates_stay_in_charter_range() {
        for profile in AIRCRAFT_PROFILES {
            assert!(profile.hourly_rate.0 >= 2_000.0);
            assert!(profile.hourly_rate.1 <= 8_000.0);
            assert!(profile.passengers.0 <= profile.passengers.1);
        }
    }

    #[test]
    fn routes_never_return_to_departure() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let (departure, arrival) = route(&mut rng);
            assert_ne!(departure, arrival);
        }
    }

    #[test]
    fn pick_many_returns_distinct_items() {
        let mut rng = StdRng::seed_from_u64(7);
        let picked = pick_many(&mut rng, CERTIFICATIONS, 3);
        let mut deduped = picked.clone();
        deduped.sort();
        deduped.dedup();

        assert_eq!(picked.len(), 3);
        assert_eq!(deduped.len(), 3);
        assert_eq!(pick_many(&mut rng, TRIP_TYPES, 10).len(), TRIP_TYPES.len());
    }

    #[test]
    fn rounds_money_to_cents() {
        assert_eq!(money(1234.5678), 1234.57);
        assert_eq!(round_to(0.87654, 2), 0.88);
    }
}
