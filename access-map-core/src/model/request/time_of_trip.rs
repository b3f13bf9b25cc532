use serde::{Deserialize, Serialize};

/// whether the trip time is a departure from, or an arrival at, the location.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfTripType {
    Departure,
    Arrival,
}

impl std::fmt::Display for TimeOfTripType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeOfTripType::Departure => write!(f, "departure"),
            TimeOfTripType::Arrival => write!(f, "arrival"),
        }
    }
}

/// the authoritative time of trip of a request, in seconds since midnight.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "type", content = "seconds")]
pub enum TimeOfTrip {
    Departure(u32),
    Arrival(u32),
}

impl TimeOfTrip {
    /// picks the departure time when present, otherwise the arrival time.
    pub fn from_optional(departure: Option<u32>, arrival: Option<u32>) -> Option<TimeOfTrip> {
        match (departure, arrival) {
            (Some(d), _) => Some(TimeOfTrip::Departure(d)),
            (None, Some(a)) => Some(TimeOfTrip::Arrival(a)),
            (None, None) => None,
        }
    }

    pub fn seconds_since_midnight(&self) -> u32 {
        match self {
            TimeOfTrip::Departure(s) => *s,
            TimeOfTrip::Arrival(s) => *s,
        }
    }

    pub fn trip_type(&self) -> TimeOfTripType {
        match self {
            TimeOfTrip::Departure(_) => TimeOfTripType::Departure,
            TimeOfTrip::Arrival(_) => TimeOfTripType::Arrival,
        }
    }

    /// the same kind of trip time, moved to another time of day.
    pub fn at(&self, seconds_since_midnight: u32) -> TimeOfTrip {
        match self {
            TimeOfTrip::Departure(_) => TimeOfTrip::Departure(seconds_since_midnight),
            TimeOfTrip::Arrival(_) => TimeOfTrip::Arrival(seconds_since_midnight),
        }
    }
}

/// formats seconds since midnight as `HH:MM`. transit service days run past
/// midnight so hours are not wrapped at 24.
pub fn seconds_since_midnight_to_time_str(seconds: u32) -> String {
    let duration = chrono::TimeDelta::seconds(seconds as i64);
    format!(
        "{:02}:{:02}",
        duration.num_hours(),
        duration.num_minutes() % 60
    )
}
