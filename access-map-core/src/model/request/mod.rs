mod access_map_parameters;
mod access_map_request;
mod time_of_trip;

pub use access_map_parameters::{defaults, AccessMapParameters};
pub use access_map_request::AccessMapRequest;
pub use time_of_trip::{seconds_since_midnight_to_time_str, TimeOfTrip, TimeOfTripType};
