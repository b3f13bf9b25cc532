mod comparison;
mod duration_band;
mod error;
mod isochrone;
mod output;
mod reachability;
mod request;
mod sampled_times;
mod weighted_circle;

pub use comparison::*;
pub use duration_band::{duration_bands, DurationBand};
pub use error::{AccessMapError, CALCULATION_FAILED_CODE};
pub use isochrone::*;
pub use output::GeometryOutputFormat;
pub use reachability::*;
pub use request::*;
pub use sampled_times::{SampledTimes, DEFAULT_DELTA_INTERVAL_SECONDS};
pub use weighted_circle::WeightedCircle;
