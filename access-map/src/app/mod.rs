mod access_map_app;
mod access_map_app_error;
mod calculate;
mod compare;
mod file_routing_oracle;
mod fs;
mod kdam_progress;

pub use access_map_app::{AccessMapApp, AccessMapOperation};
pub use access_map_app_error::AccessMapAppError;
pub use file_routing_oracle::FileRoutingOracle;
pub use kdam_progress::KdamProgress;
