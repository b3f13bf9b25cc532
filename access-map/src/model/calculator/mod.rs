mod access_map_calculator;
mod access_map_result;
mod calculation_options;
pub mod comparator;
mod polygon_builder;
pub mod routing_orchestrator;
#[cfg(test)]
mod test_support;

pub use access_map_calculator::AccessMapCalculator;
pub use access_map_result::{AccessMapResult, AccessMapWithPolygonResult};
pub use calculation_options::CalculationOptions;
pub use polygon_builder::{band_circles, IsochronePolygonBuilder, POLYGON_GENERATION_PROGRESS};
pub use routing_orchestrator::RoutingOutcome;
