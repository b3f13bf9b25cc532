mod cancellation;
mod node_store;
mod poi_counter;
mod progress_sink;
mod routing_oracle;
mod spatial_engine;

pub use cancellation::CancellationToken;
pub use node_store::{NodeCollection, NodeStore};
pub use poi_counter::PoiCounter;
pub use progress_sink::{LogProgress, ProgressSink};
pub use routing_oracle::{AccessMapQuery, RoutingOptions, RoutingOracle};
pub use spatial_engine::SpatialEngine;
