mod node_id;
mod node_reachability;
mod travel_times_by_node;

pub use node_id::NodeId;
pub use node_reachability::{NodeReachabilityResult, NodeTravelTime};
pub use travel_times_by_node::{average_remaining_seconds, TravelTimesByNode};
