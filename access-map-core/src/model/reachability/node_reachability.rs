use super::NodeId;
use serde::{Deserialize, Serialize};

/// a node reached by the routing oracle from the query location.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NodeTravelTime {
    pub id: NodeId,
    pub total_travel_time_seconds: u32,
    #[serde(default)]
    pub number_of_transfers: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_time_seconds: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_time_seconds: Option<u32>,
}

impl NodeTravelTime {
    pub fn new(id: &str, total_travel_time_seconds: u32) -> NodeTravelTime {
        NodeTravelTime {
            id: NodeId::from(id),
            total_travel_time_seconds,
            number_of_transfers: 0,
            departure_time_seconds: None,
            arrival_time_seconds: None,
        }
    }
}

/// the answer of the routing oracle to a single accessibility query.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct NodeReachabilityResult {
    pub nodes: Vec<NodeTravelTime>,
}

impl NodeReachabilityResult {
    pub fn new(nodes: Vec<NodeTravelTime>) -> NodeReachabilityResult {
        NodeReachabilityResult { nodes }
    }
}
