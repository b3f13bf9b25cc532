use super::CancellationToken;
use access_map_core::model::{
    AccessMapError, AccessMapParameters, NodeReachabilityResult, TimeOfTripType,
};
use async_trait::async_trait;
use geo::Point;
use serde::{Deserialize, Serialize};

/// a single accessibility query sent to the routing oracle, for one sampled
/// time of trip.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccessMapQuery {
    pub min_waiting_time: u32,
    pub max_access_travel_time: u32,
    pub max_egress_travel_time: u32,
    pub max_transfer_travel_time: u32,
    pub scenario_id: Option<String>,
    pub max_travel_time: u32,
    pub location: Point<f64>,
    pub time_of_trip: u32,
    pub time_of_trip_type: TimeOfTripType,
}

impl AccessMapQuery {
    pub fn new(
        params: &AccessMapParameters,
        time_of_trip: u32,
        max_travel_time: u32,
    ) -> AccessMapQuery {
        AccessMapQuery {
            min_waiting_time: params.min_waiting_time_seconds,
            max_access_travel_time: params.max_access_egress_travel_time_seconds,
            max_egress_travel_time: params.max_access_egress_travel_time_seconds,
            max_transfer_travel_time: params.max_transfer_travel_time_seconds,
            scenario_id: params.scenario_id.clone(),
            max_travel_time,
            location: params.location,
            time_of_trip,
            time_of_trip_type: params.time_of_trip.trip_type(),
        }
    }
}

/// options passed through to the routing oracle with every query.
#[derive(Clone, Debug, Default)]
pub struct RoutingOptions {
    pub cancellation: CancellationToken,
}

/// answers which nodes are reachable, and in how much time, from a location
/// at some time of trip.
#[async_trait]
pub trait RoutingOracle: Send + Sync {
    async fn accessible_map(
        &self,
        query: &AccessMapQuery,
        options: &RoutingOptions,
    ) -> Result<NodeReachabilityResult, AccessMapError>;
}
