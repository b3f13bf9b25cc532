use crate::model::collaborator::{
    AccessMapQuery, CancellationToken, NodeCollection, NodeStore, PoiCounter, ProgressSink,
    RoutingOptions, RoutingOracle, SpatialEngine,
};
use crate::model::engine::{GeoSpatialEngine, SpatialEngineConfig};
use access_map_core::model::{
    AccessMapError, AccessMapParameters, AccessMapRequest, NodeId, NodeReachabilityResult,
    NodeTravelTime, PoiCategoryCounts, WeightedCircle,
};
use async_trait::async_trait;
use geo::{MultiPolygon, Point};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

pub const ORIGIN: (f64, f64) = (-73.6, 45.5);

pub fn request(departure: u32, delta: u32, total: u32, polygons: usize) -> AccessMapRequest {
    AccessMapRequest {
        departure_time_seconds_since_midnight: Some(departure),
        delta_seconds: Some(delta),
        max_total_travel_time_seconds: Some(total),
        number_of_polygons: Some(polygons),
        ..AccessMapRequest::at_location(ORIGIN.0, ORIGIN.1)
    }
}

pub fn request_params(
    departure: u32,
    delta: u32,
    total: u32,
    polygons: usize,
) -> AccessMapParameters {
    AccessMapParameters::try_from(&request(departure, delta, total, polygons)).unwrap()
}

#[derive(Default)]
pub struct MockRoutingOracle {
    responses: HashMap<u32, Vec<NodeTravelTime>>,
    default_response: Vec<NodeTravelTime>,
    failures: HashSet<u32>,
    queries: Mutex<Vec<AccessMapQuery>>,
}

impl MockRoutingOracle {
    pub fn fail_at(mut self, time_of_trip: u32) -> Self {
        self.failures.insert(time_of_trip);
        self
    }

    pub fn respond_at(mut self, time_of_trip: u32, nodes: Vec<NodeTravelTime>) -> Self {
        self.responses.insert(time_of_trip, nodes);
        self
    }

    pub fn respond_always(mut self, nodes: Vec<NodeTravelTime>) -> Self {
        self.default_response = nodes;
        self
    }

    pub fn queries(&self) -> Vec<AccessMapQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl RoutingOracle for MockRoutingOracle {
    async fn accessible_map(
        &self,
        query: &AccessMapQuery,
        _options: &RoutingOptions,
    ) -> Result<NodeReachabilityResult, AccessMapError> {
        self.queries.lock().unwrap().push(query.clone());
        if self.failures.contains(&query.time_of_trip) {
            return Err(AccessMapError::CalculationFailed(String::from("no service")));
        }
        let nodes = self
            .responses
            .get(&query.time_of_trip)
            .unwrap_or(&self.default_response)
            .clone();
        Ok(NodeReachabilityResult::new(nodes))
    }
}

#[derive(Default)]
pub struct MockNodeStore {
    nodes: NodeCollection,
    calls: Mutex<usize>,
}

impl MockNodeStore {
    pub fn new(nodes: &[(&str, f64, f64)]) -> MockNodeStore {
        MockNodeStore {
            nodes: nodes
                .iter()
                .map(|(id, x, y)| (NodeId::from(*id), Point::new(*x, *y)))
                .collect(),
            calls: Mutex::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl NodeStore for MockNodeStore {
    async fn geojson_collection(
        &self,
        node_ids: &[NodeId],
    ) -> Result<NodeCollection, AccessMapError> {
        *self.calls.lock().unwrap() += 1;
        Ok(node_ids
            .iter()
            .filter_map(|id| self.nodes.get(id).map(|p| (id.clone(), *p)))
            .collect())
    }
}

/// a real engine that records every call, and can cancel a token once a
/// given number of calls were made.
pub struct RecordingSpatialEngine {
    engine: GeoSpatialEngine,
    calls: Mutex<Vec<Vec<WeightedCircle>>>,
    cancel_after: Option<(usize, CancellationToken)>,
    fail: bool,
}

impl Default for RecordingSpatialEngine {
    fn default() -> Self {
        let config = SpatialEngineConfig {
            segments_per_circle: Some(16),
        };
        RecordingSpatialEngine {
            engine: GeoSpatialEngine::try_from(&config).unwrap(),
            calls: Mutex::new(vec![]),
            cancel_after: None,
            fail: false,
        }
    }
}

impl RecordingSpatialEngine {
    pub fn cancelling_after(calls: usize, token: CancellationToken) -> Self {
        RecordingSpatialEngine {
            cancel_after: Some((calls, token)),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        RecordingSpatialEngine {
            fail: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<Vec<WeightedCircle>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SpatialEngine for RecordingSpatialEngine {
    async fn clip_polygon(
        &self,
        circles: &[WeightedCircle],
    ) -> Result<MultiPolygon<f64>, AccessMapError> {
        let count = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(circles.to_vec());
            calls.len()
        };
        if let Some((after, token)) = &self.cancel_after {
            if count >= *after {
                token.cancel();
            }
        }
        if self.fail {
            return Err(AccessMapError::SpatialEngineFailed(String::from("database unavailable")));
        }
        self.engine.clip_polygon(circles).await
    }
}

pub struct FixedPoiCounter;

#[async_trait]
impl PoiCounter for FixedPoiCounter {
    async fn counts_in_polygon(
        &self,
        _polygon: &MultiPolygon<f64>,
    ) -> Result<PoiCategoryCounts, AccessMapError> {
        let mut counts = PoiCategoryCounts::default();
        counts.by_category.insert(String::from("food"), 3);
        counts.by_detailed_category.insert(String::from("cafe"), 2);
        Ok(counts)
    }
}

#[derive(Default)]
pub struct RecordingProgress {
    events: Mutex<Vec<(String, f64)>>,
}

impl RecordingProgress {
    pub fn events(&self) -> Vec<(String, f64)> {
        self.events.lock().unwrap().clone()
    }
}

impl ProgressSink for RecordingProgress {
    fn emit(&self, name: &str, progress: f64) {
        self.events.lock().unwrap().push((String::from(name), progress));
    }
}
