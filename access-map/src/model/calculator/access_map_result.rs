use access_map_core::model::{
    AccessMapParameters, DurationBand, IsochronePolygon, NodeReachabilityResult, TravelTimesByNode,
};
use access_map_core::util::geojson_conversion::feature_collection;

/// reachability of every node over all sampled times, before any geometry
/// is built.
#[derive(Clone, Debug, PartialEq)]
pub struct AccessMapResult {
    pub parameters: AccessMapParameters,
    pub result: TravelTimesByNode,
    /// largest first
    pub durations: Vec<DurationBand>,
    pub sample_count: usize,
    pub canonical_routing_result: Option<NodeReachabilityResult>,
}

/// the accessibility polygons of a calculation, one per band, largest band
/// first.
#[derive(Clone, Debug, PartialEq)]
pub struct AccessMapWithPolygonResult {
    pub polygons: Vec<IsochronePolygon>,
    pub result_by_node: Option<NodeReachabilityResult>,
}

impl AccessMapWithPolygonResult {
    pub fn polygons_collection(&self) -> geojson::FeatureCollection {
        feature_collection(self.polygons.iter().map(|p| p.to_feature()).collect())
    }

    pub fn strokes_collection(&self) -> geojson::FeatureCollection {
        feature_collection(self.polygons.iter().map(|p| p.to_stroke_feature()).collect())
    }
}
