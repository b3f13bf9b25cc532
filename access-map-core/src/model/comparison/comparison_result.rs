use serde::{Deserialize, Serialize};

/// the output of one set operation between two polygons: the resulting
/// polygon features and their strokes. both are empty when the operation
/// produced no area.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct MapSetOperationResult {
    pub polygons: Vec<geojson::Feature>,
    pub strokes: Vec<geojson::Feature>,
}

impl MapSetOperationResult {
    pub fn empty() -> MapSetOperationResult {
        MapSetOperationResult::default()
    }

    pub fn single(polygon: geojson::Feature, stroke: geojson::Feature) -> MapSetOperationResult {
        MapSetOperationResult {
            polygons: vec![polygon],
            strokes: vec![stroke],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }
}

/// comparison of the polygons of one band between two scenarios.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    /// position of the band in both polygon sets
    pub band_index: usize,
    pub intersection: MapSetOperationResult,
    pub scenario1_minus_2: MapSetOperationResult,
    pub scenario2_minus_1: MapSetOperationResult,
}
