use geo::{ChamberlainDuquetteArea, MultiPolygon};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

pub const SQ_KM_PER_SQ_MILE: f64 = 2.58999;

/// geodesic area of a polygon expressed in the three units reported on
/// accessibility polygons.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PolygonArea {
    pub area_sq_m: f64,
    pub area_sq_km: f64,
    pub area_sq_miles: f64,
}

impl PolygonArea {
    pub fn from_sq_m(area_sq_m: f64) -> PolygonArea {
        let area_sq_km = area_sq_m / 1_000_000.0;
        PolygonArea {
            area_sq_m,
            area_sq_km,
            area_sq_miles: area_sq_km / SQ_KM_PER_SQ_MILE,
        }
    }

    /// area on the sphere of a WGS84 multipolygon, holes removed
    pub fn of(geometry: &MultiPolygon<f64>) -> PolygonArea {
        PolygonArea::from_sq_m(geometry.chamberlain_duquette_unsigned_area())
    }

    pub fn insert_into(&self, properties: &mut Map<String, Value>) {
        properties.insert(String::from("areaSqM"), json![self.area_sq_m]);
        properties.insert(String::from("areaSqKm"), json![self.area_sq_km]);
        properties.insert(String::from("areaSqMiles"), json![self.area_sq_miles]);
    }
}
