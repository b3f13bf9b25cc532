use serde::{Deserialize, Serialize};

/// a partial accessibility map request as submitted by a user. every field
/// may be missing; see [`super::AccessMapParameters`] for the defaulted form.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct AccessMapRequest {
    /// GeoJSON point feature of the origin (or destination, for arrival times)
    pub location_geojson: Option<geojson::Feature>,
    pub departure_time_seconds_since_midnight: Option<u32>,
    pub arrival_time_seconds_since_midnight: Option<u32>,
    pub max_total_travel_time_seconds: Option<u32>,
    pub number_of_polygons: Option<usize>,
    pub delta_seconds: Option<u32>,
    pub delta_interval_seconds: Option<u32>,
    pub min_waiting_time_seconds: Option<u32>,
    pub max_access_egress_travel_time_seconds: Option<u32>,
    pub max_transfer_travel_time_seconds: Option<u32>,
    pub walking_speed_mps: Option<f64>,
    pub walking_speed_factor: Option<f64>,
    pub scenario_id: Option<String>,
    pub location_color: Option<String>,
    pub color: Option<String>,
    pub place_name: Option<String>,
    pub calculate_pois: Option<bool>,
}

impl AccessMapRequest {
    /// a request at a point location, everything else left to defaults.
    pub fn at_location(lon: f64, lat: f64) -> AccessMapRequest {
        let geometry = geojson::Geometry::new(geojson::Value::Point(vec![lon, lat]));
        AccessMapRequest {
            location_geojson: Some(geojson::Feature {
                bbox: None,
                geometry: Some(geometry),
                id: None,
                properties: None,
                foreign_members: None,
            }),
            ..Default::default()
        }
    }
}
