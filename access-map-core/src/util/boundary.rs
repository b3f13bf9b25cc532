use super::geojson_conversion::{feature_multipolygon, multilinestring_feature};
use crate::model::AccessMapError;
use geo::{LineString, MultiLineString, MultiPolygon};

/// the boundary of a multipolygon as lines, one per ring. for each polygon,
/// its holes are emitted first as separate lines and the exterior ring last,
/// so holes are never merged into the outer boundary.
pub fn polygon_strokes(geometry: &MultiPolygon<f64>) -> MultiLineString<f64> {
    let lines: Vec<LineString<f64>> = geometry
        .iter()
        .filter(|p| !p.exterior().0.is_empty())
        .flat_map(|p| {
            p.interiors()
                .iter()
                .chain(std::iter::once(p.exterior()))
                .cloned()
        })
        .collect();
    MultiLineString::new(lines)
}

/// converts a filled polygon feature into its stroke feature, keeping the
/// source feature's properties.
pub fn stroke_feature(feature: &geojson::Feature) -> Result<geojson::Feature, AccessMapError> {
    let geometry = feature_multipolygon(feature)?;
    let properties = feature.properties.clone().unwrap_or_default();
    Ok(multilinestring_feature(&polygon_strokes(&geometry), properties))
}
