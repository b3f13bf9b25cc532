use crate::model::AccessMapError;
use geo::{Geometry, MultiLineString, MultiPolygon};
use serde_json::{Map, Value};

/// reads the (multi)polygon geometry of a feature. polygon features are
/// promoted to a single-member multipolygon and a feature without geometry
/// is read as an empty multipolygon.
pub fn feature_multipolygon(
    feature: &geojson::Feature,
) -> Result<MultiPolygon<f64>, AccessMapError> {
    let value = match feature.geometry.as_ref() {
        None => return Ok(MultiPolygon::new(vec![])),
        Some(g) => g.value.clone(),
    };
    let geometry = Geometry::<f64>::try_from(value).map_err(|e| {
        AccessMapError::GeometryError(format!("failure reading feature geometry: {e}"))
    })?;
    match geometry {
        Geometry::Polygon(p) => Ok(MultiPolygon::new(vec![p])),
        Geometry::MultiPolygon(mp) => Ok(mp),
        other => Err(AccessMapError::GeometryError(format!(
            "expected a polygon or multipolygon feature, found {other:?}"
        ))),
    }
}

pub fn multipolygon_feature(
    geometry: &MultiPolygon<f64>,
    properties: Map<String, Value>,
) -> geojson::Feature {
    feature(geojson::Value::from(geometry), properties)
}

pub fn multilinestring_feature(
    geometry: &MultiLineString<f64>,
    properties: Map<String, Value>,
) -> geojson::Feature {
    feature(geojson::Value::from(geometry), properties)
}

pub fn feature_collection(features: Vec<geojson::Feature>) -> geojson::FeatureCollection {
    geojson::FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

fn feature(value: geojson::Value, properties: Map<String, Value>) -> geojson::Feature {
    geojson::Feature {
        bbox: None,
        geometry: Some(geojson::Geometry::new(value)),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}
