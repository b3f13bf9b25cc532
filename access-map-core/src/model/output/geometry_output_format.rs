use crate::model::{AccessMapError, IsochronePolygon};
use geo::Geometry;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use wkt::ToWkt;

/// how polygon geometries are written out by the command line tool.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GeometryOutputFormat {
    Wkt,
    Wkb,
    #[default]
    GeoJson,
}

impl GeometryOutputFormat {
    pub fn serialize_geometry(&self, geometry: &Geometry<f64>) -> Result<String, AccessMapError> {
        match self {
            GeometryOutputFormat::Wkt => Ok(geometry.wkt_string()),
            GeometryOutputFormat::Wkb => {
                let mut out_bytes = vec![];
                let write_options = wkb::writer::WriteOptions {
                    endianness: wkb::Endianness::BigEndian,
                };
                wkb::writer::write_geometry(&mut out_bytes, geometry, &write_options).map_err(
                    |e| {
                        AccessMapError::OutputFormat(format!(
                            "failed to write geometry as WKB: {e}"
                        ))
                    },
                )?;
                Ok(hex::encode_upper(out_bytes))
            }
            GeometryOutputFormat::GeoJson => {
                let geometry = geojson::Geometry::from(geometry);
                serde_json::to_string(&geometry).map_err(|e| {
                    AccessMapError::OutputFormat(format!(
                        "failed to write geometry as GeoJSON: {e}"
                    ))
                })
            }
        }
    }

    /// one flat output record for a polygon: its properties with the encoded
    /// geometry under `geometry`.
    pub fn serialize_polygon(&self, polygon: &IsochronePolygon) -> Result<Value, AccessMapError> {
        let mut props = polygon.properties.to_json_map();
        let geometry = Geometry::MultiPolygon(polygon.geometry.clone());
        props.insert(String::from("geometry"), json![self.serialize_geometry(&geometry)?]);
        Ok(Value::Object(props))
    }
}
