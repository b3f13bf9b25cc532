use super::IsochroneProperties;
use crate::model::DurationBand;
use crate::util::boundary::polygon_strokes;
use crate::util::geojson_conversion::{multilinestring_feature, multipolygon_feature};
use geo::{MultiLineString, MultiPolygon};

/// the accessibility polygon of one duration band.
#[derive(Clone, Debug, PartialEq)]
pub struct IsochronePolygon {
    pub band: DurationBand,
    pub geometry: MultiPolygon<f64>,
    pub properties: IsochroneProperties,
}

impl IsochronePolygon {
    pub fn new(
        band: DurationBand,
        geometry: MultiPolygon<f64>,
        properties: IsochroneProperties,
    ) -> IsochronePolygon {
        IsochronePolygon {
            band,
            geometry,
            properties,
        }
    }

    pub fn stroke(&self) -> MultiLineString<f64> {
        polygon_strokes(&self.geometry)
    }

    pub fn to_feature(&self) -> geojson::Feature {
        multipolygon_feature(&self.geometry, self.properties.to_json_map())
    }

    pub fn to_stroke_feature(&self) -> geojson::Feature {
        multilinestring_feature(&self.stroke(), self.properties.to_json_map())
    }
}
