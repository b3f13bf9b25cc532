use super::{PoiCategoryCounts, PolygonArea};
use crate::model::DurationBand;
use serde_json::{json, Map, Value};

/// properties of one accessibility polygon. the fixed fields are typed; the
/// echoed request attributes and caller-supplied additional properties are
/// open-ended maps merged in when the properties are rendered.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct IsochroneProperties {
    pub duration_seconds: u32,
    pub duration_minutes: u32,
    pub area: PolygonArea,
    pub color: Option<String>,
    pub poi_counts: Option<PoiCategoryCounts>,
    pub request_attributes: Map<String, Value>,
    pub additional_properties: Map<String, Value>,
}

impl IsochroneProperties {
    pub fn new(
        band: &DurationBand,
        area: PolygonArea,
        color: Option<String>,
        request_attributes: Map<String, Value>,
        additional_properties: Map<String, Value>,
    ) -> IsochroneProperties {
        IsochroneProperties {
            duration_seconds: band.seconds,
            duration_minutes: band.minutes(),
            area,
            color,
            poi_counts: None,
            request_attributes,
            additional_properties,
        }
    }

    pub fn with_poi_counts(self, poi_counts: PoiCategoryCounts) -> IsochroneProperties {
        IsochroneProperties {
            poi_counts: Some(poi_counts),
            ..self
        }
    }

    /// the flat property object of a polygon feature. later entries overwrite
    /// earlier ones: computed values, then request attributes, then the
    /// additional properties, then the place counts.
    pub fn to_json_map(&self) -> Map<String, Value> {
        let mut props = Map::new();
        props.insert(String::from("durationSeconds"), json![self.duration_seconds]);
        props.insert(String::from("durationMinutes"), json![self.duration_minutes]);
        self.area.insert_into(&mut props);
        for (k, v) in self.request_attributes.iter() {
            props.insert(k.clone(), v.clone());
        }
        // the polygon color wins over the echoed request color
        if let Some(color) = &self.color {
            props.insert(String::from("color"), json![color]);
        }
        for (k, v) in self.additional_properties.iter() {
            props.insert(k.clone(), v.clone());
        }
        if let Some(counts) = &self.poi_counts {
            props.insert(
                String::from("accessiblePlacesCountByCategory"),
                json![counts.by_category],
            );
            props.insert(
                String::from("accessiblePlacesCountByDetailedCategory"),
                json![counts.by_detailed_category],
            );
            for (k, count) in counts.flattened() {
                props.insert(k, json![count]);
            }
        }
        props
    }
}
