use crate::model::collaborator::PoiCounter;
use access_map_core::model::{AccessMapError, PoiCategoryCounts};
use async_trait::async_trait;
use geo::{Contains, MultiPolygon, Point};

#[derive(Clone, Debug, PartialEq)]
pub struct Place {
    pub location: Point<f64>,
    pub category: Option<String>,
    pub detailed_category: Option<String>,
}

/// counts places held in memory, loaded from GeoJSON point features with
/// `category` and `detailed_category` properties.
#[derive(Clone, Debug, Default)]
pub struct GeoJsonPoiCounter {
    places: Vec<Place>,
}

impl GeoJsonPoiCounter {
    pub fn new(places: Vec<Place>) -> GeoJsonPoiCounter {
        GeoJsonPoiCounter { places }
    }
}

impl TryFrom<&geojson::FeatureCollection> for GeoJsonPoiCounter {
    type Error = AccessMapError;

    fn try_from(collection: &geojson::FeatureCollection) -> Result<Self, Self::Error> {
        let places = collection
            .features
            .iter()
            .enumerate()
            .map(|(idx, feature)| {
                let location = match feature.geometry.as_ref().map(|g| &g.value) {
                    Some(geojson::Value::Point(p)) if p.len() >= 2 => Ok(Point::new(p[0], p[1])),
                    _ => Err(AccessMapError::PoiCountFailed(format!(
                        "place {idx} does not have a point geometry"
                    ))),
                }?;
                let property = |key: &str| {
                    feature
                        .property(key)
                        .and_then(|v| v.as_str())
                        .map(String::from)
                };
                Ok(Place {
                    location,
                    category: property("category"),
                    detailed_category: property("detailed_category"),
                })
            })
            .collect::<Result<Vec<_>, AccessMapError>>()?;
        Ok(GeoJsonPoiCounter { places })
    }
}

#[async_trait]
impl PoiCounter for GeoJsonPoiCounter {
    async fn counts_in_polygon(
        &self,
        polygon: &MultiPolygon<f64>,
    ) -> Result<PoiCategoryCounts, AccessMapError> {
        let mut counts = PoiCategoryCounts::default();
        for place in self.places.iter().filter(|p| polygon.contains(&p.location)) {
            if let Some(category) = &place.category {
                *counts.by_category.entry(category.clone()).or_default() += 1;
            }
            if let Some(detailed) = &place.detailed_category {
                *counts
                    .by_detailed_category
                    .entry(detailed.clone())
                    .or_default() += 1;
            }
        }
        Ok(counts)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use geo::polygon;

    fn place(x: f64, y: f64, category: &str, detailed: &str) -> Place {
        Place {
            location: Point::new(x, y),
            category: Some(String::from(category)),
            detailed_category: Some(String::from(detailed)),
        }
    }

    #[test]
    fn test_counts_only_places_inside() {
        let counter = GeoJsonPoiCounter::new(vec![
            place(0.5, 0.5, "food", "cafe"),
            place(0.2, 0.8, "food", "restaurant"),
            place(0.3, 0.3, "education", "school"),
            place(5.0, 5.0, "food", "cafe"),
        ]);
        let square = polygon![
            (x: 0.0, y: 0.0),
            (x: 1.0, y: 0.0),
            (x: 1.0, y: 1.0),
            (x: 0.0, y: 1.0),
            (x: 0.0, y: 0.0),
        ];
        let counts =
            futures::executor::block_on(counter.counts_in_polygon(&MultiPolygon::new(vec![square])))
                .unwrap();
        assert_eq!(counts.by_category.get("food"), Some(&2));
        assert_eq!(counts.by_category.get("education"), Some(&1));
        assert_eq!(counts.by_detailed_category.get("cafe"), Some(&1));
        assert_eq!(counts.by_detailed_category.get("restaurant"), Some(&1));
    }
}
