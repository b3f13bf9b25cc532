use crate::model::collaborator::SpatialEngine;
use access_map_core::model::{AccessMapError, WeightedCircle};
use async_trait::async_trait;
use geo::{Destination, Haversine, LineString, MultiPolygon, Point, Polygon};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SEGMENTS_PER_CIRCLE: usize = 64;
const MIN_SEGMENTS_PER_CIRCLE: usize = 3;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct SpatialEngineConfig {
    /// number of points placed along each circle
    pub segments_per_circle: Option<usize>,
}

/// an in-process spatial engine. each weighted circle is approximated by a
/// polygon whose vertices are placed on the sphere at the circle radius, and
/// all circle polygons are merged with a unary union.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeoSpatialEngine {
    segments_per_circle: usize,
}

impl Default for GeoSpatialEngine {
    fn default() -> Self {
        GeoSpatialEngine {
            segments_per_circle: DEFAULT_SEGMENTS_PER_CIRCLE,
        }
    }
}

impl TryFrom<&SpatialEngineConfig> for GeoSpatialEngine {
    type Error = AccessMapError;

    fn try_from(config: &SpatialEngineConfig) -> Result<Self, Self::Error> {
        let segments_per_circle = config
            .segments_per_circle
            .unwrap_or(DEFAULT_SEGMENTS_PER_CIRCLE);
        if segments_per_circle < MIN_SEGMENTS_PER_CIRCLE {
            return Err(AccessMapError::InvalidRequest(format!(
                "segments_per_circle must be at least {MIN_SEGMENTS_PER_CIRCLE}, found {segments_per_circle}"
            )));
        }
        Ok(GeoSpatialEngine {
            segments_per_circle,
        })
    }
}

impl GeoSpatialEngine {
    pub fn segments_per_circle(&self) -> usize {
        self.segments_per_circle
    }

    pub fn circle_polygon(&self, circle: &WeightedCircle) -> Polygon<f64> {
        let radius_meters = circle.radius().get::<uom::si::length::meter>();
        create_circle(&circle.center_point(), radius_meters, self.segments_per_circle)
    }
}

#[async_trait]
impl SpatialEngine for GeoSpatialEngine {
    async fn clip_polygon(
        &self,
        circles: &[WeightedCircle],
    ) -> Result<MultiPolygon<f64>, AccessMapError> {
        let polygons: Vec<Polygon<f64>> = circles
            .iter()
            .filter(|c| c.radius_km.is_finite() && c.radius_km > 0.0)
            .map(|c| self.circle_polygon(c))
            .collect();
        if polygons.is_empty() {
            return Ok(MultiPolygon::new(vec![]));
        }
        Ok(geo::unary_union(polygons.iter()))
    }
}

/// a closed ring of `resolution` points at `radius` meters from `point`,
/// walking bearings clockwise from north.
fn create_circle(point: &Point<f64>, radius: f64, resolution: usize) -> Polygon<f64> {
    let mut coordinates: Vec<(f64, f64)> = Vec::with_capacity(resolution + 1);
    for i in 0..resolution {
        let bearing = i as f64 * 360.0 / resolution as f64;
        let dest = Haversine.destination(*point, bearing, radius);
        coordinates.push((dest.x(), dest.y()));
    }
    if let Some(first) = coordinates.first().copied() {
        coordinates.push(first);
    }
    Polygon::new(LineString::from(coordinates), vec![])
}

#[cfg(test)]
mod test {
    use super::*;
    use geo::{Contains, Distance, Intersects};

    fn circle(lon: f64, lat: f64, radius_km: f64) -> WeightedCircle {
        WeightedCircle {
            center: [lon, lat],
            radius_km,
        }
    }

    #[test]
    fn test_no_circles_gives_empty() {
        let engine = GeoSpatialEngine::default();
        let result = futures::executor::block_on(engine.clip_polygon(&[])).unwrap();
        assert!(result.0.is_empty());
    }

    #[test]
    fn test_circle_vertices_on_radius() {
        let engine = GeoSpatialEngine::default();
        let c = circle(-73.6, 45.5, 1.0);
        let polygon = engine.circle_polygon(&c);
        assert!(polygon.exterior().is_closed());
        assert_eq!(polygon.exterior().0.len(), DEFAULT_SEGMENTS_PER_CIRCLE + 1);
        for coord in polygon.exterior().coords() {
            let d = Haversine.distance(c.center_point(), Point::from(*coord));
            assert!((d - 1000.0).abs() < 1e-3, "distance was {d}");
        }
    }

    #[test]
    fn test_overlapping_circles_merge() {
        let engine = GeoSpatialEngine::default();
        let circles = [circle(-73.6, 45.5, 1.0), circle(-73.59, 45.5, 1.0)];
        let result = futures::executor::block_on(engine.clip_polygon(&circles)).unwrap();
        assert_eq!(result.0.len(), 1);
        assert!(result.contains(&Point::new(-73.6, 45.5)));
        assert!(result.contains(&Point::new(-73.59, 45.5)));
    }

    #[test]
    fn test_disjoint_circles_stay_apart() {
        let engine = GeoSpatialEngine::default();
        let circles = [circle(-73.6, 45.5, 0.5), circle(-73.0, 45.5, 0.5)];
        let result = futures::executor::block_on(engine.clip_polygon(&circles)).unwrap();
        assert_eq!(result.0.len(), 2);
        assert!(!result.0[0].intersects(&result.0[1]));
    }

    #[test]
    fn test_zero_radius_circles_are_ignored() {
        let engine = GeoSpatialEngine::default();
        let circles = [circle(-73.6, 45.5, 0.0)];
        let result = futures::executor::block_on(engine.clip_polygon(&circles)).unwrap();
        assert!(result.0.is_empty());
    }

    #[test]
    fn test_repeatable_output() {
        let engine = GeoSpatialEngine::default();
        let circles = [circle(-73.6, 45.5, 1.0), circle(-73.59, 45.51, 0.7)];
        let a = futures::executor::block_on(engine.clip_polygon(&circles)).unwrap();
        let b = futures::executor::block_on(engine.clip_polygon(&circles)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_config_validation() {
        let too_few = SpatialEngineConfig {
            segments_per_circle: Some(2),
        };
        assert!(GeoSpatialEngine::try_from(&too_few).is_err());
        let engine = GeoSpatialEngine::try_from(&SpatialEngineConfig::default()).unwrap();
        assert_eq!(engine.segments_per_circle(), DEFAULT_SEGMENTS_PER_CIRCLE);
    }
}
