use access_map_core::model::{AccessMapError, WeightedCircle};
use async_trait::async_trait;
use geo::MultiPolygon;

/// merges weighted circles into a single multipolygon. an empty circle list
/// yields an empty multipolygon, and identical input must give identical
/// output.
#[async_trait]
pub trait SpatialEngine: Send + Sync {
    async fn clip_polygon(
        &self,
        circles: &[WeightedCircle],
    ) -> Result<MultiPolygon<f64>, AccessMapError>;
}
