use access_map_core::model::{AccessMapError, PoiCategoryCounts};
use async_trait::async_trait;
use geo::MultiPolygon;

/// counts the places of interest inside a polygon.
#[async_trait]
pub trait PoiCounter: Send + Sync {
    async fn counts_in_polygon(
        &self,
        polygon: &MultiPolygon<f64>,
    ) -> Result<PoiCategoryCounts, AccessMapError>;
}
