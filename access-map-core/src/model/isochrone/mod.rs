mod isochrone_polygon;
mod isochrone_properties;
mod poi_counts;
mod polygon_area;

pub use isochrone_polygon::IsochronePolygon;
pub use isochrone_properties::IsochroneProperties;
pub use poi_counts::{PoiCategoryCounts, CATEGORY_PREFIX, DETAILED_CATEGORY_PREFIX};
pub use polygon_area::{PolygonArea, SQ_KM_PER_SQ_MILE};
