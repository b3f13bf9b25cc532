mod geo_spatial_engine;
mod geojson_node_store;
mod geojson_poi_counter;

pub use geo_spatial_engine::{GeoSpatialEngine, SpatialEngineConfig, DEFAULT_SEGMENTS_PER_CIRCLE};
pub use geojson_node_store::GeoJsonNodeStore;
pub use geojson_poi_counter::{GeoJsonPoiCounter, Place};
