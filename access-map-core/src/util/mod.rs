pub mod boundary;
pub mod geojson_conversion;
