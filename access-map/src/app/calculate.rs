use super::fs::{read_json, write_json};
use super::{AccessMapAppError, FileRoutingOracle, KdamProgress};
use crate::model::calculator::{AccessMapCalculator, AccessMapWithPolygonResult, CalculationOptions};
use crate::model::engine::{
    GeoJsonNodeStore, GeoJsonPoiCounter, GeoSpatialEngine, SpatialEngineConfig,
};
use access_map_core::model::{AccessMapRequest, GeometryOutputFormat};
use config::{Config, File};
use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

/// runs one accessibility map calculation described by a configuration file.
pub fn run(configuration_file: &str, output_file: Option<&Path>) -> Result<(), AccessMapAppError> {
    let start = Instant::now();
    let filepath = Path::new(configuration_file);
    let config = Config::builder()
        .add_source(File::from(filepath))
        .build()
        .map_err(|e| {
            let msg = format!("file '{configuration_file}' produced error: {e}");
            AccessMapAppError::InvalidUserInput(msg)
        })?;

    let request_value: Value = get_key(&config, "request", configuration_file)?;
    let request: AccessMapRequest = serde_json::from_value(request_value).map_err(|e| {
        AccessMapAppError::InvalidUserInput(format!(
            "invalid 'request' in '{configuration_file}': {e}"
        ))
    })?;
    let routing_results_file: String =
        get_key(&config, "routing_results_file", configuration_file)?;
    let nodes_file: String = get_key(&config, "nodes_file", configuration_file)?;
    let places_file: Option<String> = get_key(&config, "places_file", configuration_file)?;
    let spatial_engine_config: Option<SpatialEngineConfig> =
        get_key(&config, "spatial_engine", configuration_file)?;
    let output_format: Option<GeometryOutputFormat> =
        get_key(&config, "output_format", configuration_file)?;
    let additional_properties: Option<Map<String, Value>> =
        get_key(&config, "additional_properties", configuration_file)?;

    let oracle = FileRoutingOracle::from_file(Path::new(&routing_results_file))?;
    let nodes: geojson::FeatureCollection = read_json(Path::new(&nodes_file))?;
    let node_store = GeoJsonNodeStore::try_from(&nodes)?;
    let spatial_engine = GeoSpatialEngine::try_from(&spatial_engine_config.unwrap_or_default())?;
    let progress =
        KdamProgress::new("accessibility map").map_err(AccessMapAppError::InvalidUserInput)?;
    let mut calculator = AccessMapCalculator::new(
        Arc::new(oracle),
        Arc::new(node_store),
        Arc::new(spatial_engine),
    )
    .with_progress_sink(Arc::new(progress));
    if let Some(places_file) = places_file {
        let places: geojson::FeatureCollection = read_json(Path::new(&places_file))?;
        calculator = calculator.with_poi_counter(Arc::new(GeoJsonPoiCounter::try_from(&places)?));
    }
    let options = CalculationOptions {
        additional_properties: additional_properties.unwrap_or_default(),
        ..Default::default()
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| {
            AccessMapAppError::TokioError(format!("failure creating async rust tokio runtime: {e}"))
        })?;
    let result = runtime.block_on(calculator.calculate_with_polygons(&request, &options))?;
    eprintln!();

    let output = serialize_result(&result, &output_format.unwrap_or_default())?;
    write_json(&output, output_file)?;
    log::info!("accessibility map finished in {:?}", start.elapsed());
    Ok(())
}

/// GeoJSON output holds the polygon and stroke feature collections, other
/// formats give one record per polygon.
fn serialize_result(
    result: &AccessMapWithPolygonResult,
    format: &GeometryOutputFormat,
) -> Result<Value, AccessMapAppError> {
    match format {
        GeometryOutputFormat::GeoJson => Ok(json!({
            "polygons": result.polygons_collection(),
            "strokes": result.strokes_collection(),
            "resultByNode": result.result_by_node,
        })),
        _ => {
            let rows = result
                .polygons
                .iter()
                .map(|p| format.serialize_polygon(p))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Value::Array(rows))
        }
    }
}

fn get_key<T: DeserializeOwned>(
    config: &Config,
    key: &str,
    filename: &str,
) -> Result<T, AccessMapAppError> {
    config.get::<T>(key).map_err(|e| {
        let msg = format!("error reading '{key}' key in '{filename}': {e}");
        AccessMapAppError::InvalidUserInput(msg)
    })
}
