use super::fs::{read_json, write_json};
use super::AccessMapAppError;
use crate::model::calculator::AccessMapCalculator;
use access_map_core::model::ComparisonColors;
use std::path::Path;

/// compares the polygon collections of two scenarios written by `calculate`.
pub fn run(
    first: &Path,
    second: &Path,
    number_of_polygons: usize,
    colors: &ComparisonColors,
    output_file: Option<&Path>,
) -> Result<(), AccessMapAppError> {
    let first_polygons = read_polygons(first)?;
    let second_polygons = read_polygons(second)?;
    let results = AccessMapCalculator::compare_maps(
        &first_polygons.features,
        &second_polygons.features,
        number_of_polygons,
        colors,
    )?;
    let output = serde_json::to_value(&results).map_err(|e| AccessMapAppError::WriteError {
        path: output_file.unwrap_or(Path::new("<stdout>")).to_owned(),
        message: e.to_string(),
    })?;
    write_json(&output, output_file)
}

/// reads a polygon FeatureCollection, either bare or under the `polygons`
/// key of a `calculate` output file.
fn read_polygons(path: &Path) -> Result<geojson::FeatureCollection, AccessMapAppError> {
    let value: serde_json::Value = read_json(path)?;
    let collection = match value.get("polygons") {
        Some(polygons) => polygons.clone(),
        None => value,
    };
    serde_json::from_value(collection).map_err(|e| AccessMapAppError::ReadError {
        path: path.to_owned(),
        message: format!("expected a polygon FeatureCollection: {e}"),
    })
}
