use access_map_core::model::{
    AccessMapError, ComparisonColors, ComparisonResult, MapSetOperationResult, PolygonArea,
};
use access_map_core::util::boundary::polygon_strokes;
use access_map_core::util::geojson_conversion::{
    feature_multipolygon, multilinestring_feature, multipolygon_feature,
};
use geo::{BooleanOps, MultiPolygon};
use rayon::prelude::*;
use serde_json::{json, Map, Value};

/// the overlap of exactly two polygon features, colored and annotated with
/// its area and the duration of the first feature.
pub fn intersect(
    features: &[geojson::Feature],
    color: &str,
) -> Result<MapSetOperationResult, AccessMapError> {
    let (a, b) = feature_pair(features)?;
    let geometry = a.intersection(&b);
    if geometry.0.is_empty() {
        return Ok(MapSetOperationResult::empty());
    }
    let mut properties = Map::new();
    properties.insert(String::from("color"), json![color]);
    if let Some(duration_minutes) = features[0].property("durationMinutes") {
        properties.insert(String::from("durationMinutes"), duration_minutes.clone());
    }
    intersection_area(&geometry, &a, &b).insert_into(&mut properties);
    Ok(set_operation_result(&geometry, properties))
}

/// BooleanOps may move output vertices by a rounding error, so the overlap
/// area is capped at the area of the smaller input.
fn intersection_area(
    geometry: &MultiPolygon<f64>,
    a: &MultiPolygon<f64>,
    b: &MultiPolygon<f64>,
) -> PolygonArea {
    let smaller_input = PolygonArea::of(a).area_sq_m.min(PolygonArea::of(b).area_sq_m);
    PolygonArea::from_sq_m(PolygonArea::of(geometry).area_sq_m.min(smaller_input))
}

/// the part of the first of exactly two polygon features not covered by the
/// second, colored.
pub fn difference(
    features: &[geojson::Feature],
    color: &str,
) -> Result<MapSetOperationResult, AccessMapError> {
    let (a, b) = feature_pair(features)?;
    let geometry = a.difference(&b);
    if geometry.0.is_empty() {
        return Ok(MapSetOperationResult::empty());
    }
    let mut properties = Map::new();
    properties.insert(String::from("color"), json![color]);
    Ok(set_operation_result(&geometry, properties))
}

/// compares two polygon sets band by band. bands are matched by position,
/// so both sets must come from calculations with the same number of
/// polygons. bands are independent and are compared in parallel, after the
/// band count of both sets is checked in band order.
pub fn compare_maps(
    first: &[geojson::Feature],
    second: &[geojson::Feature],
    number_of_polygons: usize,
    colors: &ComparisonColors,
) -> Result<Vec<ComparisonResult>, AccessMapError> {
    let band_pair = |band_index: usize| -> Vec<geojson::Feature> {
        [first.get(band_index), second.get(band_index)]
            .into_iter()
            .flatten()
            .cloned()
            .collect()
    };
    if let Some(incomplete) = (0..number_of_polygons)
        .map(|i| [first.get(i), second.get(i)].into_iter().flatten().count())
        .find(|count| *count != 2)
    {
        return Err(AccessMapError::InvalidComparisonInput(incomplete));
    }
    (0..number_of_polygons)
        .into_par_iter()
        .map(|band_index| {
            let pair = band_pair(band_index);
            let reversed: Vec<geojson::Feature> = pair.iter().rev().cloned().collect();
            Ok(ComparisonResult {
                band_index,
                intersection: intersect(&pair, &colors.intersection_color)?,
                scenario1_minus_2: difference(&pair, &colors.scenario1_minus_2_color)?,
                scenario2_minus_1: difference(&reversed, &colors.scenario2_minus_1_color)?,
            })
        })
        .collect()
}

fn feature_pair(
    features: &[geojson::Feature],
) -> Result<(MultiPolygon<f64>, MultiPolygon<f64>), AccessMapError> {
    match features {
        [a, b] => Ok((feature_multipolygon(a)?, feature_multipolygon(b)?)),
        _ => Err(AccessMapError::InvalidComparisonInput(features.len())),
    }
}

fn set_operation_result(
    geometry: &MultiPolygon<f64>,
    properties: Map<String, Value>,
) -> MapSetOperationResult {
    let stroke = multilinestring_feature(&polygon_strokes(geometry), properties.clone());
    MapSetOperationResult::single(multipolygon_feature(geometry, properties), stroke)
}

#[cfg(test)]
mod test {
    use super::*;
    use geo::{polygon, Polygon};

    fn square(x0: f64, y0: f64, size: f64) -> Polygon<f64> {
        polygon![
            (x: x0, y: y0),
            (x: x0 + size, y: y0),
            (x: x0 + size, y: y0 + size),
            (x: x0, y: y0 + size),
            (x: x0, y: y0),
        ]
    }

    fn feature(polygon: Polygon<f64>, minutes: u32) -> geojson::Feature {
        let mut props = Map::new();
        props.insert(String::from("durationMinutes"), json![minutes]);
        multipolygon_feature(&MultiPolygon::new(vec![polygon]), props)
    }

    fn area(result: &MapSetOperationResult) -> f64 {
        result
            .polygons
            .iter()
            .map(|f| PolygonArea::of(&feature_multipolygon(f).unwrap()).area_sq_m)
            .sum()
    }

    #[test]
    fn test_intersection_properties() {
        let features = [feature(square(0.0, 0.0, 0.01), 15), feature(square(0.005, 0.0, 0.01), 15)];
        let result = intersect(&features, "#aaaaaa").unwrap();
        assert_eq!(result.polygons.len(), 1);
        assert_eq!(result.strokes.len(), 1);
        let props = result.polygons[0].properties.as_ref().unwrap();
        assert_eq!(props["color"], json!["#aaaaaa"]);
        assert_eq!(props["durationMinutes"], json![15]);
        assert!(props["areaSqKm"].as_f64().unwrap() > 0.0);
    }

    fn reported_area(result: &MapSetOperationResult) -> f64 {
        result
            .polygons
            .iter()
            .map(|f| f.property("areaSqM").and_then(Value::as_f64).unwrap())
            .sum()
    }

    fn assert_intersection_bounded(a: Polygon<f64>, b: Polygon<f64>) -> f64 {
        let a = feature(a, 10);
        let b = feature(b, 10);
        let result = intersect(&[a.clone(), b.clone()], "#000000").unwrap();
        let area_a = PolygonArea::of(&feature_multipolygon(&a).unwrap()).area_sq_m;
        let area_b = PolygonArea::of(&feature_multipolygon(&b).unwrap()).area_sq_m;
        let reported = reported_area(&result);
        assert!(
            reported <= area_a.min(area_b),
            "intersection area {reported} exceeds input areas {area_a}, {area_b}"
        );
        // the geometry itself stays within a rounding error of the bound
        let bound = area_a.min(area_b);
        assert!(area(&result) <= bound * (1.0 + 1e-6));
        reported
    }

    #[test]
    fn test_contained_intersection_bounded_by_inputs() {
        let inner = square(0.01, 0.005, 0.01);
        let inner_area = PolygonArea::of(&MultiPolygon::new(vec![inner.clone()])).area_sq_m;
        let reported = assert_intersection_bounded(square(0.0, 0.0, 0.02), inner);
        assert!((reported - inner_area).abs() <= inner_area * 1e-6);
    }

    #[test]
    fn test_overlapping_intersection_bounded_by_inputs() {
        let reported =
            assert_intersection_bounded(square(0.0, 0.0, 0.02), square(0.01, 0.01, 0.02));
        let overlap = MultiPolygon::new(vec![square(0.01, 0.01, 0.01)]);
        let quarter = PolygonArea::of(&overlap).area_sq_m;
        assert!((reported - quarter).abs() <= quarter * 1e-6);
    }

    #[test]
    fn test_identical_intersection_bounded_by_inputs() {
        let same = square(-73.6, 45.5, 0.013);
        let same_area = PolygonArea::of(&MultiPolygon::new(vec![same.clone()])).area_sq_m;
        let reported = assert_intersection_bounded(same.clone(), same);
        assert!((reported - same_area).abs() <= same_area * 1e-6);
    }

    #[test]
    fn test_intersection_without_duration_omits_key() {
        let bare = |p: Polygon<f64>| multipolygon_feature(&MultiPolygon::new(vec![p]), Map::new());
        let features = [bare(square(0.0, 0.0, 0.01)), bare(square(0.005, 0.0, 0.01))];
        let result = intersect(&features, "#aaaaaa").unwrap();
        let props = result.polygons[0].properties.as_ref().unwrap();
        assert!(!props.contains_key("durationMinutes"));
        assert_eq!(props["color"], json!["#aaaaaa"]);
    }

    #[test]
    fn test_disjoint_intersection_is_empty() {
        let features = [feature(square(0.0, 0.0, 0.01), 10), feature(square(1.0, 1.0, 0.01), 10)];
        let result = intersect(&features, "#000000").unwrap();
        assert!(result.is_empty());
        assert!(result.strokes.is_empty());
    }

    #[test]
    fn test_difference_has_color_only() {
        let features = [
            feature(square(0.0, 0.0, 0.02), 10),
            feature(square(0.005, 0.005, 0.01), 10),
        ];
        let result = difference(&features, "#ff0000").unwrap();
        let props = result.polygons[0].properties.as_ref().unwrap();
        assert_eq!(props.len(), 1);
        assert_eq!(props["color"], json!["#ff0000"]);
        // the inner square leaves a hole, stroked as its own line
        match result.strokes[0].geometry.as_ref().map(|g| &g.value) {
            Some(geojson::Value::MultiLineString(lines)) => assert_eq!(lines.len(), 2),
            other => panic!("expected multilinestring, found {other:?}"),
        }
    }

    #[test]
    fn test_contained_difference_is_empty() {
        let features = [
            feature(square(0.005, 0.005, 0.01), 10),
            feature(square(0.0, 0.0, 0.02), 10),
        ];
        let result = difference(&features, "#ff0000").unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_wrong_feature_count() {
        let one = [feature(square(0.0, 0.0, 0.01), 10)];
        assert_eq!(intersect(&one, "#000000"), Err(AccessMapError::InvalidComparisonInput(1)));
        let three = [
            feature(square(0.0, 0.0, 0.01), 10),
            feature(square(0.0, 0.0, 0.01), 10),
            feature(square(0.0, 0.0, 0.01), 10),
        ];
        assert_eq!(difference(&three, "#000000"), Err(AccessMapError::InvalidComparisonInput(3)));
    }

    #[test]
    fn test_compare_maps_by_position() {
        let first = vec![feature(square(0.0, 0.0, 0.02), 10), feature(square(0.0, 0.0, 0.01), 5)];
        let second = vec![feature(square(0.01, 0.0, 0.02), 10), feature(square(0.0, 0.0, 0.01), 5)];
        let colors = ComparisonColors::default();
        let results = compare_maps(&first, &second, 2, &colors).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].band_index, 0);
        assert_eq!(results[1].band_index, 1);
        assert!(!results[0].intersection.is_empty());
        assert!(!results[0].scenario1_minus_2.is_empty());
        assert!(!results[0].scenario2_minus_1.is_empty());
        assert_eq!(
            results[0].scenario2_minus_1.polygons[0].properties.as_ref().unwrap()["color"],
            json![colors.scenario2_minus_1_color]
        );
        // identical second bands leave nothing on either side
        assert!(results[1].scenario1_minus_2.is_empty());
        assert!(results[1].scenario2_minus_1.is_empty());
    }

    #[test]
    fn test_compare_maps_missing_band() {
        let first = vec![feature(square(0.0, 0.0, 0.02), 10)];
        let second = vec![feature(square(0.01, 0.0, 0.02), 10)];
        let result = compare_maps(&first, &second, 2, &ComparisonColors::default());
        assert_eq!(result, Err(AccessMapError::InvalidComparisonInput(0)));
    }

    #[test]
    fn test_compare_maps_reports_first_incomplete_band() {
        // band 1 has one feature, bands 2 and 3 have none
        let first: Vec<_> = (0..2).map(|i| feature(square(0.0, 0.0, 0.01), i)).collect();
        let second = vec![feature(square(0.0, 0.0, 0.01), 0)];
        for _ in 0..20 {
            let result = compare_maps(&first, &second, 4, &ComparisonColors::default());
            assert_eq!(result, Err(AccessMapError::InvalidComparisonInput(1)));
        }
    }
}
