use super::{
    comparator, routing_orchestrator::route_sampled_times, AccessMapResult,
    AccessMapWithPolygonResult, CalculationOptions, IsochronePolygonBuilder,
};
use crate::model::collaborator::{NodeStore, PoiCounter, ProgressSink, RoutingOracle, SpatialEngine};
use access_map_core::model::{
    duration_bands, AccessMapError, AccessMapParameters, AccessMapRequest, ComparisonColors,
    ComparisonResult, TravelTimesByNode,
};
use std::{sync::Arc, time::Instant};

/// computes transit accessibility maps with the injected collaborators.
#[derive(Clone)]
pub struct AccessMapCalculator {
    routing_oracle: Arc<dyn RoutingOracle>,
    node_store: Arc<dyn NodeStore>,
    spatial_engine: Arc<dyn SpatialEngine>,
    poi_counter: Option<Arc<dyn PoiCounter>>,
    progress: Option<Arc<dyn ProgressSink>>,
}

impl AccessMapCalculator {
    pub fn new(
        routing_oracle: Arc<dyn RoutingOracle>,
        node_store: Arc<dyn NodeStore>,
        spatial_engine: Arc<dyn SpatialEngine>,
    ) -> AccessMapCalculator {
        AccessMapCalculator {
            routing_oracle,
            node_store,
            spatial_engine,
            poi_counter: None,
            progress: None,
        }
    }

    pub fn with_poi_counter(self, poi_counter: Arc<dyn PoiCounter>) -> AccessMapCalculator {
        AccessMapCalculator {
            poi_counter: Some(poi_counter),
            ..self
        }
    }

    pub fn with_progress_sink(self, progress: Arc<dyn ProgressSink>) -> AccessMapCalculator {
        AccessMapCalculator {
            progress: Some(progress),
            ..self
        }
    }

    /// travel times by node over all sampled times of trip.
    pub async fn calculate(
        &self,
        request: &AccessMapRequest,
        options: &CalculationOptions,
    ) -> Result<AccessMapResult, AccessMapError> {
        let parameters = AccessMapParameters::try_from(request)?;
        self.calculate_parameters(parameters, options)
            .await
            .map_err(report)
    }

    /// travel times by node turned into one polygon per duration band.
    pub async fn calculate_with_polygons(
        &self,
        request: &AccessMapRequest,
        options: &CalculationOptions,
    ) -> Result<AccessMapWithPolygonResult, AccessMapError> {
        let result = self.calculate(request, options).await?;
        let start = Instant::now();
        let builder = IsochronePolygonBuilder {
            node_store: self.node_store.as_ref(),
            spatial_engine: self.spatial_engine.as_ref(),
            poi_counter: self.poi_counter.as_deref(),
            progress: self.progress.as_deref(),
        };
        let polygons = builder
            .build(
                &result.parameters,
                &result.result,
                &result.durations,
                result.sample_count,
                &options.cancellation,
                &options.additional_properties,
            )
            .await
            .map_err(report)?;
        log::info!(
            "generated {} accessibility polygons in {:?}",
            polygons.len(),
            start.elapsed()
        );
        Ok(AccessMapWithPolygonResult {
            polygons,
            result_by_node: result.canonical_routing_result,
        })
    }

    /// compares two sets of accessibility polygons band by band.
    pub fn compare_maps(
        first: &[geojson::Feature],
        second: &[geojson::Feature],
        number_of_polygons: usize,
        colors: &ComparisonColors,
    ) -> Result<Vec<ComparisonResult>, AccessMapError> {
        comparator::compare_maps(first, second, number_of_polygons, colors)
    }

    async fn calculate_parameters(
        &self,
        parameters: AccessMapParameters,
        options: &CalculationOptions,
    ) -> Result<AccessMapResult, AccessMapError> {
        let durations = duration_bands(
            parameters.max_total_travel_time_seconds,
            parameters.number_of_polygons,
        );
        let start = Instant::now();
        let outcome = route_sampled_times(
            &parameters,
            &durations,
            self.routing_oracle.as_ref(),
            &options.routing_options(),
        )
        .await?;
        log::info!(
            "{} of {} routing samples succeeded in {:?}",
            outcome.results.len(),
            outcome.sample_count,
            start.elapsed()
        );
        let result = TravelTimesByNode::new(&outcome.results, durations[0].seconds);
        Ok(AccessMapResult {
            parameters,
            result,
            durations,
            sample_count: outcome.sample_count,
            canonical_routing_result: outcome.canonical_result,
        })
    }
}

/// logs a failure unless it is a cancellation, and wraps collaborator
/// failures into a calculation error.
fn report(error: AccessMapError) -> AccessMapError {
    if !error.is_cancelled() {
        log::error!("{error}");
    }
    error.into_calculation_error()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::calculator::test_support::{
        request, MockNodeStore, MockRoutingOracle, RecordingSpatialEngine,
    };
    use crate::model::collaborator::CancellationToken;
    use access_map_core::model::{NodeId, NodeTravelTime, CALCULATION_FAILED_CODE};
    use futures::executor::block_on;

    fn nodes() -> Vec<NodeTravelTime> {
        vec![
            NodeTravelTime::new("a", 240),
            NodeTravelTime::new("b", 420),
            NodeTravelTime::new("far", 2000),
        ]
    }

    fn calculator(
        oracle: MockRoutingOracle,
        engine: Arc<RecordingSpatialEngine>,
    ) -> AccessMapCalculator {
        let node_store = MockNodeStore::new(&[
            ("a", -73.59, 45.5),
            ("b", -73.58, 45.505),
            ("far", -73.3, 45.6),
        ]);
        AccessMapCalculator::new(Arc::new(oracle), Arc::new(node_store), engine)
    }

    #[test]
    fn test_calculate_aggregates_samples() {
        let oracle = MockRoutingOracle::default().respond_always(nodes());
        let calc = calculator(oracle, Arc::new(RecordingSpatialEngine::default()));
        let result =
            block_on(calc.calculate(&request(25200, 180, 600, 2), &CalculationOptions::default()))
                .unwrap();
        assert_eq!(result.sample_count, 7);
        assert_eq!(
            result.durations.iter().map(|d| d.seconds).collect::<Vec<_>>(),
            vec![600, 300]
        );
        assert_eq!(result.result.get(&NodeId::from("a")).map(|t| t.len()), Some(7));
        assert!(result.result.get(&NodeId::from("far")).is_none());
        assert!(result.canonical_routing_result.is_some());
    }

    #[test]
    fn test_missing_location_is_invalid() {
        let calc = calculator(
            MockRoutingOracle::default(),
            Arc::new(RecordingSpatialEngine::default()),
        );
        let req = AccessMapRequest {
            departure_time_seconds_since_midnight: Some(25200),
            ..Default::default()
        };
        let result = block_on(calc.calculate(&req, &CalculationOptions::default()));
        assert!(matches!(result, Err(AccessMapError::InvalidRequest(_))));
    }

    #[test]
    fn test_partial_failure_still_builds_polygons() {
        let oracle = MockRoutingOracle::default()
            .respond_always(nodes())
            .fail_at(25020)
            .fail_at(25320);
        let engine = Arc::new(RecordingSpatialEngine::default());
        let calc = calculator(oracle, engine.clone());
        let result = block_on(calc.calculate_with_polygons(
            &request(25200, 180, 600, 1),
            &CalculationOptions::default(),
        ))
        .unwrap();
        assert_eq!(result.polygons.len(), 1);
        // node a: 5 surviving samples of (600 - 240)s, averaged over all 7
        let circles = &engine.calls()[0];
        let speed: f64 = 5.0 / 3.6;
        let expected_km = ((5.0 * 360.0 / 7.0) * speed).floor() / 1000.0;
        assert!(circles
            .iter()
            .any(|c| c.center == [-73.59, 45.5] && (c.radius_km - expected_km).abs() < 1e-12));
    }

    #[test]
    fn test_layering_order() {
        let oracle = MockRoutingOracle::default().respond_always(nodes());
        let calc = calculator(oracle, Arc::new(RecordingSpatialEngine::default()));
        let result = block_on(calc.calculate_with_polygons(
            &request(25200, 0, 600, 2),
            &CalculationOptions::default(),
        ))
        .unwrap();
        let bands = result.polygons.iter().map(|p| p.band.seconds).collect::<Vec<_>>();
        assert_eq!(bands, vec![600, 300]);
        let polygons = result.polygons_collection();
        let strokes = result.strokes_collection();
        assert_eq!(polygons.features.len(), 2);
        assert_eq!(strokes.features.len(), 2);
        assert_eq!(
            polygons.features[0].property("durationSeconds"),
            Some(&serde_json::json![600])
        );
    }

    #[test]
    fn test_cancellation_propagates_unwrapped() {
        let oracle = MockRoutingOracle::default().respond_always(nodes());
        let token = CancellationToken::new();
        let engine = Arc::new(RecordingSpatialEngine::cancelling_after(1, token.clone()));
        let calc = calculator(oracle, engine.clone());
        let options = CalculationOptions {
            cancellation: token,
            ..Default::default()
        };
        let result = block_on(calc.calculate_with_polygons(&request(25200, 0, 900, 3), &options));
        assert_eq!(result, Err(AccessMapError::Cancelled));
        assert_eq!(engine.calls().len(), 1);
    }

    #[test]
    fn test_engine_failure_is_wrapped() {
        let oracle = MockRoutingOracle::default().respond_always(nodes());
        let calc = calculator(oracle, Arc::new(RecordingSpatialEngine::failing()));
        let result = block_on(calc.calculate_with_polygons(
            &request(25200, 0, 600, 2),
            &CalculationOptions::default(),
        ));
        match result {
            Err(AccessMapError::CalculationFailed(msg)) => {
                assert!(msg.contains("database unavailable"));
                let err = AccessMapError::CalculationFailed(msg);
                assert!(err.to_string().contains(CALCULATION_FAILED_CODE));
            }
            other => panic!("expected wrapped failure, found {other:?}"),
        }
    }

    #[test]
    fn test_deterministic_polygons() {
        let run = || {
            let oracle = MockRoutingOracle::default().respond_always(nodes());
            let calc = calculator(oracle, Arc::new(RecordingSpatialEngine::default()));
            block_on(calc.calculate_with_polygons(
                &request(25200, 120, 900, 3),
                &CalculationOptions::default(),
            ))
            .unwrap()
        };
        let first = run();
        let second = run();
        assert_eq!(first.polygons.len(), second.polygons.len());
        for (a, b) in first.polygons.iter().zip(second.polygons.iter()) {
            assert_eq!(a.band, b.band);
            assert_eq!(a.geometry, b.geometry);
        }
    }
}
