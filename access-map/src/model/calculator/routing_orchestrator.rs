use crate::model::collaborator::{AccessMapQuery, RoutingOptions, RoutingOracle};
use access_map_core::model::{
    AccessMapError, AccessMapParameters, DurationBand, NodeReachabilityResult, SampledTimes,
};
use futures::future::join_all;
use itertools::Itertools;

/// routing results gathered over all sampled times of trip.
#[derive(Clone, Debug, PartialEq)]
pub struct RoutingOutcome {
    /// results of the successful samples, in sampled time order
    pub results: Vec<NodeReachabilityResult>,
    /// result at exactly the requested time, if that query succeeded
    pub canonical_result: Option<NodeReachabilityResult>,
    /// number of sampled times, including those whose query failed
    pub sample_count: usize,
}

/// queries the routing oracle once per sampled time, all queries running
/// concurrently. a failed query only removes its sample from the results.
/// fails with [`AccessMapError::Cancelled`] if cancellation was requested
/// while the queries ran.
pub async fn route_sampled_times(
    params: &AccessMapParameters,
    bands: &[DurationBand],
    oracle: &dyn RoutingOracle,
    options: &RoutingOptions,
) -> Result<RoutingOutcome, AccessMapError> {
    let sampled = SampledTimes::new(
        params.time_of_trip.seconds_since_midnight(),
        params.delta_seconds,
        params.delta_interval_seconds,
    );
    let max_travel_time = bands
        .iter()
        .map(|b| b.seconds)
        .max()
        .unwrap_or(params.max_total_travel_time_seconds);
    let queries = sampled
        .times()
        .iter()
        .map(|t| AccessMapQuery::new(params, *t, max_travel_time))
        .collect_vec();
    log::debug!(
        "querying routing oracle at {} sampled times {:?}",
        queries.len(),
        sampled.times()
    );

    let outcomes = join_all(queries.iter().map(|q| oracle.accessible_map(q, options))).await;

    let mut results = Vec::with_capacity(outcomes.len());
    let mut canonical_result = None;
    let mut cancelled = false;
    for (idx, (query, outcome)) in queries.iter().zip(outcomes).enumerate() {
        match outcome {
            Ok(result) => {
                if idx == sampled.center_index() {
                    canonical_result = Some(result.clone());
                }
                results.push(result);
            }
            Err(AccessMapError::Cancelled) => cancelled = true,
            Err(e) => {
                let failure = AccessMapError::RoutingQueryFailed {
                    time_of_trip: query.time_of_trip,
                    message: e.to_string(),
                };
                log::warn!("dropping sample: {failure}");
            }
        }
    }

    if cancelled {
        return Err(AccessMapError::Cancelled);
    }
    options.cancellation.check()?;

    Ok(RoutingOutcome {
        results,
        canonical_result,
        sample_count: sampled.len(),
    })
}
