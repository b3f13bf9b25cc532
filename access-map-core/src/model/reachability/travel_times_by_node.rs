use super::{NodeId, NodeReachabilityResult};
use crate::model::DurationBand;
use indexmap::IndexMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// travel times to each reachable node, aggregated over the routing results of
/// every successful time sample. nodes keep the order in which they were first
/// reported so downstream geometry is built in a repeatable order.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct TravelTimesByNode {
    travel_times: IndexMap<NodeId, Vec<u32>>,
    results_count: usize,
}

impl TravelTimesByNode {
    /// aggregates routing results. a travel time is only kept when it is
    /// positive and within `max_travel_time_seconds`, so a sample that reports
    /// a node beyond the budget adds nothing for that node.
    pub fn new(
        results: &[NodeReachabilityResult],
        max_travel_time_seconds: u32,
    ) -> TravelTimesByNode {
        let mut travel_times: IndexMap<NodeId, Vec<u32>> = IndexMap::new();
        for result in results.iter() {
            for node in result.nodes.iter() {
                let tt = node.total_travel_time_seconds;
                if tt > 0 && tt <= max_travel_time_seconds {
                    travel_times.entry(node.id.clone()).or_default().push(tt);
                }
            }
        }
        log::debug!(
            "aggregated travel times of {} nodes from {} routing results",
            travel_times.len(),
            results.len()
        );
        TravelTimesByNode {
            travel_times,
            results_count: results.len(),
        }
    }

    pub fn travel_times(&self) -> &IndexMap<NodeId, Vec<u32>> {
        &self.travel_times
    }

    pub fn get(&self, node_id: &NodeId) -> Option<&[u32]> {
        self.travel_times.get(node_id).map(|v| v.as_slice())
    }

    pub fn node_ids(&self) -> Vec<NodeId> {
        self.travel_times.keys().cloned().collect_vec()
    }

    /// number of routing results that were aggregated
    pub fn results_count(&self) -> usize {
        self.results_count
    }

    pub fn len(&self) -> usize {
        self.travel_times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.travel_times.is_empty()
    }
}

/// average walking time left at a node once `band` has been spent, over all
/// `sample_count` time samples. samples where the node was not reached count
/// as zero remaining time, so the sum is divided by the full sample count and
/// not by the number of samples that reached the node.
pub fn average_remaining_seconds(
    travel_times: &[u32],
    band: &DurationBand,
    sample_count: usize,
) -> f64 {
    if sample_count == 0 {
        return 0.0;
    }
    let remaining: u64 = travel_times
        .iter()
        .map(|tt| band.seconds.saturating_sub(*tt) as u64)
        .sum();
    remaining as f64 / sample_count as f64
}
