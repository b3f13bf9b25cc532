use super::fs::read_json;
use super::AccessMapAppError;
use crate::model::collaborator::{AccessMapQuery, RoutingOptions, RoutingOracle};
use access_map_core::model::{AccessMapError, NodeReachabilityResult};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::Path;

/// a routing oracle answering from precomputed results, one per time of
/// trip in seconds since midnight:
///
/// ```json
/// { "25200": { "nodes": [{ "id": "n1", "totalTravelTimeSeconds": 340 }] } }
/// ```
///
/// queries at a time missing from the file are rejected.
#[derive(Clone, Debug, Default)]
pub struct FileRoutingOracle {
    results: BTreeMap<u32, NodeReachabilityResult>,
}

impl FileRoutingOracle {
    pub fn new(results: BTreeMap<u32, NodeReachabilityResult>) -> FileRoutingOracle {
        FileRoutingOracle { results }
    }

    pub fn from_file(path: &Path) -> Result<FileRoutingOracle, AccessMapAppError> {
        let results: BTreeMap<u32, NodeReachabilityResult> = read_json(path)?;
        log::info!(
            "loaded routing results for {} times of trip from {}",
            results.len(),
            path.display()
        );
        Ok(FileRoutingOracle { results })
    }
}

#[async_trait]
impl RoutingOracle for FileRoutingOracle {
    async fn accessible_map(
        &self,
        query: &AccessMapQuery,
        options: &RoutingOptions,
    ) -> Result<NodeReachabilityResult, AccessMapError> {
        options.cancellation.check()?;
        self.results
            .get(&query.time_of_trip)
            .cloned()
            .ok_or_else(|| AccessMapError::RoutingQueryFailed {
                time_of_trip: query.time_of_trip,
                message: String::from("no precomputed result for this time of trip"),
            })
    }
}
