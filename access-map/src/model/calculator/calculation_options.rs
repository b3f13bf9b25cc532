use crate::model::collaborator::{CancellationToken, RoutingOptions};
use serde_json::{Map, Value};

/// per-call options of an accessibility map calculation.
#[derive(Clone, Debug, Default)]
pub struct CalculationOptions {
    pub cancellation: CancellationToken,
    /// merged into the properties of every polygon
    pub additional_properties: Map<String, Value>,
}

impl CalculationOptions {
    pub fn routing_options(&self) -> RoutingOptions {
        RoutingOptions {
            cancellation: self.cancellation.clone(),
        }
    }
}
