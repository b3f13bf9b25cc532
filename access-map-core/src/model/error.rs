/// error code attached to every wrapped calculation failure.
pub const CALCULATION_FAILED_CODE: &str = "TRRAM0001";

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum AccessMapError {
    #[error("invalid accessibility map request: {0}")]
    InvalidRequest(String),
    #[error("routing query for time of trip {time_of_trip} failed: {message}")]
    RoutingQueryFailed { time_of_trip: u32, message: String },
    #[error("accessibility map calculation was cancelled")]
    Cancelled,
    #[error("spatial engine failed to union weighted circles: {0}")]
    SpatialEngineFailed(String),
    #[error("failure loading node geometries: {0}")]
    NodeStoreFailed(String),
    #[error("failure counting places in polygon: {0}")]
    PoiCountFailed(String),
    #[error("polygon comparison expects exactly 2 features, received {0}")]
    InvalidComparisonInput(usize),
    #[error("cannot calculate transit accessibility map ({CALCULATION_FAILED_CODE}): {0}")]
    CalculationFailed(String),
    #[error("invalid geometry: {0}")]
    GeometryError(String),
    #[error("failure serializing output: {0}")]
    OutputFormat(String),
}

impl AccessMapError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, AccessMapError::Cancelled)
    }

    /// errors that describe the calculation itself and are propagated as-is.
    /// collaborator failures (routing, node store, spatial engine, places) are
    /// not domain errors and get wrapped into [`AccessMapError::CalculationFailed`].
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            AccessMapError::InvalidRequest(_)
                | AccessMapError::Cancelled
                | AccessMapError::InvalidComparisonInput(_)
                | AccessMapError::CalculationFailed(_)
        )
    }

    /// wraps a non-domain error into a calculation failure. cancellation and
    /// other domain errors pass through unchanged.
    pub fn into_calculation_error(self) -> AccessMapError {
        if self.is_domain_error() {
            self
        } else {
            AccessMapError::CalculationFailed(self.to_string())
        }
    }
}
