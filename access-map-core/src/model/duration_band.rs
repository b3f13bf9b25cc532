use serde::{Deserialize, Serialize};
use uom::si::f64::Time;

/// one travel-time threshold of an accessibility map. an accessibility map
/// with N polygons has N nested bands, the largest equal to the full budget.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DurationBand {
    pub seconds: u32,
}

impl DurationBand {
    pub fn new(seconds: u32) -> DurationBand {
        DurationBand { seconds }
    }

    pub fn key(&self) -> String {
        format!("{}", self.seconds)
    }

    /// rounded to the nearest minute
    pub fn minutes(&self) -> u32 {
        (self.seconds as f64 / 60.0).round() as u32
    }

    pub fn time(&self) -> Time {
        Time::new::<uom::si::time::second>(self.seconds as f64)
    }
}

impl std::fmt::Display for DurationBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}s", self.seconds)
    }
}

/// builds the bands for a total travel time budget split into some number of
/// polygons, largest first: `[T, ceil((N-1)T/N), ..., ceil(T/N)]`.
/// a polygon count of zero is treated as one.
pub fn duration_bands(total_budget_seconds: u32, number_of_polygons: usize) -> Vec<DurationBand> {
    let n = number_of_polygons.max(1) as u64;
    let total = total_budget_seconds as u64;
    let mut bands = Vec::with_capacity(n as usize);
    bands.push(DurationBand::new(total_budget_seconds));
    for k in (1..n).rev() {
        let seconds = (k * total).div_ceil(n);
        bands.push(DurationBand::new(seconds as u32));
    }
    bands
}
