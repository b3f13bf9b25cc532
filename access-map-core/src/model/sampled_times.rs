use serde::{Deserialize, Serialize};

/// sampling interval used when a non-zero delta comes with a zero interval.
pub const DEFAULT_DELTA_INTERVAL_SECONDS: u32 = 60;

/// the times of trip queried around a requested time, to reduce the
/// sensitivity of an accessibility map to the exact schedule timing.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SampledTimes {
    times: Vec<u32>,
    center_index: usize,
}

impl SampledTimes {
    /// every `center + i * interval` for `i` in `[-ceil(delta/interval), ceil(delta/interval)]`,
    /// dropping times that are negative or past `u32::MAX`. a zero delta
    /// samples only the center time.
    pub fn new(center: u32, delta: u32, interval: u32) -> SampledTimes {
        if delta == 0 {
            return SampledTimes {
                times: vec![center],
                center_index: 0,
            };
        }
        let interval = if interval == 0 {
            DEFAULT_DELTA_INTERVAL_SECONDS
        } else {
            interval
        } as i64;
        let steps = (delta as i64 + interval - 1) / interval;
        let times: Vec<u32> = (-steps..=steps)
            .map(|i| center as i64 + i * interval)
            .filter_map(|t| u32::try_from(t).ok())
            .collect();
        // times are increasing and the center is never negative
        let center_index = times.iter().position(|t| *t == center).unwrap_or_default();
        SampledTimes {
            times,
            center_index,
        }
    }

    pub fn times(&self) -> &[u32] {
        &self.times
    }

    /// index of the requested time within [`SampledTimes::times`]
    pub fn center_index(&self) -> usize {
        self.center_index
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}
