use crate::model::collaborator::ProgressSink;
use kdam::{Bar, BarExt};
use std::sync::Mutex;

const BAR_TOTAL: usize = 100;

/// shows progress on a terminal progress bar.
pub struct KdamProgress {
    bar: Mutex<Bar>,
}

impl KdamProgress {
    pub fn new(desc: &str) -> Result<KdamProgress, String> {
        let bar = Bar::builder()
            .desc(desc)
            .total(BAR_TOTAL)
            .build()
            .map_err(|e| format!("failure building progress bar: {e}"))?;
        Ok(KdamProgress {
            bar: Mutex::new(bar),
        })
    }
}

impl ProgressSink for KdamProgress {
    fn emit(&self, name: &str, progress: f64) {
        let position = (progress.clamp(0.0, 1.0) * BAR_TOTAL as f64).round() as usize;
        log::debug!("{name}: {progress}");
        if let Ok(mut bar) = self.bar.lock() {
            let _ = bar.update_to(position);
        }
    }
}
