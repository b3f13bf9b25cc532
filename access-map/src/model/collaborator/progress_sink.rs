/// receives progress of long calculations as a fraction in `[0, 1]`.
pub trait ProgressSink: Send + Sync {
    fn emit(&self, name: &str, progress: f64);
}

/// writes progress to the log.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn emit(&self, name: &str, progress: f64) {
        log::info!("{name}: {:.0}%", progress * 100.0);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_log_progress_as_trait_object() {
        let sinks: Vec<Box<dyn ProgressSink>> = vec![Box::new(LogProgress)];
        for sink in sinks.iter() {
            sink.emit("AccessibilityMapPolygonGeneration", 0.5);
        }
    }
}
