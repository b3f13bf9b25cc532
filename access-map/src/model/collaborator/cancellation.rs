use access_map_core::model::AccessMapError;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// a shared flag polled between units of work. cancelling never interrupts
/// a collaborator call already in flight, it only stops further work from
/// being started.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> CancellationToken {
        CancellationToken::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// fails with [`AccessMapError::Cancelled`] once the token is cancelled
    pub fn check(&self) -> Result<(), AccessMapError> {
        if self.is_cancelled() {
            Err(AccessMapError::Cancelled)
        } else {
            Ok(())
        }
    }
}
