use std::sync::{Arc, PoisonError, RwLock};

use tracing::trace;

use crate::indicator::IndicatorFrame;

/// Hands the latest frame from the sampling loop to the renderer.
///
/// The writer swaps in a complete immutable snapshot; readers clone the
/// `Arc` and never see a partially written frame.
#[derive(Debug, Default)]
pub struct FrameSlot {
    latest: RwLock<Arc<IndicatorFrame>>,
}

impl FrameSlot {
    pub fn new(initial: IndicatorFrame) -> Self {
        Self {
            latest: RwLock::new(Arc::new(initial)),
        }
    }

    pub fn publish(&self, frame: IndicatorFrame) {
        let snapshot = Arc::new(frame);
        // The slot only ever holds a whole snapshot, so a poisoned lock is still usable.
        let mut latest = self.latest.write().unwrap_or_else(PoisonError::into_inner);
        *latest = snapshot;
        trace!("frame published");
    }

    pub fn latest(&self) -> Arc<IndicatorFrame> {
        let latest = self.latest.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&latest)
    }
}
