//! Frame scheduler.
//!
//! The capture loop fires one callback per video frame with no backpressure
//! channel, so a frame arriving while the previous one is still being
//! classified must be dropped, not queued. This value makes that policy
//! explicit instead of hiding it behind module-level flags.
//!
//! Invariant: at most one frame is in flight at any time.

use tracing::{debug, warn};

/// Re-entrancy gate for the per-frame pipeline.
#[derive(Debug)]
pub struct FrameScheduler {
    in_flight: bool,
    active: bool,
    processed: u64,
    dropped: u64,
}

impl FrameScheduler {
    /// A scheduler that accepts frames immediately.
    pub fn new() -> Self {
        Self {
            in_flight: false,
            active: true,
            processed: 0,
            dropped: 0,
        }
    }

    /// Try to admit a frame. Returns `false` if the frame must be dropped,
    /// either because one is already in flight or tracking is stopped.
    pub fn begin_frame(&mut self) -> bool {
        if !self.active {
            return false;
        }
        if self.in_flight {
            self.dropped += 1;
            warn!(dropped = self.dropped, "frame dropped: previous frame still in flight");
            return false;
        }
        self.in_flight = true;
        true
    }

    /// Mark the admitted frame as fully processed.
    pub fn end_frame(&mut self) {
        if self.in_flight {
            self.in_flight = false;
            self.processed += 1;
        }
    }

    /// Stop tracking: discard any in-flight classification and reject all
    /// further frames until [`FrameScheduler::start`].
    pub fn stop(&mut self) {
        if self.in_flight {
            debug!("stopping with a frame in flight; result will be discarded");
        }
        self.in_flight = false;
        self.active = false;
    }

    /// Resume accepting frames.
    pub fn start(&mut self) {
        self.active = true;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn processed(&self) -> u64 {
        self.processed
    }

    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new()
    }
}
