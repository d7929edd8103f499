//! Per-frame gesture pipeline.
//!
//! Drives one tracker frame end to end: admit it through the scheduler,
//! mirror the handedness labels, classify each hand's landmarks, and resolve
//! the frame's gesture through the aggregator. The whole pipeline is
//! synchronous; a frame either produces a [`FrameUpdate`] or is dropped.

use crate::gesture::aggregator::{GestureAggregator, GestureSignal};
use crate::gesture::pose;
use crate::gesture::scheduler::FrameScheduler;
use crate::perf::PerfMonitor;
use crate::profile_scope;
use crate::tracker::{Handedness, TrackerFrame};
use crate::types::HandSample;

/// Result of processing one tracker frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameUpdate {
    /// The user's left hand, if tracked this frame
    pub left: Option<HandSample>,
    /// The user's right hand, if tracked this frame
    pub right: Option<HandSample>,
    /// The single gesture resolved for this frame
    pub gesture: GestureSignal,
    /// Two-hand midpoint in normalized space, set while the gesture is `Pan`
    pub midpoint: Option<(f64, f64)>,
}

/// Tracker frame -> pose predicates -> gesture signal.
#[derive(Debug, Default)]
pub struct FramePipeline {
    scheduler: FrameScheduler,
    aggregator: GestureAggregator,
    perf: PerfMonitor,
}

impl FramePipeline {
    pub fn new() -> Self {
        Self {
            scheduler: FrameScheduler::new(),
            aggregator: GestureAggregator::new(),
            perf: PerfMonitor::new(),
        }
    }

    /// Process one tracker frame. Returns `None` when the frame is dropped
    /// (a prior frame still in flight, or tracking stopped).
    pub fn process(&mut self, frame: &TrackerFrame) -> Option<FrameUpdate> {
        if !self.scheduler.begin_frame() {
            return None;
        }
        self.perf.begin_frame();
        profile_scope!("frame_pipeline");

        let mut left = None;
        let mut right = None;
        for hand in &frame.hands {
            let sample = pose::classify(&hand.landmarks);
            // The raw label is camera-relative; the feed is mirrored for a
            // front-facing view, so invert before assigning roles.
            match hand.handedness.mirrored() {
                Handedness::Left => left = Some(sample),
                Handedness::Right => right = Some(sample),
            }
        }

        let gesture = self.aggregator.resolve(left.as_ref(), right.as_ref());
        let update = FrameUpdate {
            left,
            right,
            gesture,
            midpoint: self.aggregator.midpoint(),
        };

        self.perf.end_frame();
        self.scheduler.end_frame();
        Some(update)
    }

    /// Halt frame processing and discard temporal gesture state.
    pub fn stop(&mut self) {
        self.scheduler.stop();
        self.aggregator.reset();
    }

    /// Resume frame processing.
    pub fn start(&mut self) {
        self.scheduler.start();
    }

    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    pub fn aggregator(&self) -> &GestureAggregator {
        &self.aggregator
    }

    /// Frame timing over processed (not dropped) frames.
    pub fn perf(&self) -> &PerfMonitor {
        &self.perf
    }
}
