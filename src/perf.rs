//! Performance monitoring utilities.
//!
//! The gesture pipeline runs once per captured video frame, so the budget
//! for classification plus command application is one frame interval. This
//! module provides frame timing with rolling averages and RAII scoped
//! timers for the hot paths, compiled to nothing unless the `profiling`
//! feature is enabled.
//!
//! ```ignore
//! use handboard::profile_scope;
//!
//! fn process_frame() {
//!     profile_scope!("process_frame");
//!     // ... work ...
//! }
//! ```

use std::collections::VecDeque;
use std::time::Instant;
use tracing::warn;
#[cfg(feature = "profiling")]
use tracing::trace;

// ============================================================================
// Constants
// ============================================================================

/// Target frame time for a 30 FPS camera feed
pub const TARGET_FRAME_MS: f64 = 33.3;

/// Number of samples to keep for rolling averages
const SAMPLE_COUNT: usize = 60;

/// Threshold multiplier for warning (e.g., 2.0 = warn if frame takes 2x target)
const WARN_THRESHOLD: f64 = 2.0;

// ============================================================================
// Profiling Macro (zero-cost when disabled)
// ============================================================================

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name; // Suppress unused variable warning
    };
}

pub use profile_scope;

// ============================================================================
// Scoped Timer
// ============================================================================

/// RAII timer that traces its elapsed time when dropped.
#[cfg(feature = "profiling")]
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
}

#[cfg(feature = "profiling")]
impl ScopedTimer {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            start: Instant::now(),
        }
    }
}

#[cfg(feature = "profiling")]
impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let ms = self.start.elapsed().as_secs_f64() * 1000.0;
        trace!(scope = self.name, elapsed_ms = ms, "scope timing");
    }
}

// ============================================================================
// Frame Performance Monitor
// ============================================================================

/// Rolling frame-time tracker for the per-frame gesture pipeline.
#[derive(Debug, Default)]
pub struct PerfMonitor {
    /// Recent frame times in milliseconds
    frame_times: VecDeque<f64>,
    /// When the current frame started
    frame_start: Option<Instant>,
    /// Count of frames that exceeded the warning threshold
    slow_frame_count: u64,
    /// Total frames tracked
    total_frames: u64,
}

impl PerfMonitor {
    pub fn new() -> Self {
        Self {
            frame_times: VecDeque::with_capacity(SAMPLE_COUNT),
            frame_start: None,
            slow_frame_count: 0,
            total_frames: 0,
        }
    }

    /// Mark the start of a frame.
    pub fn begin_frame(&mut self) {
        self.frame_start = Some(Instant::now());
    }

    /// Mark the end of a frame and record timing.
    /// Returns the frame time in milliseconds.
    pub fn end_frame(&mut self) -> Option<f64> {
        let start = self.frame_start.take()?;
        let ms = start.elapsed().as_secs_f64() * 1000.0;

        if self.frame_times.len() >= SAMPLE_COUNT {
            self.frame_times.pop_front();
        }
        self.frame_times.push_back(ms);
        self.total_frames += 1;

        if ms > TARGET_FRAME_MS * WARN_THRESHOLD {
            self.slow_frame_count += 1;
            warn!(elapsed_ms = ms, "slow frame");
        }

        Some(ms)
    }

    /// Average frame time over recent samples, in milliseconds.
    pub fn average_ms(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        self.frame_times.iter().sum::<f64>() / self.frame_times.len() as f64
    }

    /// Effective frames per second over recent samples.
    pub fn fps(&self) -> f64 {
        let avg = self.average_ms();
        if avg > 0.0 { 1000.0 / avg } else { 0.0 }
    }

    pub fn slow_frames(&self) -> u64 {
        self.slow_frame_count
    }

    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }
}
