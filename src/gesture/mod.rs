//! Gesture classification pipeline.
//!
//! Turns the tracker's noisy, independently-sampled landmark sets for up to
//! two hands into a single stable discrete gesture signal per frame.
//!
//! ## Modules
//!
//! - `pose` - Pure boolean pose predicates over one hand's landmarks
//! - `aggregator` - Priority-ordered reduction to one gesture, with hysteresis
//! - `scheduler` - Re-entrancy gate implementing the drop-not-queue policy
//! - `pipeline` - Per-frame driver combining the above

pub mod aggregator;
pub mod pipeline;
pub mod pose;
pub mod scheduler;

pub use aggregator::{GestureAggregator, GestureSignal, resolve_gesture};
pub use pipeline::{FramePipeline, FrameUpdate};
pub use scheduler::FrameScheduler;
