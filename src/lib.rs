//! Handboard - mouseless direct manipulation of a 2D diagram board.
//!
//! A continuous stream of hand-landmark samples is classified into discrete
//! manipulation gestures, and those gestures drive selection, offset-
//! preserving drags, two-hand panning, and release of objects on a scene
//! graph with alignment snapping and linear undo/redo history.
//!
//! ## Architecture
//!
//! ```text
//! tracker frame -> gesture::pose -> gesture::GestureAggregator
//!               -> input::coords (camera -> screen -> scene)
//!               -> input::InputHandler -> board::Command -> board::Board
//!                                         board::snapping adjusts drags
//!                                         board::history on release
//! ```
//!
//! Everything is synchronous and single-threaded: one tracker callback per
//! captured video frame, frames dropped (never queued) while one is in
//! flight, and every board command atomic and total. This crate is an
//! in-process library boundary only; rendering, speech recognition, and the
//! tracker itself live in the surrounding application.

pub mod board;
pub mod constants;
pub mod gesture;
pub mod input;
pub mod perf;
pub mod spatial_index;
pub mod tracker;
pub mod types;

pub use board::{Board, Command};
pub use gesture::{FramePipeline, FrameUpdate, GestureSignal};
pub use input::{InputHandler, InteractionState};
pub use tracker::TrackerFrame;
pub use types::{CanvasObject, HandSample, ObjectKind, SnapGuide};
