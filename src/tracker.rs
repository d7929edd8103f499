//! Tracker boundary types.
//!
//! The landmark-producing tracker is an external collaborator: once per video
//! frame it delivers zero or more hands, each as an ordered list of normalized
//! 2D landmark points plus a camera-relative handedness label. This module
//! defines that boundary and nothing else; classification lives in
//! [`crate::gesture`].

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::constants::MIN_LANDMARKS;

/// Hand landmark indices (21-point hand landmark model convention).
pub mod landmarks {
    pub const WRIST: usize = 0;
    pub const THUMB_TIP: usize = 4;
    pub const INDEX_FINGER_PIP: usize = 6;
    pub const INDEX_FINGER_TIP: usize = 8;
    pub const MIDDLE_FINGER_PIP: usize = 10;
    pub const MIDDLE_FINGER_TIP: usize = 12;
    pub const RING_FINGER_PIP: usize = 14;
    pub const RING_FINGER_TIP: usize = 16;
    pub const PINKY_PIP: usize = 18;
    pub const PINKY_TIP: usize = 20;
}

/// A single tracked 2D point on a hand, normalized to `[0,1]` of frame size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
}

impl Landmark {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another landmark, in normalized space.
    pub fn distance(&self, other: &Landmark) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Camera-relative handedness label reported by the tracker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub enum Handedness {
    Left,
    Right,
}

impl Handedness {
    /// Flip the label to the user's own left/right.
    ///
    /// The video feed is mirrored for a front-facing view, so the raw
    /// camera-relative label is the opposite of the user's hand.
    pub fn mirrored(self) -> Self {
        match self {
            Handedness::Left => Handedness::Right,
            Handedness::Right => Handedness::Left,
        }
    }
}

/// One hand as delivered by the tracker.
#[derive(Clone, Debug, Deserialize)]
pub struct TrackedHand {
    /// Ordered landmark list; index meaning follows [`landmarks`]
    pub landmarks: Vec<Landmark>,
    /// Camera-relative label; see [`Handedness::mirrored`]
    #[serde(rename = "handednessLabel")]
    pub handedness: Handedness,
}

/// One tracker callback's payload: zero, one, or two hands.
///
/// Hand order is not guaranteed stable across frames; consumers must assign
/// left/right roles from the (mirrored) handedness label, never from position
/// in the list.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TrackerFrame {
    #[serde(default)]
    pub hands: Vec<TrackedHand>,
}

impl TrackerFrame {
    /// Decode a frame from the tracker's JSON message format.
    pub fn from_json(payload: &str) -> TrackerResult<Self> {
        if payload.trim().is_empty() {
            return Err(TrackerError::EmptyPayload);
        }
        let frame: TrackerFrame = serde_json::from_str(payload)?;
        if frame.hands.len() > 2 {
            return Err(TrackerError::TooManyHands {
                count: frame.hands.len(),
            });
        }
        for hand in &frame.hands {
            // Short lists are not an error; the pose predicates fail closed.
            if hand.landmarks.len() < MIN_LANDMARKS {
                debug!(count = hand.landmarks.len(), "short landmark list in frame");
            }
        }
        Ok(frame)
    }
}

/// Errors that can occur at the tracker boundary.
#[derive(Error, Debug)]
pub enum TrackerError {
    /// JSON decode error from serde_json
    #[error("frame decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The tracker sent an empty message
    #[error("empty tracker payload")]
    EmptyPayload,

    /// More simultaneous hands than the pipeline supports
    #[error("too many hands: {count} (max 2)")]
    TooManyHands { count: usize },
}

/// Result type alias for tracker boundary operations.
pub type TrackerResult<T> = Result<T, TrackerError>;
