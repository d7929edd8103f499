//! Landmark pose classifier.
//!
//! Pure predicates over one hand's landmark list. Each predicate is
//! independent and re-evaluated every frame; combination logic lives in the
//! aggregator. Every predicate fails closed: a landmark list too short for
//! the geometry it needs yields `false`, never a panic.

use crate::constants::PINCH_DISTANCE_THRESHOLD;
use crate::tracker::{Landmark, landmarks};
use crate::types::HandSample;

/// Whether a fingertip is extended relative to its proximal joint.
///
/// Normalized y grows downward, so an extended (upward-pointing) fingertip
/// sits at a smaller y than its joint.
fn finger_extended(points: &[Landmark], tip: usize, pip: usize) -> Option<bool> {
    Some(points.get(tip)?.y < points.get(pip)?.y)
}

/// Index and middle fingertips both curled below their proximal joints.
pub fn is_fist(points: &[Landmark]) -> bool {
    let index = finger_extended(points, landmarks::INDEX_FINGER_TIP, landmarks::INDEX_FINGER_PIP);
    let middle = finger_extended(
        points,
        landmarks::MIDDLE_FINGER_TIP,
        landmarks::MIDDLE_FINGER_PIP,
    );
    matches!((index, middle), (Some(false), Some(false)))
}

/// Index and middle fingertips both extended above their proximal joints.
pub fn is_open(points: &[Landmark]) -> bool {
    let index = finger_extended(points, landmarks::INDEX_FINGER_TIP, landmarks::INDEX_FINGER_PIP);
    let middle = finger_extended(
        points,
        landmarks::MIDDLE_FINGER_TIP,
        landmarks::MIDDLE_FINGER_PIP,
    );
    matches!((index, middle), (Some(true), Some(true)))
}

/// Thumb tip and index tip within the pinch distance threshold, measured in
/// the same normalized space as the input coordinates.
pub fn is_pinch(points: &[Landmark]) -> bool {
    let (Some(thumb), Some(index)) = (
        points.get(landmarks::THUMB_TIP),
        points.get(landmarks::INDEX_FINGER_TIP),
    ) else {
        return false;
    };
    thumb.distance(index) < PINCH_DISTANCE_THRESHOLD
}

/// Index fingertip extended while middle, ring, and pinky are all curled.
pub fn is_pointing(points: &[Landmark]) -> bool {
    let index = finger_extended(points, landmarks::INDEX_FINGER_TIP, landmarks::INDEX_FINGER_PIP);
    let middle = finger_extended(
        points,
        landmarks::MIDDLE_FINGER_TIP,
        landmarks::MIDDLE_FINGER_PIP,
    );
    let ring = finger_extended(points, landmarks::RING_FINGER_TIP, landmarks::RING_FINGER_PIP);
    let pinky = finger_extended(points, landmarks::PINKY_TIP, landmarks::PINKY_PIP);
    matches!(
        (index, middle, ring, pinky),
        (Some(true), Some(false), Some(false), Some(false))
    )
}

/// Classify one hand's landmark list into a [`HandSample`].
///
/// The sample position is the wrist anchor; a list missing even the wrist
/// classifies as an all-false sample at the origin.
pub fn classify(points: &[Landmark]) -> HandSample {
    let wrist = points
        .get(landmarks::WRIST)
        .copied()
        .unwrap_or_default();
    HandSample {
        x: wrist.x,
        y: wrist.y,
        is_fist: is_fist(points),
        is_open: is_open(points),
        is_pinch: is_pinch(points),
        is_pointing: is_pointing(points),
    }
}
