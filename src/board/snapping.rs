//! Alignment snapping engine.
//!
//! Given a dragged object's dimensions, a proposed top-left position, and the
//! rest of the scene, computes an adjusted position plus the guides that
//! produced it. Each axis is resolved independently: a vertical and a
//! horizontal snap may both apply, each to a different reference object.
//! Locked objects never act as snap targets. An axis with no alignment
//! candidate falls back to grid snapping.

use crate::constants::SNAP_THRESHOLD;
use crate::types::{Axis, CanvasObject, Edge, SnapGuide, snap_to_grid};

/// Adjusted drag position and the alignments that produced it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SnapResult {
    pub x: f64,
    pub y: f64,
    pub guides: Vec<SnapGuide>,
}

/// The three alignment features of an object extent on one axis:
/// leading edge, trailing edge, center.
fn features(start: f64, extent: f64, axis: Axis) -> [(Edge, f64); 3] {
    match axis {
        Axis::Vertical => [
            (Edge::Left, start),
            (Edge::Right, start + extent),
            (Edge::CenterX, start + extent / 2.0),
        ],
        Axis::Horizontal => [
            (Edge::Top, start),
            (Edge::Bottom, start + extent),
            (Edge::CenterY, start + extent / 2.0),
        ],
    }
}

struct Candidate {
    distance: f64,
    shift: f64,
    guide: SnapGuide,
}

/// Resolve one axis: the candidate with the smallest absolute distance wins
/// (ties stand with the first found in iteration order). Returns the
/// adjusted start coordinate and the winning guide, or grid-snaps on no
/// candidate.
fn resolve_axis(
    dragged_id: u64,
    start: f64,
    extent: f64,
    axis: Axis,
    others: &[CanvasObject],
) -> (f64, Option<SnapGuide>) {
    let mut best: Option<Candidate> = None;

    for other in others {
        if other.id == dragged_id || other.locked {
            continue;
        }
        let (other_start, other_extent) = match axis {
            Axis::Vertical => (other.x, other.width),
            Axis::Horizontal => (other.y, other.height),
        };
        for (from_edge, from_pos) in features(start, extent, axis) {
            for (to_edge, to_pos) in features(other_start, other_extent, axis) {
                let distance = (from_pos - to_pos).abs();
                if distance >= SNAP_THRESHOLD {
                    continue;
                }
                if best.as_ref().is_some_and(|b| b.distance <= distance) {
                    continue;
                }
                best = Some(Candidate {
                    distance,
                    shift: to_pos - from_pos,
                    guide: SnapGuide {
                        axis,
                        position: to_pos,
                        from_id: dragged_id,
                        from_edge,
                        to_id: other.id,
                        to_edge,
                    },
                });
            }
        }
    }

    match best {
        Some(candidate) => (start + candidate.shift, Some(candidate.guide)),
        None => (snap_to_grid(start), None),
    }
}

/// Compute the snapped position for a dragged object proposed at `(x, y)`.
pub fn snap_position(
    dragged: &CanvasObject,
    x: f64,
    y: f64,
    others: &[CanvasObject],
) -> SnapResult {
    let (snapped_x, guide_x) = resolve_axis(dragged.id, x, dragged.width, Axis::Vertical, others);
    let (snapped_y, guide_y) =
        resolve_axis(dragged.id, y, dragged.height, Axis::Horizontal, others);

    let mut guides = Vec::with_capacity(2);
    guides.extend(guide_x);
    guides.extend(guide_y);

    SnapResult {
        x: snapped_x,
        y: snapped_y,
        guides,
    }
}
