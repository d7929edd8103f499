//! Gesture aggregator.
//!
//! Reduces the per-hand predicate pair for a frame into exactly one
//! [`GestureSignal`], applying a fixed priority order and one piece of
//! temporal memory: the previous frame's resolved gesture. That memory is
//! what turns a grab that loses tracking into an explicit `Release` instead
//! of silently evaporating into `None`.
//!
//! ## Priority order (highest first)
//!
//! 1. Both hands pinching        -> `Pan` (midpoint retained for the caller)
//! 2. Exactly one hand pinching  -> `Grab`
//! 3. Either hand pointing       -> `Pointing`
//! 4. Previous was `Grab`, now a hand is open or both absent -> `Release`
//! 5. Exactly one hand present and open -> `Release`
//! 6. Otherwise                  -> `None`

use tracing::debug;

use crate::types::HandSample;

/// The single discrete manipulation intent resolved for a frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GestureSignal {
    Grab,
    Pan,
    Pointing,
    Release,
    #[default]
    None,
}

impl GestureSignal {
    pub fn label(&self) -> &'static str {
        match self {
            GestureSignal::Grab => "grab",
            GestureSignal::Pan => "pan",
            GestureSignal::Pointing => "pointing",
            GestureSignal::Release => "release",
            GestureSignal::None => "none",
        }
    }
}

/// Per-frame gesture resolver with release hysteresis.
///
/// State retained across frames: the previously resolved gesture and the
/// last two-hand midpoint. The midpoint is reset to unset whenever fewer
/// than two hands are pinching. Resolution is deterministic: the same
/// `(left, right, previous)` triple always yields the same output.
#[derive(Debug, Default)]
pub struct GestureAggregator {
    previous: GestureSignal,
    midpoint: Option<(f64, f64)>,
}

impl GestureAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The gesture resolved on the most recent frame.
    pub fn previous(&self) -> GestureSignal {
        self.previous
    }

    /// Current two-hand midpoint in normalized space, if both hands are
    /// pinching. Delta computation against the prior frame's midpoint is the
    /// caller's responsibility.
    pub fn midpoint(&self) -> Option<(f64, f64)> {
        self.midpoint
    }

    /// Resolve the gesture for one frame from the two optional hand samples.
    pub fn resolve(
        &mut self,
        left: Option<&HandSample>,
        right: Option<&HandSample>,
    ) -> GestureSignal {
        let gesture = resolve_gesture(left, right, self.previous);

        if gesture == GestureSignal::Pan {
            // Both hands are guaranteed present when Pan resolves.
            if let (Some(l), Some(r)) = (left, right) {
                self.midpoint = Some(((l.x + r.x) / 2.0, (l.y + r.y) / 2.0));
            }
        } else {
            self.midpoint = None;
        }

        if gesture != self.previous {
            debug!(from = self.previous.label(), to = gesture.label(), "gesture transition");
        }
        self.previous = gesture;
        gesture
    }

    /// Drop all temporal state, as if no frame had ever been seen.
    pub fn reset(&mut self) {
        self.previous = GestureSignal::None;
        self.midpoint = None;
    }
}

/// Pure decision table: `(left, right, previous) -> gesture`.
///
/// Evaluated each frame independent of which hand is which.
pub fn resolve_gesture(
    left: Option<&HandSample>,
    right: Option<&HandSample>,
    previous: GestureSignal,
) -> GestureSignal {
    let left_pinch = left.is_some_and(|h| h.is_pinch);
    let right_pinch = right.is_some_and(|h| h.is_pinch);

    if left_pinch && right_pinch {
        return GestureSignal::Pan;
    }
    if left_pinch || right_pinch {
        return GestureSignal::Grab;
    }
    if left.is_some_and(|h| h.is_pointing) || right.is_some_and(|h| h.is_pointing) {
        return GestureSignal::Pointing;
    }

    let any_open = left.is_some_and(|h| h.is_open) || right.is_some_and(|h| h.is_open);
    let no_hands = left.is_none() && right.is_none();
    if previous == GestureSignal::Grab && (any_open || no_hands) {
        return GestureSignal::Release;
    }

    // A single open hand with the other absent also reads as release.
    match (left, right) {
        (Some(h), None) | (None, Some(h)) if h.is_open => GestureSignal::Release,
        _ => GestureSignal::None,
    }
}
