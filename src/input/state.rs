//! Interaction state machine.
//!
//! A single explicit state for the gesture-driven manipulation session,
//! replacing scattered "am I dragging" flags and making impossible states
//! unrepresentable.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> DraggingObject  (grab resolved over an object)
//! Idle -> Panning         (two-hand pan resolved)
//! Any  -> Idle            (release, or pan/pointing ending a session)
//! ```

/// Current manipulation session, if any.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InteractionState {
    /// No active manipulation
    #[default]
    Idle,

    /// A grab is dragging one object
    DraggingObject {
        /// Object being dragged
        object_id: u64,
        /// Fixed vector from the object's center to the hand's scene
        /// position, captured once at the grab transition
        grab_offset: (f64, f64),
        /// Whether any move committed during this session (gates the
        /// release-time history snapshot)
        moved: bool,
    },

    /// A two-hand pinch is panning the view
    Panning {
        /// Last midpoint in screen pixels, for delta computation
        last_midpoint: (f64, f64),
    },
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::DraggingObject { .. })
    }

    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }

    /// Get the object id being dragged, if any.
    pub fn dragged_object(&self) -> Option<u64> {
        match self {
            Self::DraggingObject { object_id, .. } => Some(*object_id),
            _ => None,
        }
    }

    /// Get the grab offset, if dragging.
    pub fn grab_offset(&self) -> Option<(f64, f64)> {
        match self {
            Self::DraggingObject { grab_offset, .. } => Some(*grab_offset),
            _ => None,
        }
    }

    /// Whether the current drag session has committed a move.
    pub fn drag_moved(&self) -> bool {
        matches!(self, Self::DraggingObject { moved: true, .. })
    }

    /// Get the last pan midpoint, if panning.
    pub fn last_midpoint(&self) -> Option<(f64, f64)> {
        match self {
            Self::Panning { last_midpoint } => Some(*last_midpoint),
            _ => None,
        }
    }

    /// Start dragging an object with the given grab offset.
    pub fn start_dragging(&mut self, object_id: u64, grab_offset: (f64, f64)) {
        *self = Self::DraggingObject {
            object_id,
            grab_offset,
            moved: false,
        };
    }

    /// Record that a move committed during the current drag.
    pub fn mark_moved(&mut self) {
        if let Self::DraggingObject { moved, .. } = self {
            *moved = true;
        }
    }

    /// Start a two-hand pan from the given screen-space midpoint.
    pub fn start_panning(&mut self, midpoint: (f64, f64)) {
        *self = Self::Panning {
            last_midpoint: midpoint,
        };
    }

    /// Update the pan midpoint.
    pub fn update_midpoint(&mut self, midpoint: (f64, f64)) {
        if let Self::Panning { last_midpoint } = self {
            *last_midpoint = midpoint;
        }
    }

    /// Reset to Idle.
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
