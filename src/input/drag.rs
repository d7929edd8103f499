//! Gesture-to-command driver.
//!
//! Consumes one [`FrameUpdate`] per frame and turns the resolved gesture
//! into board commands: grab selects and drags with grab-offset
//! preservation, two-hand pan accumulates view offsets from midpoint
//! deltas, pointing drives a hover highlight, and release finalizes a drag
//! with a single history snapshot.
//!
//! ## Grab-offset preservation
//!
//! The drag is driven by the hand's scene position each frame, not the
//! object's. At the grab transition the offset between the hand and the
//! dragged object's center is captured once and held fixed for the whole
//! drag, so the grabbed point stays glued under the hand regardless of any
//! snapping adjustment committed in between.

use tracing::debug;

use crate::board::{Board, Command};
use crate::constants::HOVER_RADIUS;
use crate::gesture::{FrameUpdate, GestureSignal};
use crate::input::coords::{CoordinateContext, CoordinateConverter, Viewport};
use crate::profile_scope;
use crate::types::HandSample;

/// Per-session driver mapping gesture updates onto a board.
#[derive(Debug, Default)]
pub struct InputHandler {
    state: super::InteractionState,
    hover: Option<u64>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &super::InteractionState {
        &self.state
    }

    /// Object currently highlighted by the pointing gesture, if any.
    ///
    /// A pointing-driven highlight takes precedence over any passive
    /// proximity highlight the application might compute.
    pub fn hover(&self) -> Option<u64> {
        self.hover
    }

    /// Process one frame's gesture against the board.
    pub fn handle_frame(&mut self, update: &FrameUpdate, viewport: &Viewport, board: &mut Board) {
        profile_scope!("handle_frame");

        if update.gesture != GestureSignal::Pointing {
            self.hover = None;
        }

        match update.gesture {
            GestureSignal::Grab => self.handle_grab(update, viewport, board),
            GestureSignal::Pan => self.handle_pan(update, viewport, board),
            GestureSignal::Pointing => self.handle_pointing(update, viewport, board),
            GestureSignal::Release => self.finish_session(board),
            // A grab that degrades to none (e.g. a fist mid-drag) keeps the
            // session alive until an explicit release; re-pinching resumes
            // the same drag with the same grab offset.
            GestureSignal::None => {}
        }
    }

    /// Abort any session without committing a snapshot.
    pub fn reset(&mut self) {
        self.state.reset();
        self.hover = None;
    }

    fn handle_grab(&mut self, update: &FrameUpdate, viewport: &Viewport, board: &mut Board) {
        let Some(hand) = pinching_hand(update) else {
            return;
        };
        let ctx = CoordinateContext::new(&board.view());
        let (scene_x, scene_y) =
            CoordinateConverter::normalized_to_scene((hand.x, hand.y), viewport, &ctx);

        if self.state.is_panning() {
            self.state.reset();
        }

        if let (Some(object_id), Some(offset)) =
            (self.state.dragged_object(), self.state.grab_offset())
        {
            // Ongoing drag: target keeps the grabbed point under the hand.
            let Some(object) = board.get_object(object_id) else {
                // Dragged object vanished (e.g. deleted by a command mid-drag).
                self.state.reset();
                return;
            };
            let target_x = scene_x - offset.0 - object.width / 2.0;
            let target_y = scene_y - offset.1 - object.height / 2.0;
            if board.apply(Command::Move {
                id: object_id,
                x: target_x,
                y: target_y,
            }) {
                self.state.mark_moved();
            }
            return;
        }

        // Grab transition: hit-test and capture the grab offset once.
        let Some(object_id) = board.object_at(scene_x, scene_y) else {
            return;
        };
        let Some(object) = board.get_object(object_id) else {
            return;
        };
        let (center_x, center_y) = object.center();
        let grab_offset = (scene_x - center_x, scene_y - center_y);

        board.apply(Command::Select {
            id: Some(object_id),
        });
        self.state.start_dragging(object_id, grab_offset);
        debug!(object_id, ?grab_offset, "drag started");
    }

    fn handle_pan(&mut self, update: &FrameUpdate, viewport: &Viewport, board: &mut Board) {
        let Some(midpoint) = update.midpoint else {
            return;
        };
        let screen_mid = CoordinateConverter::normalized_to_screen(midpoint, viewport);

        if self.state.is_dragging() {
            self.finish_session(board);
        }

        match self.state.last_midpoint() {
            Some(last) => {
                let dx = screen_mid.0 - last.0;
                let dy = screen_mid.1 - last.1;
                board.apply(Command::Pan { dx, dy });
                self.state.update_midpoint(screen_mid);
            }
            None => self.state.start_panning(screen_mid),
        }
    }

    fn handle_pointing(&mut self, update: &FrameUpdate, viewport: &Viewport, board: &mut Board) {
        self.finish_session(board);

        let Some(hand) = pointing_hand(update) else {
            self.hover = None;
            return;
        };
        let ctx = CoordinateContext::new(&board.view());
        let (scene_x, scene_y) =
            CoordinateConverter::normalized_to_scene((hand.x, hand.y), viewport, &ctx);
        self.hover = board.nearest_object(scene_x, scene_y, HOVER_RADIUS);
    }

    /// End any active session. A drag that committed at least one move is
    /// snapshotted exactly once, here, rather than per move tick.
    fn finish_session(&mut self, board: &mut Board) {
        if self.state.drag_moved() {
            board.apply(Command::Snapshot);
            debug!(object_id = self.state.dragged_object(), "drag finished");
        }
        board.clear_snap_guides();
        self.state.reset();
    }
}

/// The single pinching hand backing a `Grab`.
fn pinching_hand(update: &FrameUpdate) -> Option<&HandSample> {
    match (&update.left, &update.right) {
        (Some(h), _) if h.is_pinch => Some(h),
        (_, Some(h)) if h.is_pinch => Some(h),
        _ => None,
    }
}

/// The pointing hand; the right hand wins when both point.
fn pointing_hand(update: &FrameUpdate) -> Option<&HandSample> {
    match (&update.left, &update.right) {
        (_, Some(h)) if h.is_pointing => Some(h),
        (Some(h), _) if h.is_pointing => Some(h),
        _ => None,
    }
}
