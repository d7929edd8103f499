//! Canvas engine - the direct-manipulation scene graph.
//!
//! The [`Board`] owns the object collection (insertion order is z-order),
//! the selection, the pan/zoom view transform, the current snap guides, and
//! the undo/redo history. All mutation goes through the [`Command`] table;
//! every command application is atomic and total: a command whose
//! precondition fails leaves the board untouched and reports `false`, it
//! never panics.
//!
//! History snapshots are explicit: structural and visual mutations become
//! undoable only when the caller follows them with [`Command::Snapshot`].
//! `Move` is deliberately not snapshotted per tick; callers snapshot once,
//! on gesture release, after a drag completes.
//!
//! ## Modules
//!
//! - `history` - Truncate-and-append snapshot log for linear undo/redo
//! - `snapping` - Per-axis alignment snapping with grid fallback

pub mod history;
pub mod snapping;

use tracing::debug;

use crate::constants::{DUPLICATE_OFFSET, MAX_ZOOM, MIN_ZOOM};
use crate::spatial_index::SpatialIndex;
use crate::types::{CanvasObject, ObjectKind, SnapGuide, ViewTransform, snap_to_grid};

use history::History;

/// Every operation the canvas engine accepts.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Append a new object at a grid-snapped position and select it
    Create { kind: ObjectKind, x: f64, y: f64 },
    /// Move an unlocked object to a snapped position, updating guides
    Move { id: u64, x: f64, y: f64 },
    /// Remove an object, clearing any selection/guides that referenced it
    Delete { id: u64 },
    /// Insert an offset copy with a fresh id and select it
    Duplicate { id: u64 },
    Recolor { id: u64, color: String },
    Retext { id: u64, text: String },
    Lock { id: u64 },
    Unlock { id: u64 },
    /// Set or clear the selection
    Select { id: Option<u64> },
    /// Accumulate a pan delta in screen pixels
    Pan { dx: f64, dy: f64 },
    /// Adjust zoom by a delta, clamped to the zoom bounds
    Zoom { delta: f64 },
    /// Restore pan to the origin and zoom to the default
    ResetView,
    /// Record the current object collection in history
    Snapshot,
    Undo,
    Redo,
}

impl Command {
    pub fn label(&self) -> &'static str {
        match self {
            Command::Create { .. } => "create",
            Command::Move { .. } => "move",
            Command::Delete { .. } => "delete",
            Command::Duplicate { .. } => "duplicate",
            Command::Recolor { .. } => "recolor",
            Command::Retext { .. } => "retext",
            Command::Lock { .. } => "lock",
            Command::Unlock { .. } => "unlock",
            Command::Select { .. } => "select",
            Command::Pan { .. } => "pan",
            Command::Zoom { .. } => "zoom",
            Command::ResetView => "reset_view",
            Command::Snapshot => "snapshot",
            Command::Undo => "undo",
            Command::Redo => "redo",
        }
    }
}

/// The whole canvas state for one session.
#[derive(Debug)]
pub struct Board {
    objects: Vec<CanvasObject>,
    selected: Option<u64>,
    view: ViewTransform,
    snap_guides: Vec<SnapGuide>,
    history: History,
    index: SpatialIndex,
    next_object_id: u64,
}

impl Board {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            selected: None,
            view: ViewTransform::default(),
            snap_guides: Vec::new(),
            history: History::new(Vec::new()),
            index: SpatialIndex::new(),
            next_object_id: 1,
        }
    }

    // ------------------------------------------------------------------
    // Command dispatch
    // ------------------------------------------------------------------

    /// Apply one command. Returns `true` if the board changed (or the
    /// command was a valid no-op like selecting nothing), `false` when a
    /// precondition rejected it.
    pub fn apply(&mut self, command: Command) -> bool {
        let label = command.label();
        let applied = match command {
            Command::Create { kind, x, y } => {
                self.create_object(kind, x, y);
                true
            }
            Command::Move { id, x, y } => self.move_object(id, x, y),
            Command::Delete { id } => self.delete_object(id),
            Command::Duplicate { id } => self.duplicate_object(id).is_some(),
            Command::Recolor { id, color } => self.recolor_object(id, color),
            Command::Retext { id, text } => self.retext_object(id, text),
            Command::Lock { id } => self.set_locked(id, true),
            Command::Unlock { id } => self.set_locked(id, false),
            Command::Select { id } => self.select(id),
            Command::Pan { dx, dy } => {
                self.pan(dx, dy);
                true
            }
            Command::Zoom { delta } => {
                self.zoom_by(delta);
                true
            }
            Command::ResetView => {
                self.reset_view();
                true
            }
            Command::Snapshot => {
                self.push_history();
                true
            }
            Command::Undo => self.undo(),
            Command::Redo => self.redo(),
        };
        if applied {
            debug!(command = label, "applied");
        } else {
            debug!(command = label, "rejected");
        }
        applied
    }

    // ------------------------------------------------------------------
    // Object mutation
    // ------------------------------------------------------------------

    /// Append a new object at a grid-snapped position with kind defaults,
    /// select it, and clear snap guides. Returns the fresh id.
    pub fn create_object(&mut self, kind: ObjectKind, x: f64, y: f64) -> u64 {
        let id = self.next_object_id;
        self.next_object_id += 1;

        let object = CanvasObject::new(id, kind, x, y);
        self.index.insert(&object);
        self.objects.push(object);
        self.selected = Some(id);
        self.snap_guides.clear();
        id
    }

    /// Move an unlocked object toward `(x, y)`, running the snapping engine
    /// against the rest of the scene and committing the adjusted position.
    pub fn move_object(&mut self, id: u64, x: f64, y: f64) -> bool {
        let Some(object) = self.objects.iter().find(|o| o.id == id) else {
            return false;
        };
        if object.locked {
            return false;
        }

        let result = snapping::snap_position(object, x, y, &self.objects);
        // Precondition checked above; re-borrow mutably to commit.
        if let Some(object) = self.objects.iter_mut().find(|o| o.id == id) {
            object.x = result.x;
            object.y = result.y;
            self.index.insert(object);
        }
        self.snap_guides = result.guides;
        true
    }

    /// Remove an object, clearing stale selection and guides.
    pub fn delete_object(&mut self, id: u64) -> bool {
        let Some(position) = self.objects.iter().position(|o| o.id == id) else {
            return false;
        };
        self.objects.remove(position);
        self.index.remove(id);
        if self.selected == Some(id) {
            self.selected = None;
        }
        self.snap_guides
            .retain(|g| g.from_id != id && g.to_id != id);
        true
    }

    /// Insert a copy of an object with a fresh id, offset and grid-snapped,
    /// select the copy, and clear snap guides. Returns the copy's id.
    pub fn duplicate_object(&mut self, id: u64) -> Option<u64> {
        let source = self.objects.iter().find(|o| o.id == id)?.clone();

        let copy_id = self.next_object_id;
        self.next_object_id += 1;

        let mut copy = source;
        copy.id = copy_id;
        copy.x = snap_to_grid(copy.x + DUPLICATE_OFFSET);
        copy.y = snap_to_grid(copy.y + DUPLICATE_OFFSET);

        self.index.insert(&copy);
        self.objects.push(copy);
        self.selected = Some(copy_id);
        self.snap_guides.clear();
        Some(copy_id)
    }

    pub fn recolor_object(&mut self, id: u64, color: String) -> bool {
        match self.objects.iter_mut().find(|o| o.id == id) {
            Some(object) => {
                object.color = color;
                true
            }
            None => false,
        }
    }

    pub fn retext_object(&mut self, id: u64, text: String) -> bool {
        match self.objects.iter_mut().find(|o| o.id == id) {
            Some(object) => {
                object.text = Some(text);
                true
            }
            None => false,
        }
    }

    pub fn set_locked(&mut self, id: u64, locked: bool) -> bool {
        match self.objects.iter_mut().find(|o| o.id == id) {
            Some(object) => {
                object.locked = locked;
                true
            }
            None => false,
        }
    }

    // ------------------------------------------------------------------
    // Selection and view
    // ------------------------------------------------------------------

    /// Set or clear the selection; clears snap guides. Selecting an id not
    /// present in the scene is rejected.
    pub fn select(&mut self, id: Option<u64>) -> bool {
        if let Some(id) = id {
            if !self.objects.iter().any(|o| o.id == id) {
                return false;
            }
        }
        self.selected = id;
        self.snap_guides.clear();
        true
    }

    /// Accumulate a pan delta; clears snap guides.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.view.pan_x += dx;
        self.view.pan_y += dy;
        self.snap_guides.clear();
    }

    /// Adjust zoom by a delta, silently clamped to `[MIN_ZOOM, MAX_ZOOM]`.
    pub fn zoom_by(&mut self, delta: f64) {
        self.view.zoom = (self.view.zoom + delta).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Pan back to the origin and restore the default zoom.
    pub fn reset_view(&mut self) {
        self.view = ViewTransform::default();
    }

    /// Drop any alignment guides, as on gesture release.
    pub fn clear_snap_guides(&mut self) {
        self.snap_guides.clear();
    }

    // ------------------------------------------------------------------
    // History
    // ------------------------------------------------------------------

    /// Record the current object collection as an undo point.
    pub fn push_history(&mut self) {
        self.history.push(&self.objects);
    }

    /// Restore the previous history snapshot. Clears selection and guides,
    /// since their referents may no longer exist.
    pub fn undo(&mut self) -> bool {
        let Some(objects) = self.history.undo() else {
            return false;
        };
        self.restore(objects);
        true
    }

    /// Restore the next history snapshot.
    pub fn redo(&mut self) -> bool {
        let Some(objects) = self.history.redo() else {
            return false;
        };
        self.restore(objects);
        true
    }

    fn restore(&mut self, objects: Vec<CanvasObject>) {
        self.objects = objects;
        self.selected = None;
        self.snap_guides.clear();
        self.index.rebuild(&self.objects);
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn get_object(&self, id: u64) -> Option<&CanvasObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    /// Topmost object whose bounds contain the scene-space point.
    /// Z-order is insertion order, so later objects win.
    pub fn object_at(&self, x: f64, y: f64) -> Option<u64> {
        let hits = self.index.query_point(x, y);
        self.objects
            .iter()
            .rev()
            .find(|o| hits.contains(&o.id))
            .map(|o| o.id)
    }

    /// Object nearest to the scene-space point, within `max_distance` of
    /// its bounds.
    pub fn nearest_object(&self, x: f64, y: f64, max_distance: f64) -> Option<u64> {
        self.index.nearest(x, y, max_distance)
    }

    pub fn objects(&self) -> &[CanvasObject] {
        &self.objects
    }

    pub fn selected(&self) -> Option<u64> {
        self.selected
    }

    pub fn view(&self) -> ViewTransform {
        self.view
    }

    pub fn snap_guides(&self) -> &[SnapGuide] {
        &self.snap_guides
    }

    pub fn history(&self) -> &History {
        &self.history
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
