//! Linear undo/redo history.
//!
//! An append-only-with-truncation log of full object-collection snapshots.
//! Snapshots are value copies (`Vec<CanvasObject>` clones), so later mutation
//! of the live collection can never retroactively alter a stored state.
//! Undo/redo never mutate the log, only replay from it.
//!
//! Invariant: `0 <= index < snapshots.len()` at all times; the log is seeded
//! with the collection's state at creation.

use crate::constants::MAX_HISTORY_STATES;
use crate::types::CanvasObject;

#[derive(Clone, Debug)]
pub struct History {
    snapshots: Vec<Vec<CanvasObject>>,
    index: usize,
}

impl History {
    /// Seed the log with the initial collection state.
    pub fn new(initial: Vec<CanvasObject>) -> Self {
        Self {
            snapshots: vec![initial],
            index: 0,
        }
    }

    /// Record a new snapshot: truncate any redo future, append a deep copy,
    /// and evict the oldest state once the cap is reached.
    pub fn push(&mut self, objects: &[CanvasObject]) {
        self.snapshots.truncate(self.index + 1);
        self.snapshots.push(objects.to_vec());
        if self.snapshots.len() > MAX_HISTORY_STATES {
            // Front eviction releases the popped snapshot immediately.
            self.snapshots.remove(0);
        }
        self.index = self.snapshots.len() - 1;
    }

    /// Step back one snapshot, returning a copy of the restored state.
    pub fn undo(&mut self) -> Option<Vec<CanvasObject>> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        Some(self.snapshots[self.index].clone())
    }

    /// Step forward one snapshot, returning a copy of the restored state.
    pub fn redo(&mut self) -> Option<Vec<CanvasObject>> {
        if self.index + 1 >= self.snapshots.len() {
            return None;
        }
        self.index += 1;
        Some(self.snapshots[self.index].clone())
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.snapshots.len()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
