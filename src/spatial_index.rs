//! Spatial Index Module
//!
//! R-tree based spatial indexing over object bounds, used for hit testing
//! when a grab starts (which object is under the hand) and nearest-object
//! search for the pointing hover highlight. Reduces both from O(n) scans to
//! O(log n) queries.

use rstar::{AABB, PointDistance, RTree, RTreeObject};
use std::collections::HashMap;

use crate::types::CanvasObject;

/// A spatial entry representing one object's bounding box.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub object_id: u64,
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl SpatialEntry {
    pub fn new(object: &CanvasObject) -> Self {
        Self {
            object_id: object.id,
            min_x: object.x,
            min_y: object.y,
            max_x: object.x + object.width,
            max_y: object.y + object.height,
        }
    }

    #[inline]
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PointDistance for SpatialEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        self.envelope().distance_2(point)
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.object_id == other.object_id
    }
}

/// Spatial index over scene objects using an R-tree.
#[derive(Debug, Default)]
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<u64, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    /// Build an index from a slice of objects.
    pub fn from_objects(objects: &[CanvasObject]) -> Self {
        let entries: Vec<SpatialEntry> = objects.iter().map(SpatialEntry::new).collect();
        let entries_map: HashMap<u64, SpatialEntry> =
            entries.iter().map(|e| (e.object_id, *e)).collect();

        Self {
            tree: RTree::bulk_load(entries),
            entries: entries_map,
        }
    }

    /// Insert or replace the entry for one object.
    pub fn insert(&mut self, object: &CanvasObject) {
        if let Some(old_entry) = self.entries.remove(&object.id) {
            self.tree.remove(&old_entry);
        }

        let entry = SpatialEntry::new(object);
        self.tree.insert(entry);
        self.entries.insert(object.id, entry);
    }

    pub fn remove(&mut self, object_id: u64) -> bool {
        if let Some(entry) = self.entries.remove(&object_id) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    /// Query all objects whose bounds contain the given scene-space point.
    pub fn query_point(&self, x: f64, y: f64) -> Vec<u64> {
        let point_envelope = AABB::from_point([x, y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(x, y))
            .map(|entry| entry.object_id)
            .collect()
    }

    /// Query all objects intersecting a rectangular region.
    pub fn query_rect(&self, min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Vec<u64> {
        let envelope = AABB::from_corners([min_x, min_y], [max_x, max_y]);

        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| entry.object_id)
            .collect()
    }

    /// The object whose bounds are nearest to the point, within `max_distance`.
    pub fn nearest(&self, x: f64, y: f64, max_distance: f64) -> Option<u64> {
        let entry = self.tree.nearest_neighbor(&[x, y])?;
        if entry.distance_2(&[x, y]) <= max_distance * max_distance {
            Some(entry.object_id)
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace the whole index contents from a slice of objects.
    pub fn rebuild(&mut self, objects: &[CanvasObject]) {
        let entries: Vec<SpatialEntry> = objects.iter().map(SpatialEntry::new).collect();
        self.entries = entries.iter().map(|e| (e.object_id, *e)).collect();
        self.tree = RTree::bulk_load(entries);
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.entries.clear();
    }
}
