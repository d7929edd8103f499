//! Core types for the Handboard canvas system.
//!
//! This module defines the fundamental data structures used throughout the
//! crate: canvas objects, per-frame hand samples, and snap guides.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ZOOM, GRID_UNIT};

// ============================================================================
// Hand Sampling Types
// ============================================================================

/// One hand's classified state for a single frame.
///
/// The position is the wrist anchor in normalized camera space `[0,1]²`.
/// Samples are ephemeral: recomputed every frame, never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HandSample {
    /// Wrist x in normalized camera space
    pub x: f64,
    /// Wrist y in normalized camera space
    pub y: f64,
    /// Index and middle fingertips curled below their proximal joints
    pub is_fist: bool,
    /// Index and middle fingertips extended above their proximal joints
    pub is_open: bool,
    /// Thumb tip and index tip within the pinch distance threshold
    pub is_pinch: bool,
    /// Index extended while middle, ring, and pinky are curled
    pub is_pointing: bool,
}

// ============================================================================
// Canvas Object Types
// ============================================================================

/// Kind of object placed on the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    #[default]
    Box,
    Sticky,
    Circle,
    Arrow,
    Textbox,
}

impl ObjectKind {
    /// Default size for a newly created object of this kind, in scene units.
    pub fn default_size(&self) -> (f64, f64) {
        match self {
            ObjectKind::Box => (160.0, 100.0),
            ObjectKind::Sticky => (140.0, 140.0),
            ObjectKind::Circle => (120.0, 120.0),
            ObjectKind::Arrow => (160.0, 40.0),
            ObjectKind::Textbox => (200.0, 60.0),
        }
    }

    /// Default fill color for a newly created object of this kind.
    pub fn default_color(&self) -> &'static str {
        match self {
            ObjectKind::Box => "#4a90d9",
            ObjectKind::Sticky => "#f5d76e",
            ObjectKind::Circle => "#7ec8a8",
            ObjectKind::Arrow => "#d9d9d9",
            ObjectKind::Textbox => "#ffffff",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ObjectKind::Box => "Box",
            ObjectKind::Sticky => "Sticky",
            ObjectKind::Circle => "Circle",
            ObjectKind::Arrow => "Arrow",
            ObjectKind::Textbox => "Textbox",
        }
    }
}

/// An object placed on the canvas.
///
/// Objects are owned exclusively by the board's object collection and are
/// referenced by `id` everywhere else (selection, snap guides, drag target),
/// so wholesale collection replacement on undo/redo can never dangle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanvasObject {
    /// Unique identifier, immutable for the object's lifetime
    pub id: u64,
    /// What kind of object this is
    pub kind: ObjectKind,
    /// Top-left x in scene coordinates
    pub x: f64,
    /// Top-left y in scene coordinates
    pub y: f64,
    /// Width in scene units
    pub width: f64,
    /// Height in scene units
    pub height: f64,
    /// Fill color as a hex string (e.g. "#4a90d9")
    pub color: String,
    /// Optional text content
    pub text: Option<String>,
    /// Locked objects reject moves and are excluded as snap targets
    pub locked: bool,
}

impl CanvasObject {
    /// Create an object of the given kind at a grid-snapped position with
    /// kind-default size and color.
    pub fn new(id: u64, kind: ObjectKind, x: f64, y: f64) -> Self {
        let (width, height) = kind.default_size();
        Self {
            id,
            kind,
            x: snap_to_grid(x),
            y: snap_to_grid(y),
            width,
            height,
            color: kind.default_color().to_string(),
            text: None,
            locked: false,
        }
    }

    /// Center of the object in scene coordinates.
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Whether a scene-space point falls inside the object's bounds.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// Round a scene coordinate to the nearest grid line.
pub fn snap_to_grid(value: f64) -> f64 {
    (value / GRID_UNIT).round() * GRID_UNIT
}

// ============================================================================
// Snap Guide Types
// ============================================================================

/// Axis of an alignment guide.
///
/// A vertical guide marks alignment of x features; a horizontal guide marks
/// alignment of y features.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Vertical,
    Horizontal,
}

/// An object edge or center line that can participate in a snap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
    CenterX,
    CenterY,
}

/// Record of one alignment applied during a drag.
///
/// Guides are ephemeral: recomputed every drag frame and cleared on
/// select/pan/release. Both endpoints are id references, never object
/// references.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnapGuide {
    /// Which axis aligned
    pub axis: Axis,
    /// Scene coordinate of the aligned line
    pub position: f64,
    /// The dragged object
    pub from_id: u64,
    /// The dragged object's matched feature
    pub from_edge: Edge,
    /// The reference object
    pub to_id: u64,
    /// The reference object's matched feature
    pub to_edge: Edge,
}

// ============================================================================
// View Types
// ============================================================================

/// Pan/zoom view transform over the scene.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    /// Horizontal pan in screen pixels
    pub pan_x: f64,
    /// Vertical pan in screen pixels
    pub pan_y: f64,
    /// Zoom factor, clamped to `[MIN_ZOOM, MAX_ZOOM]`
    pub zoom: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            pan_x: 0.0,
            pan_y: 0.0,
            zoom: DEFAULT_ZOOM,
        }
    }
}
