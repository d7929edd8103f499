//! Application-wide constants.
//!
//! Centralizes magic numbers and tuning values so gesture thresholds and
//! canvas behavior stay in one place.

// ============================================================================
// Gesture Thresholds
// ============================================================================

/// Maximum thumb-tip/index-tip distance (normalized space) recognized as a pinch
pub const PINCH_DISTANCE_THRESHOLD: f64 = 0.05;

/// Minimum landmark count required by the fingertip-based predicates
pub const MIN_LANDMARKS: usize = 21;

// ============================================================================
// Canvas Defaults
// ============================================================================

/// Grid unit for create/duplicate placement and snap fallback, in scene units
pub const GRID_UNIT: f64 = 10.0;

/// Maximum feature distance recognized as an alignment snap, in scene units
pub const SNAP_THRESHOLD: f64 = 15.0;

/// Offset applied to a duplicated object on both axes, in scene units
pub const DUPLICATE_OFFSET: f64 = 20.0;

/// Search radius for the pointing hover highlight, in scene units
pub const HOVER_RADIUS: f64 = 120.0;

// ============================================================================
// Zoom & Pan
// ============================================================================

/// Minimum zoom level
pub const MIN_ZOOM: f64 = 0.1;

/// Maximum zoom level
pub const MAX_ZOOM: f64 = 3.0;

/// Default zoom level
pub const DEFAULT_ZOOM: f64 = 1.0;

// ============================================================================
// History
// ============================================================================

/// Maximum undo history states to keep
pub const MAX_HISTORY_STATES: usize = 50;
