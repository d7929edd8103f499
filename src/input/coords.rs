//! Coordinate conversion utilities.
//!
//! Centralized, stateless conversions between the three coordinate spaces
//! the pipeline touches: normalized camera space (tracker output), screen
//! pixels, and scene coordinates. The camera feed is presented as a
//! front-facing mirror while landmarks are reported in unmirrored camera
//! space, so the normalized-to-screen step flips horizontally.

use crate::types::ViewTransform;

/// Screen dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[inline]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Context needed for screen/scene conversions.
#[derive(Clone, Copy, Debug)]
pub struct CoordinateContext {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
}

impl CoordinateContext {
    #[inline]
    pub fn new(view: &ViewTransform) -> Self {
        Self {
            pan_x: view.pan_x,
            pan_y: view.pan_y,
            zoom: view.zoom,
        }
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert a normalized camera-space position to mirrored screen pixels.
    #[inline]
    pub fn normalized_to_screen(pos: (f64, f64), viewport: &Viewport) -> (f64, f64) {
        ((1.0 - pos.0) * viewport.width, pos.1 * viewport.height)
    }

    /// Convert a screen position to scene coordinates.
    #[inline]
    pub fn screen_to_scene(pos: (f64, f64), ctx: &CoordinateContext) -> (f64, f64) {
        ((pos.0 - ctx.pan_x) / ctx.zoom, (pos.1 - ctx.pan_y) / ctx.zoom)
    }

    /// Convert a scene position to screen coordinates.
    #[inline]
    pub fn scene_to_screen(pos: (f64, f64), ctx: &CoordinateContext) -> (f64, f64) {
        (pos.0 * ctx.zoom + ctx.pan_x, pos.1 * ctx.zoom + ctx.pan_y)
    }

    /// Full tracker-to-scene conversion for a hand position.
    #[inline]
    pub fn normalized_to_scene(
        pos: (f64, f64),
        viewport: &Viewport,
        ctx: &CoordinateContext,
    ) -> (f64, f64) {
        Self::screen_to_scene(Self::normalized_to_screen(pos, viewport), ctx)
    }
}
