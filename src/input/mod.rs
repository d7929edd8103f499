//! Gesture input handling for the canvas.
//!
//! Translates the gesture pipeline's per-frame output into board commands:
//! selection, offset-preserving drags, two-hand panning, hover highlighting,
//! and release finalization.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine (`InteractionState`) to
//! track the current manipulation session, so a drag's grab offset and a
//! pan's last midpoint live in the state that needs them and nowhere else.
//!
//! ## Modules
//!
//! - `state` - Interaction state machine enum and helper methods
//! - `coords` - Coordinate conversions (camera, screen, scene)
//! - `drag` - Gesture-to-command driver

pub mod coords;
mod drag;
mod state;

pub use drag::InputHandler;
pub use state::InteractionState;
