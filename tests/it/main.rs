//! Single test binary entry point.
//!
//! This consolidates all tests into a single binary following matklad's best
//! practices, reducing linking overhead from 3x to 1x.
//!
//! Structure:
//! - unit: Single-component tests (pose, aggregator, coords, snapping, history)
//! - integration: Multi-component workflow tests (drag sessions, undo/redo)
