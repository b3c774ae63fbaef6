//! Integration tests for the reveal drawer.
//!
//! These tests drive a `Drawer` through complete touch sequences and
//! imperative calls, checking state, live transform, callbacks and frames.

mod control_surface_tests;
