//! Drag transform - maps horizontal displacement to the front panel transform.
//!
//! ## Performance Notes
//!
//! Called for every touch move of a claimed gesture and applied immediately
//! through a `TransformSink`, bypassing the commit animator. Keep it to
//! arithmetic: no allocation, no locking.

use crate::config::Geometry;
use crate::state::{DrawerState, LiveTransform};

/// Side channel for drag-time updates: receives each live transform as soon
/// as it is computed, without waiting for the next rendered frame.
pub trait TransformSink {
    fn apply_immediate(&mut self, transform: LiveTransform);
}

impl<F> TransformSink for F
where
    F: FnMut(LiveTransform),
{
    fn apply_immediate(&mut self, transform: LiveTransform) {
        self(transform)
    }
}

/// Live transform for a move with cumulative horizontal delta `dx`, or `None`
/// when the move must not touch the transform:
///
/// - the drawer is open (dragging from open is not supported)
/// - `dx` is negative or not finite
/// - the rounded offset reached `max_offset_x` (the last in-range value sticks)
pub fn drag_transform(dx: f32, state: DrawerState, geometry: &Geometry) -> Option<LiveTransform> {
    if state.is_open() || !dx.is_finite() || dx < 0.0 {
        return None;
    }

    let offset_x = dx.round();
    if offset_x >= geometry.max_offset_x {
        return None;
    }

    Some(LiveTransform {
        offset_x,
        scale: geometry.scale_for_offset(offset_x),
    })
}
