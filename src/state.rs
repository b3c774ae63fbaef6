//! Drawer state - the discrete open/closed state, the live transform and the
//! gesture recognizer state machine.
//!
//! ## Gesture Phase Transitions
//!
//! ```text
//! Idle     -> Tracking   (touch start, not claimed)
//! Tracking -> Claimed    (move classified as a drawer gesture)
//! Claimed  -> Claimed    (move applied to the live transform)
//!
//! Any      -> Idle       (touch end - resolves if Claimed)
//! ```

use serde::{Deserialize, Serialize};

use crate::config::Geometry;

/// Which rest position the drawer is heading toward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawerState {
    #[default]
    Closed,
    Open,
}

impl DrawerState {
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// Transform the front panel settles to in this state.
    pub fn rest_transform(self, geometry: &Geometry) -> LiveTransform {
        match self {
            Self::Closed => LiveTransform::CLOSED,
            Self::Open => LiveTransform {
                offset_x: geometry.max_offset_x,
                scale: geometry.scaling_factor,
            },
        }
    }
}

/// Horizontal offset and uniform scale of the front panel.
///
/// Held as a plain value: the drawer mutates it synchronously during a drag
/// and the animator copies it as the start point of a commit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveTransform {
    pub offset_x: f32,
    pub scale: f32,
}

impl Default for LiveTransform {
    fn default() -> Self {
        Self::CLOSED
    }
}

impl LiveTransform {
    /// Closed rest values
    pub const CLOSED: Self = Self {
        offset_x: 0.0,
        scale: 1.0,
    };

    pub fn new(offset_x: f32, scale: f32) -> Self {
        Self { offset_x, scale }
    }

    /// Interpolate toward `target` by `fraction`, clamped to the segment
    /// between the two transforms so eased values never overshoot.
    pub fn lerp(&self, target: &Self, fraction: f32) -> Self {
        let fraction = fraction.clamp(0.0, 1.0);
        Self {
            offset_x: lerp_clamped(self.offset_x, target.offset_x, fraction),
            scale: lerp_clamped(self.scale, target.scale, fraction),
        }
    }
}

#[inline]
fn lerp_clamped(from: f32, to: f32, fraction: f32) -> f32 {
    let value = from + (to - from) * fraction;
    value.clamp(from.min(to), from.max(to))
}

/// Recognizer state for the current touch sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum GesturePhase {
    /// No touch in progress
    #[default]
    Idle,

    /// Touch is down but the drawer has not claimed it; moves are offered to
    /// the classifier until it claims or the touch ends
    Tracking {
        /// Touch-down position
        start: (f32, f32),
    },

    /// The drawer owns the touch sequence
    Claimed {
        /// Touch-down position
        start: (f32, f32),
        /// Whether a move has written the live transform directly
        dragged: bool,
    },
}

impl GesturePhase {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_tracking(&self) -> bool {
        matches!(self, Self::Tracking { .. })
    }

    pub fn is_claimed(&self) -> bool {
        matches!(self, Self::Claimed { .. })
    }

    /// Returns true if a claimed drag has applied a transform directly
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Claimed { dragged: true, .. })
    }

    pub fn start(&self) -> Option<(f32, f32)> {
        match self {
            Self::Idle => None,
            Self::Tracking { start } | Self::Claimed { start, .. } => Some(*start),
        }
    }

    /// Move from Tracking to Claimed; no-op in other phases
    pub fn claim(&mut self) {
        if let Self::Tracking { start } = *self {
            *self = Self::Claimed {
                start,
                dragged: false,
            };
        }
    }

    /// Record that a claimed drag wrote the live transform
    pub fn mark_dragged(&mut self) {
        if let Self::Claimed { dragged, .. } = self {
            *dragged = true;
        }
    }

    /// Hand the display back to the animator: the gesture stays claimed,
    /// but the live transform no longer reflects a drag until the next move
    /// writes one
    pub fn release_drag(&mut self) {
        if let Self::Claimed { dragged, .. } = self {
            *dragged = false;
        }
    }
}
