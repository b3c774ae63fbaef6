//! Touch gesture handling for the drawer.
//!
//! The touch stream is interpreted in three steps, each a pure function over
//! the drawer's state so the `Drawer` only has to apply the result:
//!
//! - `classifier` - should the drawer claim this touch sequence?
//! - `drag` - live transform for a claimed move (immediate, unanimated)
//! - `release` - which rest state a finished gesture commits to

pub mod classifier;
pub mod drag;
pub mod release;

pub use classifier::StartAction;
pub use drag::TransformSink;
pub use release::Release;

/// Cumulative pan values of the current touch sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PanGesture {
    /// Horizontal distance since touch start
    pub dx: f32,
    /// Vertical distance since touch start
    pub dy: f32,
    /// Latest absolute pointer X
    pub move_x: f32,
    /// Latest absolute pointer Y
    pub move_y: f32,
}

impl PanGesture {
    pub fn new(dx: f32, dy: f32, move_x: f32, move_y: f32) -> Self {
        Self {
            dx,
            dy,
            move_x,
            move_y,
        }
    }

    /// Pan values for a pointer at `(x, y)` that went down at `start`.
    pub fn from_points(start: (f32, f32), (x, y): (f32, f32)) -> Self {
        Self::new(x - start.0, y - start.1, x, y)
    }
}

/// Whether the drawer took ownership of a touch move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchResponse {
    /// The drawer owns the sequence; the host must not forward it to children
    Claimed,
    /// Not a drawer gesture; the host forwards it to child content
    Passed,
}

impl TouchResponse {
    pub fn is_claimed(self) -> bool {
        self == Self::Claimed
    }
}
