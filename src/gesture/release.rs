//! Release resolution - picks the rest state a finished gesture commits to.

use crate::config::Geometry;
use crate::state::DrawerState;

/// Outcome of a gesture release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// Not an event: nothing is committed and no callback fires
    Ignored,
    /// Commit to this state
    Resolve(DrawerState),
}

/// Resolve a release with final cumulative horizontal delta `dx`.
///
/// Opening needs `dx` strictly greater than 10% of the viewport width;
/// everything else resolves Closed. A leftward release of a closed drawer is
/// ignored.
pub fn resolve_release(dx: f32, state: DrawerState, geometry: &Geometry) -> Release {
    if !dx.is_finite() || (dx < 0.0 && !state.is_open()) {
        return Release::Ignored;
    }

    if dx > geometry.open_threshold() {
        Release::Resolve(DrawerState::Open)
    } else {
        Release::Resolve(DrawerState::Closed)
    }
}
