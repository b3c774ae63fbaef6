//! Gesture claim decisions.

use super::PanGesture;
use crate::config::Geometry;
use crate::constants::MAX_CLAIM_DX;
use crate::state::DrawerState;

/// What a touch start asks the drawer to do.
///
/// A start is never claimed: while open, touching the front panel closes
/// the drawer instead (tap-to-close) and the touch stays unclaimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartAction {
    /// Leave the start to child content
    Pass,
    /// Commit to Closed, then leave the start unclaimed
    CloseOnTap,
}

pub fn on_start(state: DrawerState) -> StartAction {
    match state {
        DrawerState::Open => StartAction::CloseOnTap,
        DrawerState::Closed => StartAction::Pass,
    }
}

/// Decide whether a move claims the touch sequence for the drawer.
///
/// Blocked drawers never claim. Otherwise an open drawer claims any move, and
/// a closed one only claims a mostly horizontal move that has not travelled
/// far yet and whose pointer is still within `swipe_offset` of the edge.
pub fn should_claim_move(
    pan: &PanGesture,
    state: DrawerState,
    blocked: bool,
    geometry: &Geometry,
) -> bool {
    if blocked {
        return false;
    }

    let edge_swipe = pan.dx.abs() > pan.dy.abs()
        && pan.dx < MAX_CLAIM_DX
        && pan.move_x < geometry.swipe_offset;

    edge_swipe || state.is_open()
}
