//! Commit animation: easing curves and the timed commit animator.

mod commit;
mod easing;

pub use commit::{AnimationDriver, AnimatorPhase, CommitAnimator, CommitTrack, CompositorHandle};
pub use easing::Easing;
