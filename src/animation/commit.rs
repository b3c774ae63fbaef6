//! Commit animator - timed, eased transition to a resolved rest transform.
//!
//! ## States
//!
//! ```text
//! Idle      -> Animating  (commit)
//! Animating -> Animating  (commit again: restarts from the new start point)
//! Animating -> Idle       (progress reaches 1)
//! ```
//!
//! A commit captures its start and target transforms into an immutable
//! `CommitTrack`. Frames are sampled from the track alone, so a
//! `CompositorHandle` on another thread can render the animation without
//! touching drawer state.

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::RwLock;

use super::Easing;
use crate::config::AnimationConfig;
use crate::state::{DrawerState, LiveTransform};

/// Start and target of one commit, fixed at commit time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommitTrack {
    pub from: LiveTransform,
    pub to: LiveTransform,
    /// State the commit settles into
    pub target: DrawerState,
    pub started_at: Instant,
    pub duration: Duration,
    pub easing: Easing,
}

impl CommitTrack {
    /// Linear progress in [0, 1] at `now`.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Eased transform at `now`, always within the [from, to] segment.
    pub fn sample(&self, now: Instant) -> LiveTransform {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return self.to;
        }
        self.from.lerp(&self.to, self.easing.transform(progress))
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Same track, finished immediately.
    fn snapped(self) -> Self {
        Self {
            duration: Duration::ZERO,
            ..self
        }
    }
}

/// Host hook notified whenever a commit starts, e.g. to hand the track to a
/// platform animation engine. A failure makes the animator snap to the target.
pub trait AnimationDriver {
    fn start(&mut self, track: &CommitTrack) -> anyhow::Result<()>;
}

/// Animator phase at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimatorPhase {
    Idle,
    Animating,
}

/// Read-only, thread-shareable view of the current commit.
#[derive(Debug, Clone, Default)]
pub struct CompositorHandle {
    track: Arc<RwLock<Option<CommitTrack>>>,
}

impl CompositorHandle {
    /// Copy of the latest commit, if any.
    pub fn current(&self) -> Option<CommitTrack> {
        *self.track.read()
    }

    /// Frame for `now`, or `None` before the first commit.
    pub fn sample(&self, now: Instant) -> Option<LiveTransform> {
        self.current().map(|track| track.sample(now))
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.current().is_some_and(|track| !track.is_finished(now))
    }
}

/// Drives commits. Owned by the drawer; mutated only from its thread.
pub struct CommitAnimator {
    config: AnimationConfig,
    shared: CompositorHandle,
    driver: Option<Box<dyn AnimationDriver>>,
}

impl CommitAnimator {
    pub fn new(config: AnimationConfig) -> Self {
        Self {
            config,
            shared: CompositorHandle::default(),
            driver: None,
        }
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub fn set_driver(&mut self, driver: Box<dyn AnimationDriver>) {
        self.driver = Some(driver);
    }

    /// Start a commit from `from` to `to`, replacing any in-flight one.
    pub fn commit(
        &mut self,
        from: LiveTransform,
        to: LiveTransform,
        target: DrawerState,
        now: Instant,
    ) -> CommitTrack {
        crate::profile_scope!("commit_animation");

        let mut track = CommitTrack {
            from,
            to,
            target,
            started_at: now,
            duration: self.config.duration,
            easing: self.config.easing,
        };

        if let Some(driver) = self.driver.as_mut() {
            if let Err(e) = driver.start(&track) {
                tracing::warn!(error = %e, state = ?target, "Animation driver failed, snapping to target");
                track = track.snapped();
            }
        }

        tracing::debug!(
            state = ?target,
            from_offset = from.offset_x,
            to_offset = to.offset_x,
            duration_ms = track.duration.as_millis() as u64,
            "Commit started"
        );

        *self.shared.track.write() = Some(track);
        track
    }

    pub fn current(&self) -> Option<CommitTrack> {
        self.shared.current()
    }

    pub fn phase(&self, now: Instant) -> AnimatorPhase {
        if self.shared.is_animating(now) {
            AnimatorPhase::Animating
        } else {
            AnimatorPhase::Idle
        }
    }

    pub fn sample(&self, now: Instant) -> Option<LiveTransform> {
        self.shared.sample(now)
    }

    pub fn handle(&self) -> CompositorHandle {
        self.shared.clone()
    }
}
