//! The drawer - one unit owning the open/closed state, the live transform,
//! the gesture phase and the commit animator.
//!
//! ## Architecture
//!
//! ```text
//! touch_start ──> classifier::on_start ──(open)──> commit Closed (tap-to-close)
//! touch_move  ──> classifier::should_claim_move ──> drag::drag_transform ──> TransformSink
//! touch_end   ──> release::resolve_release ──> commit
//! open/close  ────────────────────────────────────> commit
//!
//! commit: start = live transform, live = target rest values,
//!         fire on_open/on_close, flip state, restart the animator
//! ```
//!
//! Every mutation happens through `&mut self` on the owner's thread. The only
//! thing that leaves the drawer is the read-only `CompositorHandle`.

use std::time::Instant;

use crate::animation::{AnimationDriver, AnimatorPhase, CommitAnimator, CommitTrack, CompositorHandle};
use crate::config::{AnimationConfig, DrawerConfig, Geometry, Viewport};
use crate::error::DrawerResult;
use crate::gesture::{classifier, drag, release, PanGesture, Release, StartAction, TouchResponse, TransformSink};
use crate::layers::{DrawerLayers, DrawerStyles};
use crate::perf::ScopedTimer;
use crate::profile_scope;
use crate::state::{DrawerState, GesturePhase, LiveTransform};

type Callback = Box<dyn FnMut()>;

/// Touch-driven reveal drawer.
pub struct Drawer {
    geometry: Geometry,
    styles: DrawerStyles,
    state: DrawerState,
    live: LiveTransform,
    blocked: bool,
    phase: GesturePhase,
    animator: CommitAnimator,
    sink: Option<Box<dyn TransformSink>>,
    on_open: Option<Callback>,
    on_close: Option<Callback>,
}

impl std::fmt::Debug for Drawer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Drawer")
            .field("geometry", &self.geometry)
            .field("state", &self.state)
            .field("live", &self.live)
            .field("blocked", &self.blocked)
            .field("phase", &self.phase)
            .field("commit", &self.animator.current())
            .finish_non_exhaustive()
    }
}

impl Drawer {
    /// Mount a drawer on `viewport`. Fails on geometry that would produce
    /// degenerate transforms.
    pub fn new(viewport: Viewport, config: DrawerConfig) -> DrawerResult<Self> {
        let geometry = Geometry::new(viewport, &config)?;
        let animation = AnimationConfig::from(&config);

        tracing::debug!(
            width = viewport.width,
            height = viewport.height,
            max_offset_x = geometry.max_offset_x,
            duration_ms = animation.duration.as_millis() as u64,
            "Drawer mounted"
        );

        Ok(Self {
            geometry,
            styles: DrawerStyles {
                container: config.container_style,
                content_wrapper: config.content_wrapper_style,
                front: config.front_style,
            },
            state: DrawerState::Closed,
            live: LiveTransform::CLOSED,
            blocked: false,
            phase: GesturePhase::Idle,
            animator: CommitAnimator::new(animation),
            sink: None,
            on_open: None,
            on_close: None,
        })
    }

    /// Callback fired on every commit to Open.
    pub fn on_open(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_open = Some(Box::new(callback));
        self
    }

    /// Callback fired on every commit to Closed.
    pub fn on_close(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_close = Some(Box::new(callback));
        self
    }

    /// Receiver for drag-time transforms.
    pub fn with_transform_sink(mut self, sink: impl TransformSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Host animation engine notified on every commit.
    pub fn with_animation_driver(mut self, driver: impl AnimationDriver + 'static) -> Self {
        self.animator.set_driver(Box::new(driver));
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn state(&self) -> DrawerState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    pub fn live_transform(&self) -> LiveTransform {
        self.live
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn styles(&self) -> &DrawerStyles {
        &self.styles
    }

    pub fn gesture_phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn animation_config(&self) -> &AnimationConfig {
        self.animator.config()
    }

    /// Latest commit, if any.
    pub fn current_commit(&self) -> Option<CommitTrack> {
        self.animator.current()
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.animator.phase(now) == AnimatorPhase::Animating
    }

    /// Handle for sampling commit frames off the logic thread.
    pub fn compositor(&self) -> CompositorHandle {
        self.animator.handle()
    }

    /// Front panel transform to display at `now`.
    ///
    /// A drag in progress shows the live transform directly; otherwise the
    /// latest commit is sampled.
    pub fn frame(&self, now: Instant) -> LiveTransform {
        if self.phase.is_dragging() {
            return self.live;
        }
        self.animator.sample(now).unwrap_or(self.live)
    }

    /// Layers to paint at `now`.
    pub fn layers(&self, now: Instant) -> DrawerLayers {
        DrawerLayers::build(&self.geometry, &self.styles, self.state, self.frame(now))
    }

    // ========================================================================
    // Control Surface
    // ========================================================================

    /// Suppress (or restore) gesture claims. Takes effect on the next claim
    /// decision; a claimed gesture in progress keeps running.
    pub fn set_blocked(&mut self, blocked: bool) {
        if self.blocked != blocked {
            tracing::debug!(blocked, "Drawer gesture block changed");
        }
        self.blocked = blocked;
    }

    pub fn open(&mut self) {
        self.open_at(Instant::now());
    }

    pub fn close(&mut self) {
        self.close_at(Instant::now());
    }

    /// Commit to Open starting at `now`. Restarts any in-flight commit.
    pub fn open_at(&mut self, now: Instant) -> CommitTrack {
        self.commit(DrawerState::Open, now)
    }

    /// Commit to Closed starting at `now`. Restarts any in-flight commit.
    pub fn close_at(&mut self, now: Instant) -> CommitTrack {
        self.commit(DrawerState::Closed, now)
    }

    // ========================================================================
    // Touch Stream
    // ========================================================================

    /// Touch down at `(x, y)`. Never claims; closes an open drawer.
    pub fn touch_start(&mut self, x: f32, y: f32) -> bool {
        self.touch_start_at(x, y, Instant::now())
    }

    pub fn touch_start_at(&mut self, x: f32, y: f32, now: Instant) -> bool {
        self.phase = GesturePhase::Tracking { start: (x, y) };

        match classifier::on_start(self.state) {
            StartAction::CloseOnTap => {
                tracing::trace!(x, y, "Tap on open drawer, closing");
                self.commit(DrawerState::Closed, now);
            }
            StartAction::Pass => {}
        }
        false
    }

    /// Touch move with cumulative pan values since touch down.
    pub fn touch_move(&mut self, pan: PanGesture) -> TouchResponse {
        let _budget = ScopedTimer::per_frame("drawer_touch_move");

        match self.phase {
            GesturePhase::Idle => {
                // Move without a start: track from where the pan began
                self.phase = GesturePhase::Tracking {
                    start: (pan.move_x - pan.dx, pan.move_y - pan.dy),
                };
                self.offer_move(pan)
            }
            GesturePhase::Tracking { .. } => self.offer_move(pan),
            GesturePhase::Claimed { .. } => {
                self.apply_drag(pan.dx);
                TouchResponse::Claimed
            }
        }
    }

    /// Touch up. Resolves and commits if the drawer owned the gesture.
    pub fn touch_end(&mut self, pan: PanGesture) -> Release {
        self.touch_end_at(pan, Instant::now())
    }

    pub fn touch_end_at(&mut self, pan: PanGesture, now: Instant) -> Release {
        let phase = std::mem::take(&mut self.phase);
        if !phase.is_claimed() {
            return Release::Ignored;
        }

        let outcome = release::resolve_release(pan.dx, self.state, &self.geometry);
        match outcome {
            Release::Resolve(target) => {
                self.commit(target, now);
            }
            Release::Ignored if phase.is_dragging() => {
                // Drag came back past the edge: drop the stale drag offset
                self.live = self.state.rest_transform(&self.geometry);
                self.apply_immediate(self.live);
            }
            Release::Ignored => {}
        }
        outcome
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn offer_move(&mut self, pan: PanGesture) -> TouchResponse {
        if !classifier::should_claim_move(&pan, self.state, self.blocked, &self.geometry) {
            return TouchResponse::Passed;
        }

        tracing::trace!(dx = pan.dx, dy = pan.dy, move_x = pan.move_x, state = ?self.state, "Gesture claimed");
        self.phase.claim();
        self.apply_drag(pan.dx);
        TouchResponse::Claimed
    }

    fn apply_drag(&mut self, dx: f32) {
        profile_scope!("drawer_drag");

        if let Some(transform) = drag::drag_transform(dx, self.state, &self.geometry) {
            self.live = transform;
            self.phase.mark_dragged();
            self.apply_immediate(transform);
        }
    }

    fn apply_immediate(&mut self, transform: LiveTransform) {
        if let Some(sink) = self.sink.as_mut() {
            sink.apply_immediate(transform);
        }
    }

    /// Start a commit toward `target`: capture the live transform as start,
    /// move the live transform to the target rest values, fire the callback,
    /// flip the state and restart the animator.
    ///
    /// A drag in progress stops driving the frame; the commit animates from
    /// the dragged position until a later move writes a new one.
    fn commit(&mut self, target: DrawerState, now: Instant) -> CommitTrack {
        let from = self.live;
        self.live = target.rest_transform(&self.geometry);
        self.phase.release_drag();

        let callback = match target {
            DrawerState::Open => self.on_open.as_mut(),
            DrawerState::Closed => self.on_close.as_mut(),
        };
        if let Some(callback) = callback {
            callback();
        }

        if self.state != target {
            tracing::debug!(from = ?self.state, to = ?target, "Drawer state changed");
        }
        self.state = target;

        self.animator.commit(from, self.live, target, now)
    }
}
