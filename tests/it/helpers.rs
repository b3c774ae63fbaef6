//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestDrawerBuilder` - Builder for drawers with recorded callbacks
//! - `CallbackLog` - Counts `on_open` / `on_close` invocations
//! - `SinkLog` - Records transforms pushed through the immediate side channel
//! - `edge_swipe` - Touch sequence helper for a standard opening swipe

use reveal_drawer::{Drawer, DrawerConfig, LiveTransform, PanGesture, Release, Viewport};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Once;
use std::time::Instant;

/// Viewport used by most scenarios: maxOffsetX = 200, open threshold = 40.
pub const VIEWPORT: Viewport = Viewport {
    width: 400.0,
    height: 800.0,
};

/// Install a test subscriber once so `RUST_LOG=debug` shows drawer logs.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

// ============================================================================
// Callback / Sink Recorders
// ============================================================================

#[derive(Clone, Default)]
pub struct CallbackLog {
    opened: Rc<Cell<u32>>,
    closed: Rc<Cell<u32>>,
}

impl CallbackLog {
    pub fn opened(&self) -> u32 {
        self.opened.get()
    }

    pub fn closed(&self) -> u32 {
        self.closed.get()
    }
}

#[derive(Clone, Default)]
pub struct SinkLog {
    applied: Rc<RefCell<Vec<LiveTransform>>>,
}

impl SinkLog {
    pub fn applied(&self) -> Vec<LiveTransform> {
        self.applied.borrow().clone()
    }

    pub fn last(&self) -> Option<LiveTransform> {
        self.applied.borrow().last().copied()
    }

    pub fn len(&self) -> usize {
        self.applied.borrow().len()
    }
}

// ============================================================================
// TestDrawerBuilder
// ============================================================================

/// Builder for creating test drawers wired to recorders.
///
/// # Example
/// ```ignore
/// let (drawer, callbacks, sink) = TestDrawerBuilder::new()
///     .with_config(DrawerConfig::default().with_scaling_factor(0.8))
///     .build();
/// ```
pub struct TestDrawerBuilder {
    viewport: Viewport,
    config: DrawerConfig,
}

impl Default for TestDrawerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestDrawerBuilder {
    pub fn new() -> Self {
        Self {
            viewport: VIEWPORT,
            config: DrawerConfig::default(),
        }
    }

    pub fn with_viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport = Viewport::new(width, height);
        self
    }

    pub fn with_config(mut self, config: DrawerConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the drawer with callback and sink recorders attached.
    pub fn build(self) -> (Drawer, CallbackLog, SinkLog) {
        init_tracing();

        let callbacks = CallbackLog::default();
        let sink = SinkLog::default();

        let opened = callbacks.opened.clone();
        let closed = callbacks.closed.clone();
        let applied = sink.applied.clone();

        let drawer = Drawer::new(self.viewport, self.config)
            .expect("test viewport is valid")
            .on_open(move || opened.set(opened.get() + 1))
            .on_close(move || closed.set(closed.get() + 1))
            .with_transform_sink(move |t: LiveTransform| applied.borrow_mut().push(t));

        (drawer, callbacks, sink)
    }
}

// ============================================================================
// Touch Sequences
// ============================================================================

/// Pan values for a finger that went down at `(4, 300)` and moved by `dx`.
pub fn edge_pan(dx: f32) -> PanGesture {
    PanGesture::from_points((4.0, 300.0), (4.0 + dx, 300.0))
}

/// Touch down near the left edge, claim with a short move, drag to `dx` and
/// release there. Returns the release outcome.
pub fn edge_swipe(drawer: &mut Drawer, dx: f32, now: Instant) -> Release {
    drawer.touch_start_at(4.0, 300.0, now);
    drawer.touch_move(edge_pan(5.0));
    drawer.touch_move(edge_pan(dx));
    drawer.touch_end_at(edge_pan(dx), now)
}
