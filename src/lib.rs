//! Touch-driven reveal drawer.
//!
//! A front panel is dragged aside (shrinking as it goes) to reveal a
//! background panel, then snaps open or closed with an eased commit
//! animation when the finger lifts.
//!
//! ```ignore
//! use reveal_drawer::{Drawer, DrawerConfig, PanGesture, Viewport};
//!
//! let mut drawer = Drawer::new(Viewport::new(400.0, 800.0), DrawerConfig::default())?
//!     .on_open(|| tracing::info!("drawer opened"))
//!     .on_close(|| tracing::info!("drawer closed"));
//!
//! drawer.touch_start(4.0, 300.0);
//! drawer.touch_move(PanGesture::new(5.0, 0.0, 9.0, 300.0));
//! drawer.touch_end(PanGesture::new(150.0, 0.0, 154.0, 300.0));
//! assert!(drawer.is_open());
//! ```
//!
//! ## Modules
//!
//! - `config` - host options, viewport validation, derived geometry
//! - `state` - open/closed state, live transform, gesture phase
//! - `gesture` - claim decisions, drag transform, release resolution
//! - `animation` - easing curves and the commit animator
//! - `drawer` - the cohesive unit tying the above together
//! - `layers` - per-frame render description for the host
//! - `view` - gpui host view (`gpui` feature)

pub mod animation;
pub mod config;
pub mod constants;
pub mod drawer;
pub mod error;
pub mod gesture;
pub mod layers;
pub mod perf;
pub mod state;
#[cfg(feature = "gpui")]
pub mod view;

pub use animation::{AnimationDriver, AnimatorPhase, CommitTrack, CompositorHandle, Easing};
pub use config::{AnimationConfig, DrawerConfig, Geometry, PanelStyle, Viewport};
pub use drawer::Drawer;
pub use error::{DrawerError, DrawerResult};
pub use gesture::{PanGesture, Release, TouchResponse, TransformSink};
pub use layers::DrawerLayers;
pub use state::{DrawerState, GesturePhase, LiveTransform};
