//! Drawer-wide constants.
//!
//! Centralizes the default configuration values and the fixed gesture
//! thresholds so the classifier, resolver and animator agree on them.

// ============================================================================
// Configuration Defaults
// ============================================================================

/// Default minimum scale of the front panel when fully open
pub const DEFAULT_SCALING_FACTOR: f32 = 0.5;

/// Default fraction of the viewport width the front panel travels
pub const DEFAULT_MINIMIZE_FACTOR: f32 = 0.5;

/// Default maximum start X (px from the left edge) for an opening swipe
pub const DEFAULT_SWIPE_OFFSET: f32 = 10.0;

/// Default commit animation duration in milliseconds
pub const DEFAULT_DURATION_MS: u64 = 250;

// ============================================================================
// Gesture Thresholds
// ============================================================================

/// A move only claims a closed drawer while the cumulative dx is below this
pub const MAX_CLAIM_DX: f32 = 20.0;

/// Fraction of the viewport width a release must exceed to resolve Open
pub const OPEN_THRESHOLD_RATIO: f32 = 0.1;

// ============================================================================
// Front Panel Shadow
// ============================================================================

/// Shadow offset of the front panel (x, y) in pixels
pub const FRONT_SHADOW_OFFSET: (f32, f32) = (-10.0, 0.0);

/// Shadow blur radius of the front panel in pixels
pub const FRONT_SHADOW_RADIUS: f32 = 19.0;

/// Shadow colour of the front panel
pub const FRONT_SHADOW_COLOR: &str = "rgba(0,0,0,0.8)";

/// Elevation of the front panel (platforms without real shadows)
pub const FRONT_ELEVATION: f32 = 10.0;

/// Default background colour of the front panel
pub const FRONT_BACKGROUND: &str = "#ffffff";

// ============================================================================
// Timing
// ============================================================================

/// Frame budget for the touch-move hot path in milliseconds (60 FPS)
pub const TOUCH_MOVE_BUDGET_MS: f64 = 16.67;
