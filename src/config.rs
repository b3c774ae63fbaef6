//! Drawer configuration.
//!
//! `DrawerConfig` is the host-facing, serde-friendly option set. It is turned
//! into the immutable runtime values (`Geometry` and `AnimationConfig`) once,
//! when the drawer is mounted against a viewport:
//!
//! ```text
//! DrawerConfig (JSON / builder) + Viewport
//!         │
//!         ├── Geometry::new        -> validated layout bounds
//!         └── AnimationConfig::from -> commit timing
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::animation::Easing;
use crate::constants::{
    DEFAULT_DURATION_MS, DEFAULT_MINIMIZE_FACTOR, DEFAULT_SCALING_FACTOR, DEFAULT_SWIPE_OFFSET,
    OPEN_THRESHOLD_RATIO,
};
use crate::error::{DrawerError, DrawerResult};

/// Opaque passthrough style for a layer.
///
/// The drawer never interprets these keys; they are handed back to the host
/// with the layer they belong to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PanelStyle(pub serde_json::Map<String, serde_json::Value>);

impl PanelStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a style entry (builder style).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Host-supplied drawer options. Every field has a default, so a partial
/// JSON document (or `{}`) is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DrawerConfig {
    /// Minimum scale of the front panel at full open
    pub scaling_factor: f32,
    /// Fraction of the viewport width the front panel travels
    pub minimize_factor: f32,
    /// Max start X (px from the edge) to recognize an opening swipe
    pub swipe_offset: f32,
    /// Commit animation duration; `0` means "use the default"
    #[serde(rename = "duration")]
    pub duration_ms: u64,
    /// Commit animation timing curve
    pub easing: Easing,
    pub content_wrapper_style: PanelStyle,
    pub front_style: PanelStyle,
    pub container_style: PanelStyle,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            scaling_factor: DEFAULT_SCALING_FACTOR,
            minimize_factor: DEFAULT_MINIMIZE_FACTOR,
            swipe_offset: DEFAULT_SWIPE_OFFSET,
            duration_ms: DEFAULT_DURATION_MS,
            easing: Easing::default(),
            content_wrapper_style: PanelStyle::default(),
            front_style: PanelStyle::default(),
            container_style: PanelStyle::default(),
        }
    }
}

impl DrawerConfig {
    /// Parse a configuration from a JSON document.
    pub fn from_json_str(json: &str) -> DrawerResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> DrawerResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_json_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded drawer config");
        Ok(config)
    }

    pub fn with_scaling_factor(mut self, factor: f32) -> Self {
        self.scaling_factor = factor;
        self
    }

    pub fn with_minimize_factor(mut self, factor: f32) -> Self {
        self.minimize_factor = factor;
        self
    }

    pub fn with_swipe_offset(mut self, offset: f32) -> Self {
        self.swipe_offset = offset;
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_front_style(mut self, style: PanelStyle) -> Self {
        self.front_style = style;
        self
    }

    pub fn with_content_wrapper_style(mut self, style: PanelStyle) -> Self {
        self.content_wrapper_style = style;
        self
    }

    pub fn with_container_style(mut self, style: PanelStyle) -> Self {
        self.container_style = style;
        self
    }
}

/// Size of the area hosting the drawer, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    fn validate(self) -> DrawerResult<Self> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if valid(self.width) && valid(self.height) {
            Ok(self)
        } else {
            Err(DrawerError::InvalidViewport {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// Layout bounds of the drawer, computed once at mount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Geometry {
    pub viewport: Viewport,
    /// `ceil(viewport.width * minimize_factor)`
    pub max_offset_x: f32,
    pub scaling_factor: f32,
    pub swipe_offset: f32,
}

impl Geometry {
    /// Validate `config` against `viewport` and derive the drawer bounds.
    ///
    /// Rejects anything that would later turn into a NaN or inverted
    /// transform: empty viewports and factors outside `(0, 1]`.
    pub fn new(viewport: Viewport, config: &DrawerConfig) -> DrawerResult<Self> {
        let viewport = viewport.validate()?;
        let scaling_factor = check_factor("scaling factor", config.scaling_factor)?;
        let minimize_factor = check_factor("minimize factor", config.minimize_factor)?;

        if !config.swipe_offset.is_finite() || config.swipe_offset < 0.0 {
            return Err(DrawerError::InvalidSwipeOffset(config.swipe_offset));
        }

        Ok(Self {
            viewport,
            max_offset_x: (viewport.width * minimize_factor).ceil(),
            scaling_factor,
            swipe_offset: config.swipe_offset,
        })
    }

    /// Minimum release distance that resolves to Open (strictly greater).
    #[inline]
    pub fn open_threshold(&self) -> f32 {
        self.viewport.width * OPEN_THRESHOLD_RATIO
    }

    /// Scale matching a drag offset: linear from 1 at offset 0 down to
    /// `scaling_factor` at `max_offset_x`.
    #[inline]
    pub fn scale_for_offset(&self, offset_x: f32) -> f32 {
        1.0 - offset_x * (1.0 - self.scaling_factor) / self.max_offset_x
    }
}

fn check_factor(name: &'static str, value: f32) -> DrawerResult<f32> {
    if value.is_finite() && value > 0.0 && value <= 1.0 {
        Ok(value)
    } else {
        Err(DrawerError::InvalidFactor { name, value })
    }
}

/// Timing of the commit animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationConfig {
    pub duration: Duration,
    pub easing: Easing,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(DEFAULT_DURATION_MS),
            easing: Easing::default(),
        }
    }
}

impl From<&DrawerConfig> for AnimationConfig {
    fn from(config: &DrawerConfig) -> Self {
        let duration_ms = if config.duration_ms == 0 {
            DEFAULT_DURATION_MS
        } else {
            config.duration_ms
        };
        Self {
            duration: Duration::from_millis(duration_ms),
            easing: config.easing,
        }
    }
}
