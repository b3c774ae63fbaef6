//! Error types for drawer construction and configuration loading.
//!
//! Runtime gesture handling never fails: out-of-range deltas are clamped and
//! animation driver failures degrade to a snap. Only building a drawer from
//! bad geometry or unreadable configuration produces a `DrawerError`.

use thiserror::Error;

/// Errors that can occur while configuring a drawer
#[derive(Error, Debug)]
pub enum DrawerError {
    /// Viewport dimensions are zero, negative or not finite
    #[error("Invalid viewport: {width}x{height} (dimensions must be finite and positive)")]
    InvalidViewport { width: f32, height: f32 },

    /// A scale/travel factor is outside (0, 1]
    #[error("Invalid {name}: {value} (expected a value in (0, 1])")]
    InvalidFactor { name: &'static str, value: f32 },

    /// Swipe offset is negative or not finite
    #[error("Invalid swipe offset: {0} (expected a finite, non-negative value)")]
    InvalidSwipeOffset(f32),

    /// IO error while reading a configuration file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error while parsing a configuration document
    #[error("Config parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for drawer operations
pub type DrawerResult<T> = Result<T, DrawerError>;
