//! Render description of the drawer.
//!
//! The drawer does not draw anything itself. Each frame it hands the host a
//! `DrawerLayers` value listing what to paint, back to front:
//!
//! 1. background - the revealed content, always mounted
//! 2. mask - transparent full-viewport layer, mounted only while open
//! 3. front - the gesture-responding panel with its current transform

use serde::Serialize;

use crate::config::{Geometry, PanelStyle};
use crate::constants::{
    FRONT_BACKGROUND, FRONT_ELEVATION, FRONT_SHADOW_COLOR, FRONT_SHADOW_OFFSET, FRONT_SHADOW_RADIUS,
};
use crate::state::{DrawerState, LiveTransform};

/// Passthrough styles for the three host containers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawerStyles {
    pub container: PanelStyle,
    pub content_wrapper: PanelStyle,
    pub front: PanelStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackgroundLayer {
    pub width: f32,
    pub height: f32,
    pub style: PanelStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaskLayer {
    pub width: f32,
    pub height: f32,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub radius: f32,
    pub color: &'static str,
    pub opacity: f32,
    pub elevation: f32,
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            offset_x: FRONT_SHADOW_OFFSET.0,
            offset_y: FRONT_SHADOW_OFFSET.1,
            radius: FRONT_SHADOW_RADIUS,
            color: FRONT_SHADOW_COLOR,
            opacity: 1.0,
            elevation: FRONT_ELEVATION,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrontLayer {
    pub transform: LiveTransform,
    pub height: f32,
    pub background: &'static str,
    pub shadow: Shadow,
    pub style: PanelStyle,
}

/// Everything the host paints for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawerLayers {
    pub container: PanelStyle,
    pub background: BackgroundLayer,
    pub mask: Option<MaskLayer>,
    pub front: FrontLayer,
}

impl DrawerLayers {
    pub fn build(
        geometry: &Geometry,
        styles: &DrawerStyles,
        state: DrawerState,
        transform: LiveTransform,
    ) -> Self {
        let viewport = geometry.viewport;

        Self {
            container: styles.container.clone(),
            background: BackgroundLayer {
                width: viewport.width,
                height: viewport.height,
                style: styles.content_wrapper.clone(),
            },
            mask: state.is_open().then(|| MaskLayer {
                width: viewport.width,
                height: viewport.height,
                color: "transparent",
            }),
            front: FrontLayer {
                transform,
                height: viewport.height,
                background: FRONT_BACKGROUND,
                shadow: Shadow::default(),
                style: styles.front.clone(),
            },
        }
    }

    pub fn has_mask(&self) -> bool {
        self.mask.is_some()
    }
}
