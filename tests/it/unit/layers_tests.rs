//! Snapshot tests for the render description.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use crate::helpers::TestDrawerBuilder;
use reveal_drawer::{DrawerConfig, DrawerLayers, PanelStyle};
use std::time::{Duration, Instant};

fn to_json(layers: &DrawerLayers) -> String {
    serde_json::to_string_pretty(layers).unwrap()
}

#[test]
fn snapshot_closed_layers() {
    let (drawer, _, _) = TestDrawerBuilder::new().build();
    let layers = drawer.layers(Instant::now());

    assert!(!layers.has_mask());
    insta::assert_snapshot!("closed_layers", to_json(&layers));
}

#[test]
fn snapshot_open_layers() {
    let config = DrawerConfig::default()
        .with_container_style(PanelStyle::new().with("backgroundColor", "#101010"))
        .with_front_style(PanelStyle::new().with("borderRadius", 12));
    let (mut drawer, _, _) = TestDrawerBuilder::new().with_config(config).build();

    let t0 = Instant::now();
    drawer.open_at(t0);
    let layers = drawer.layers(t0 + Duration::from_millis(250));

    assert!(layers.has_mask());
    insta::assert_snapshot!("open_layers", to_json(&layers));
}

#[test]
fn test_mask_follows_state_not_frame() {
    let (mut drawer, _, _) = TestDrawerBuilder::new().build();
    let t0 = Instant::now();

    drawer.open_at(t0);
    // Still animating, but the state already flipped
    assert!(drawer.layers(t0).has_mask());

    drawer.close_at(t0 + Duration::from_millis(300));
    assert!(!drawer.layers(t0 + Duration::from_millis(300)).has_mask());
}

#[test]
fn test_front_tracks_drag() {
    let (mut drawer, _, _) = TestDrawerBuilder::new().build();
    let t0 = Instant::now();
    drawer.touch_start_at(4.0, 300.0, t0);
    drawer.touch_move(crate::helpers::edge_pan(5.0));
    drawer.touch_move(crate::helpers::edge_pan(100.0));

    let layers = drawer.layers(t0);
    assert_eq!(layers.front.transform.offset_x, 100.0);
    assert_eq!(layers.front.transform.scale, 0.75);
    assert!(!layers.has_mask());
}

#[test]
fn test_content_wrapper_style_reaches_background() {
    let config = DrawerConfig::default()
        .with_content_wrapper_style(PanelStyle::new().with("backgroundColor", "#2d2d2d"));
    let (drawer, _, _) = TestDrawerBuilder::new().with_config(config).build();

    let layers = drawer.layers(Instant::now());
    assert_eq!(
        layers.background.style.get("backgroundColor").and_then(|v| v.as_str()),
        Some("#2d2d2d")
    );
    assert!(layers.container.is_empty());
    assert!(layers.front.style.is_empty());
}
