//! Imperative open/close from the host.

use crate::helpers::{edge_pan, edge_swipe, TestDrawerBuilder};
use reveal_drawer::{DrawerState, LiveTransform, Release, TouchResponse};
use std::time::{Duration, Instant};

#[test]
fn test_open_then_close_round_trip() {
    let (mut drawer, callbacks, _) = TestDrawerBuilder::new().build();
    let t0 = Instant::now();

    drawer.open_at(t0);
    assert!(drawer.is_open());
    assert_eq!(drawer.frame(t0 + Duration::from_millis(250)), LiveTransform::new(200.0, 0.5));

    let t1 = t0 + Duration::from_millis(500);
    drawer.close_at(t1);
    assert!(!drawer.is_open());
    assert_eq!(drawer.frame(t1 + Duration::from_millis(250)), LiveTransform::CLOSED);
    assert_eq!(drawer.live_transform(), LiveTransform::CLOSED);

    assert_eq!(callbacks.opened(), 1);
    assert_eq!(callbacks.closed(), 1);
}

#[test]
fn test_close_when_closed_still_commits() {
    let (mut drawer, callbacks, _) = TestDrawerBuilder::new().build();
    let t0 = Instant::now();

    let track = drawer.close_at(t0);

    // Callbacks fire on every commit, even without a state change
    assert_eq!(callbacks.closed(), 1);
    assert_eq!(track.from, LiveTransform::CLOSED);
    assert_eq!(track.to, LiveTransform::CLOSED);
    assert_eq!(drawer.state(), DrawerState::Closed);
    assert_eq!(drawer.frame(t0 + Duration::from_millis(100)), LiveTransform::CLOSED);
}

#[test]
fn test_repeated_open_fires_each_time() {
    let (mut drawer, callbacks, _) = TestDrawerBuilder::new().build();
    let t0 = Instant::now();

    drawer.open_at(t0);
    drawer.open_at(t0 + Duration::from_millis(300));
    drawer.open_at(t0 + Duration::from_millis(600));

    assert_eq!(callbacks.opened(), 3);
    assert_eq!(callbacks.closed(), 0);
    assert_eq!(
        drawer.frame(t0 + Duration::from_millis(700)),
        LiveTransform::new(200.0, 0.5)
    );
}

#[test]
fn test_open_mid_commit_restarts_animation() {
    let (mut drawer, _, _) = TestDrawerBuilder::new().build();
    let t0 = Instant::now();

    assert_eq!(edge_swipe(&mut drawer, 30.0, t0), Release::Resolve(DrawerState::Closed));
    assert!(drawer.is_animating(t0 + Duration::from_millis(50)));

    let t1 = t0 + Duration::from_millis(50);
    let track = drawer.open_at(t1);

    assert_eq!(track.started_at, t1);
    assert_eq!(track.target, DrawerState::Open);
    assert!(drawer.is_animating(t1 + Duration::from_millis(249)));
    assert!(!drawer.is_animating(t1 + Duration::from_millis(250)));
    assert_eq!(drawer.frame(t1 + Duration::from_millis(250)), LiveTransform::new(200.0, 0.5));
}

#[test]
fn test_wall_clock_controls() {
    let (mut drawer, callbacks, _) = TestDrawerBuilder::new().build();

    drawer.open();
    assert!(drawer.is_open());
    drawer.close();
    assert!(!drawer.is_open());

    assert_eq!(callbacks.opened(), 1);
    assert_eq!(callbacks.closed(), 1);
    assert_eq!(drawer.live_transform(), LiveTransform::CLOSED);
}

#[test]
fn test_open_while_dragging_animates_from_finger() {
    let (mut drawer, callbacks, _) = TestDrawerBuilder::new().build();
    let t0 = Instant::now();

    drawer.touch_start_at(4.0, 300.0, t0);
    drawer.touch_move(edge_pan(5.0));
    drawer.touch_move(edge_pan(80.0));

    let track = drawer.open_at(t0);
    assert_eq!(track.from, LiveTransform::new(80.0, 0.8));
    assert_eq!(callbacks.opened(), 1);

    let t1 = t0 + Duration::from_millis(50);
    assert_eq!(drawer.frame(t1), track.sample(t1));
    assert!(drawer.frame(t1).offset_x > 80.0 && drawer.frame(t1).offset_x < 200.0);
    assert_eq!(drawer.frame(t0 + Duration::from_millis(250)), LiveTransform::new(200.0, 0.5));
}

#[test]
fn test_close_while_dragging_animates_back() {
    let (mut drawer, callbacks, _) = TestDrawerBuilder::new().build();
    let t0 = Instant::now();

    drawer.touch_start_at(4.0, 300.0, t0);
    drawer.touch_move(edge_pan(5.0));
    drawer.touch_move(edge_pan(120.0));

    let track = drawer.close_at(t0);
    assert_eq!(track.from, LiveTransform::new(120.0, 0.7));
    assert_eq!(callbacks.closed(), 1);

    let t1 = t0 + Duration::from_millis(50);
    assert_eq!(drawer.frame(t1), track.sample(t1));
    assert!(drawer.frame(t1).offset_x > 0.0 && drawer.frame(t1).offset_x < 120.0);
}

#[test]
fn test_drag_resumes_after_mid_gesture_close() {
    let (mut drawer, _, sink) = TestDrawerBuilder::new().build();
    let t0 = Instant::now();

    drawer.touch_start_at(4.0, 300.0, t0);
    drawer.touch_move(edge_pan(5.0));
    drawer.touch_move(edge_pan(120.0));
    drawer.close_at(t0);

    // The gesture is still owned; the next move takes the display back
    assert_eq!(drawer.touch_move(edge_pan(100.0)), TouchResponse::Claimed);
    assert_eq!(sink.last(), Some(LiveTransform::new(100.0, 0.75)));
    assert_eq!(drawer.frame(t0 + Duration::from_millis(10)), LiveTransform::new(100.0, 0.75));

    assert_eq!(
        drawer.touch_end_at(edge_pan(100.0), t0 + Duration::from_millis(20)),
        Release::Resolve(DrawerState::Open)
    );
}

#[test]
fn test_zero_duration_falls_back_to_default() {
    let config = reveal_drawer::DrawerConfig::default().with_duration_ms(0);
    let (mut drawer, _, _) = TestDrawerBuilder::new().with_config(config).build();

    let track = drawer.open_at(Instant::now());
    assert_eq!(track.duration, Duration::from_millis(250));
}
