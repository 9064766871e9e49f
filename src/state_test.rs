#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// ViewportState
// =============================================================

#[test]
fn default_state_is_identity() {
    let state = ViewportState::default();
    assert!(!state.is_dragging);
    assert_eq!(state.pan, Point::ORIGIN);
    assert_eq!(state.committed_pan, Point::ORIGIN);
    assert_eq!(state.drag_anchor, Point::ORIGIN);
    assert_eq!(state.scale, 1.0);
    assert!(state.pinch.is_none());
    assert_eq!(state.transform(), Transform::IDENTITY);
}

#[test]
fn gesture_is_derived_from_flags() {
    let mut state = ViewportState::default();
    assert_eq!(state.gesture(), Gesture::Idle);

    state.is_dragging = true;
    assert_eq!(state.gesture(), Gesture::Dragging);

    state.pinch = Some(PinchBaseline { distance: 100.0, scale: 1.0, source: PinchSource::Touch });
    assert_eq!(state.gesture(), Gesture::Pinching);

    state.is_dragging = false;
    assert_eq!(state.gesture(), Gesture::Pinching);
}

// =============================================================
// ViewportConstraints
// =============================================================

#[test]
fn constraints_for_overflowing_content() {
    let c = ViewportConstraints::derive(Size::new(1200.0, 1000.0), Size::new(800.0, 600.0), 1.0, 0.8, 2.0);
    assert_eq!(c.pan_min, Point::new(-400.0, -400.0));
    assert_eq!(c.pan_max, Point::ORIGIN);
    assert_eq!(c.scale_min, 0.8);
    assert_eq!(c.scale_max, 2.0);
}

#[test]
fn constraints_lock_axes_when_content_fits() {
    let c = ViewportConstraints::derive(Size::new(300.0, 200.0), Size::new(800.0, 600.0), 1.0, 0.8, 2.0);
    assert_eq!(c.pan_min, Point::ORIGIN);
    assert_eq!(c.pan_max, Point::ORIGIN);
}

#[test]
fn constraints_account_for_scale() {
    let c = ViewportConstraints::derive(Size::new(500.0, 400.0), Size::new(800.0, 600.0), 2.0, 0.8, 2.0);
    assert_eq!(c.pan_min, Point::new(-200.0, -200.0));
}

#[test]
fn constraints_mixed_axes() {
    let c = ViewportConstraints::derive(Size::new(1000.0, 100.0), Size::new(800.0, 600.0), 1.0, 0.8, 2.0);
    assert_eq!(c.pan_min, Point::new(-200.0, 0.0));
}

#[test]
fn clamp_pan_and_contains() {
    let c = ViewportConstraints::derive(Size::new(1200.0, 1000.0), Size::new(800.0, 600.0), 1.0, 0.8, 2.0);
    let clamped = c.clamp_pan(Point::new(50.0, -900.0));
    assert_eq!(clamped, Point::new(0.0, -400.0));
    assert!(c.contains_pan(clamped));
    assert!(!c.contains_pan(Point::new(1.0, 0.0)));
}

// =============================================================
// ViewportSnapshot
// =============================================================

#[test]
fn snapshot_copies_state() {
    let state = ViewportState {
        is_dragging: true,
        drag_anchor: Point::new(10.0, 20.0),
        pan: Point::new(-5.0, -6.0),
        committed_pan: Point::new(-1.0, -2.0),
        scale: 1.5,
        pinch: None,
    };
    let c = ViewportConstraints::derive(Size::new(1200.0, 1000.0), Size::new(800.0, 600.0), 1.5, 0.8, 2.0);
    let snap = ViewportSnapshot::capture(&state, c);
    assert_eq!(snap.gesture, Gesture::Dragging);
    assert_eq!(snap.pan, state.pan);
    assert_eq!(snap.committed_pan, state.committed_pan);
    assert_eq!(snap.drag_anchor, state.drag_anchor);
    assert_eq!(snap.scale, 1.5);
    assert_eq!(snap.constraints, c);
}

#[test]
fn snapshot_json_shape() {
    let c = ViewportConstraints::derive(Size::new(100.0, 100.0), Size::new(800.0, 600.0), 1.0, 0.8, 2.0);
    let snap = ViewportSnapshot::capture(&ViewportState::default(), c);
    let value: serde_json::Value = serde_json::from_str(&snap.to_json().unwrap()).unwrap();
    assert_eq!(value["gesture"], "idle");
    assert_eq!(value["scale"], 1.0);
    assert_eq!(value["pan"]["x"], 0.0);
    assert!(value["pinch"].is_null());
    assert_eq!(value["constraints"]["scale_max"], 2.0);
}
