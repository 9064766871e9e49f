//! Viewport state, derived pan bounds, and immutable snapshots.
//!
//! `ViewportState` is mutated only by [`crate::controller::ViewportCore`].
//! `ViewportConstraints` is recomputed from live geometry before every
//! transform and never persisted.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use serde::Serialize;

use crate::geom::{Point, Size};
use crate::transform::Transform;

/// Which event stream is driving a pinch.
///
/// Safari delivers both touch events and its own gesture events for the same
/// two fingers. Their "distance" units differ (pixels vs. a relative ratio),
/// so a baseline only accepts updates from the stream that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PinchSource {
    Touch,
    Gesture,
}

/// Reference captured on the first frame of a two-finger gesture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PinchBaseline {
    /// Distance between the two touches (or gesture scale) when the gesture started.
    pub distance: f64,
    /// Viewport scale when the gesture started.
    pub scale: f64,
    pub source: PinchSource,
}

/// Which gesture, if any, is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gesture {
    #[default]
    Idle,
    Dragging,
    Pinching,
}

/// Mutable pan/zoom state of one wall.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportState {
    /// True between a drag start on empty canvas and the matching release.
    pub is_dragging: bool,
    /// Pointer position at drag start minus `committed_pan`.
    pub drag_anchor: Point,
    /// Current canvas translation.
    pub pan: Point,
    /// Pan persisted at the end of the last drag or zoom.
    pub committed_pan: Point,
    /// Uniform zoom factor.
    pub scale: f64,
    pub pinch: Option<PinchBaseline>,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            is_dragging: false,
            drag_anchor: Point::ORIGIN,
            pan: Point::ORIGIN,
            committed_pan: Point::ORIGIN,
            scale: 1.0,
            pinch: None,
        }
    }
}

impl ViewportState {
    #[must_use]
    pub fn gesture(&self) -> Gesture {
        if self.pinch.is_some() {
            Gesture::Pinching
        } else if self.is_dragging {
            Gesture::Dragging
        } else {
            Gesture::Idle
        }
    }

    #[must_use]
    pub fn transform(&self) -> Transform {
        Transform::new(self.pan, self.scale)
    }
}

/// Legal ranges for pan and scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewportConstraints {
    pub pan_min: Point,
    pub pan_max: Point,
    pub scale_min: f64,
    pub scale_max: f64,
}

impl ViewportConstraints {
    /// Derive pan bounds for content of `canvas` natural size drawn at `scale`
    /// inside a viewport of `viewport` size.
    ///
    /// The canvas can never be pulled right of / below its origin, so
    /// `pan_max` is always zero. `pan_min` is the negated overflow, or zero
    /// when the scaled content fits, which locks that axis.
    #[must_use]
    pub fn derive(canvas: Size, viewport: Size, scale: f64, scale_min: f64, scale_max: f64) -> Self {
        let scaled = canvas.scaled(scale);
        let pan_min = Point::new(
            0.0_f64.min(-(scaled.width - viewport.width)),
            0.0_f64.min(-(scaled.height - viewport.height)),
        );
        Self { pan_min, pan_max: Point::ORIGIN, scale_min, scale_max }
    }

    /// Clamp a pan offset into bounds.
    #[must_use]
    pub fn clamp_pan(&self, pan: Point) -> Point {
        pan.clamp_axes(self.pan_min, self.pan_max)
    }

    #[must_use]
    pub fn contains_pan(&self, pan: Point) -> bool {
        (self.pan_min.x..=self.pan_max.x).contains(&pan.x) && (self.pan_min.y..=self.pan_max.y).contains(&pan.y)
    }
}

/// Read-only copy of a wall's state for diagnostics, tests, and the JS side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewportSnapshot {
    pub gesture: Gesture,
    pub is_dragging: bool,
    pub drag_anchor: Point,
    pub pan: Point,
    pub committed_pan: Point,
    pub scale: f64,
    pub pinch: Option<PinchBaseline>,
    pub constraints: ViewportConstraints,
}

impl ViewportSnapshot {
    #[must_use]
    pub fn capture(state: &ViewportState, constraints: ViewportConstraints) -> Self {
        Self {
            gesture: state.gesture(),
            is_dragging: state.is_dragging,
            drag_anchor: state.drag_anchor,
            pan: state.pan,
            committed_pan: state.committed_pan,
            scale: state.scale,
            pinch: state.pinch,
            constraints,
        }
    }

    /// Serialize for the JS side.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
