//! The viewport controller core.
//!
//! `ViewportCore` turns drag, wheel, touch and gesture input into pan/zoom
//! state and pushes the resulting transform to its [`Surface`]. It holds no
//! browser types, so the whole interaction model is exercised natively in
//! tests; `dom::PannableWall` wraps it for the page.
//!
//! Every mutating path ends in [`ViewportCore::apply_transform`], which
//! re-reads geometry, re-derives the pan bounds and clamps before rendering.
//! Constraints are never cached across events, so a missed or duplicated
//! event is corrected by the next one.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::config::ViewportConfig;
use crate::error::ViewportError;
use crate::geom::Point;
use crate::input::{Cursor, EventOutcome, Target, TouchPoints, WheelInput};
use crate::state::{Gesture, PinchBaseline, PinchSource, ViewportConstraints, ViewportSnapshot, ViewportState};
use crate::surface::Surface;
use crate::transform::Transform;

pub struct ViewportCore<S: Surface> {
    surface: S,
    config: ViewportConfig,
    state: ViewportState,
    constraints: ViewportConstraints,
}

impl<S: Surface> ViewportCore<S> {
    /// Build a controller at the identity view and render it once.
    pub fn new(surface: S, config: ViewportConfig) -> Result<Self, ViewportError> {
        config.validate()?;
        let state = ViewportState { scale: config.clamp_scale(1.0), ..ViewportState::default() };
        let constraints = ViewportConstraints::derive(
            surface.canvas_size(),
            surface.viewport_size(),
            state.scale,
            config.scale_min,
            config.scale_max,
        );
        let mut core = Self { surface, config, state, constraints };
        core.surface.set_cursor(Cursor::Grab);
        core.apply_transform();
        Ok(core)
    }

    // --- Drag ---

    /// Start dragging from `position` unless the pointer landed on a card.
    pub fn begin_drag(&mut self, position: Point, target: Target) -> EventOutcome {
        if target == Target::Interactive {
            return EventOutcome::Ignored;
        }
        self.state.is_dragging = true;
        self.state.drag_anchor = position - self.state.committed_pan;
        self.surface.set_cursor(Cursor::Grabbing);
        log::debug!("drag started at ({}, {})", position.x, position.y);
        EventOutcome::Consumed
    }

    /// Move the canvas so the grabbed point follows `position`.
    pub fn continue_drag(&mut self, position: Point) -> EventOutcome {
        if !self.state.is_dragging {
            return EventOutcome::Ignored;
        }
        let constraints = self.recompute_constraints();
        self.state.pan = constraints.clamp_pan(position - self.state.drag_anchor);
        self.apply_transform();
        EventOutcome::Consumed
    }

    /// Finish a drag and commit its pan. Returns whether a drag was active.
    pub fn end_drag(&mut self) -> bool {
        if !self.state.is_dragging {
            return false;
        }
        self.state.is_dragging = false;
        self.state.committed_pan = self.state.pan;
        self.surface.set_cursor(Cursor::Grab);
        log::debug!("drag ended at pan ({}, {})", self.state.pan.x, self.state.pan.y);
        true
    }

    // --- Zoom ---

    /// Zoom by the relative `delta`, keeping the canvas point under `anchor` fixed.
    ///
    /// Returns `false`, touching nothing, when the clamped scale equals the
    /// current one. Running the pan correction with an unchanged scale is what
    /// makes content drift when the user keeps zooming at a limit.
    #[allow(clippy::float_cmp)]
    pub fn zoom_at_point(&mut self, anchor: Point, delta: f64) -> bool {
        if !delta.is_finite() {
            return false;
        }
        let old_scale = self.state.scale;
        let new_scale = self.config.clamp_scale(old_scale * (1.0 + delta));
        if new_scale == old_scale {
            return false;
        }
        let pinned = self.state.transform().viewport_to_canvas(anchor);
        self.state.scale = new_scale;
        let drift = self.state.transform().canvas_to_viewport(pinned) - anchor;
        self.state.pan = self.state.pan - drift;
        self.apply_transform();
        self.state.committed_pan = self.state.pan;
        true
    }

    /// Zoom one fixed step per wheel notch, towards the pointer.
    pub fn wheel(&mut self, input: WheelInput) -> EventOutcome {
        let Some(delta) = input.zoom_delta(self.config.wheel_step) else {
            return EventOutcome::Ignored;
        };
        self.zoom_at_point(input.position, delta);
        EventOutcome::Consumed
    }

    /// Zoom in one button step around the viewport centre.
    pub fn zoom_in(&mut self) -> bool {
        let center = self.surface.viewport_size().center();
        self.zoom_at_point(center, self.config.button_step)
    }

    /// Zoom out one button step around the viewport centre.
    pub fn zoom_out(&mut self) -> bool {
        let center = self.surface.viewport_size().center();
        self.zoom_at_point(center, -self.config.button_step)
    }

    // --- Pinch ---

    /// Two-finger update. The first call of a gesture only records the baseline.
    pub fn pinch_update(&mut self, a: Point, b: Point) -> EventOutcome {
        self.pinch_to(PinchSource::Touch, a.distance(b), a.midpoint(b))
    }

    /// Safari `gesturechange`: `scale` is relative to the gesture start and
    /// plays the role of the inter-touch distance.
    pub fn gesture_change(&mut self, scale: f64, center: Point) -> EventOutcome {
        self.pinch_to(PinchSource::Gesture, scale, center)
    }

    /// Safari `gestureend`: drop the baseline if the gesture stream owns it.
    pub fn gesture_end(&mut self) {
        if self.state.pinch.is_some_and(|b| b.source == PinchSource::Gesture) {
            self.pinch_end();
        }
    }

    /// Forget the pinch baseline; the next two-finger update starts a new gesture.
    pub fn pinch_end(&mut self) {
        if self.state.pinch.take().is_some() {
            log::debug!("pinch ended at scale {}", self.state.scale);
        }
    }

    fn pinch_to(&mut self, source: PinchSource, distance: f64, center: Point) -> EventOutcome {
        if !distance.is_finite() {
            return EventOutcome::Ignored;
        }
        match self.state.pinch {
            Some(baseline) if baseline.source != source => {}
            Some(baseline) if baseline.distance > 0.0 => {
                let target = baseline.scale * (distance / baseline.distance);
                let delta = (target - self.state.scale) / self.state.scale;
                self.zoom_at_point(center, delta);
            }
            _ => {
                self.end_drag();
                self.state.pinch = Some(PinchBaseline { distance, scale: self.state.scale, source });
                log::debug!("pinch started: distance {distance}, scale {}", self.state.scale);
            }
        }
        EventOutcome::Consumed
    }

    // --- Touch routing ---

    /// One touch starts a drag; a second touch starts a pinch.
    pub fn touch_start(&mut self, touches: &TouchPoints, target: Target) -> EventOutcome {
        if let Some(point) = touches.single() {
            return self.begin_drag(point, target);
        }
        if let Some((a, b)) = touches.pair() {
            return self.pinch_update(a, b);
        }
        self.pinch_end();
        EventOutcome::Ignored
    }

    pub fn touch_move(&mut self, touches: &TouchPoints) -> EventOutcome {
        if let Some(point) = touches.single() {
            return self.continue_drag(point);
        }
        if let Some((a, b)) = touches.pair() {
            return self.pinch_update(a, b);
        }
        self.pinch_end();
        EventOutcome::Ignored
    }

    /// Called with the number of touches still down after a touch ends.
    pub fn touch_end(&mut self, remaining: usize) {
        if remaining < 2 {
            self.pinch_end();
        }
        if remaining == 0 {
            self.end_drag();
        }
    }

    // --- Constraints / rendering ---

    /// Re-derive pan bounds from the current geometry and scale.
    pub fn recompute_constraints(&mut self) -> ViewportConstraints {
        self.constraints = ViewportConstraints::derive(
            self.surface.canvas_size(),
            self.surface.viewport_size(),
            self.state.scale,
            self.config.scale_min,
            self.config.scale_max,
        );
        self.constraints
    }

    /// Clamp pan into fresh bounds and render. The only place the surface
    /// receives a transform.
    pub fn apply_transform(&mut self) {
        let constraints = self.recompute_constraints();
        self.state.pan = constraints.clamp_pan(self.state.pan);
        let transform = self.state.transform();
        self.surface.apply(&transform);
    }

    /// Return to the identity view.
    pub fn reset(&mut self) {
        self.state.pan = Point::ORIGIN;
        self.state.committed_pan = Point::ORIGIN;
        self.state.scale = self.config.clamp_scale(1.0);
        self.apply_transform();
    }

    // --- Queries ---

    #[must_use]
    pub fn snapshot(&self) -> ViewportSnapshot {
        ViewportSnapshot::capture(&self.state, self.constraints)
    }

    #[must_use]
    pub fn gesture(&self) -> Gesture {
        self.state.gesture()
    }

    #[must_use]
    pub fn transform(&self) -> Transform {
        self.state.transform()
    }

    #[must_use]
    pub fn constraints(&self) -> ViewportConstraints {
        self.constraints
    }

    #[must_use]
    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
