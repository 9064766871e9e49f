//! Input values consumed by the controller.
//!
//! The DOM layer reduces raw browser events to these types: positions are
//! already relative to the wall's top-left corner, and the pointer target has
//! already been classified. Nothing here touches web-sys.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geom::Point;

/// What a pointer-down landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Target {
    /// Empty wall or canvas area; a drag may start here.
    #[default]
    Surface,
    /// A note card or something inside one; clicks and selection belong to it.
    Interactive,
}

/// Whether the caller should suppress the event's default action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// The controller did nothing; let the browser handle the event.
    Ignored,
    /// The controller acted on the event; call `preventDefault`.
    Consumed,
}

impl EventOutcome {
    #[must_use]
    pub fn is_consumed(self) -> bool {
        matches!(self, Self::Consumed)
    }
}

/// Cursor affordance shown on the wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Grab,
    Grabbing,
}

impl Cursor {
    /// CSS `cursor` value.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Grab => crate::consts::CURSOR_GRAB,
            Self::Grabbing => crate::consts::CURSOR_GRABBING,
        }
    }
}

/// A wheel event: vertical delta and pointer position.
#[derive(Debug, Clone, Copy)]
pub struct WheelInput {
    /// Vertical scroll amount (positive = down / towards the user).
    pub dy: f64,
    /// Pointer position relative to the wall.
    pub position: Point,
}

impl WheelInput {
    /// Fixed-magnitude zoom delta for this notch: scrolling down zooms out.
    ///
    /// Only the sign of `dy` matters, so high-resolution trackpads cannot
    /// produce runaway zoom. `None` for purely horizontal scrolling.
    #[must_use]
    pub fn zoom_delta(&self, step: f64) -> Option<f64> {
        if self.dy > 0.0 {
            Some(-step)
        } else if self.dy < 0.0 {
            Some(step)
        } else {
            None
        }
    }
}

/// Active touch points of a touch event, relative to the wall.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TouchPoints(pub Vec<Point>);

impl TouchPoints {
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The only touch, if exactly one is active.
    #[must_use]
    pub fn single(&self) -> Option<Point> {
        match self.0.as_slice() {
            [p] => Some(*p),
            _ => None,
        }
    }

    /// The two touches, if exactly two are active.
    #[must_use]
    pub fn pair(&self) -> Option<(Point, Point)> {
        match self.0.as_slice() {
            [a, b] => Some((*a, *b)),
            _ => None,
        }
    }
}

impl From<Vec<Point>> for TouchPoints {
    fn from(points: Vec<Point>) -> Self {
        Self(points)
    }
}
