//! The canvas transform: a translation followed by a uniform scale.
//!
//! This is the controller's sole output. Its `Display` form is the exact CSS
//! `transform` value the canvas element receives, with numbers formatted the
//! way a browser's own `Number` to string conversion would (`1`, not `1.0`).

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

use std::fmt;

use crate::geom::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub pan: Point,
    pub scale: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self { pan: Point::ORIGIN, scale: 1.0 };

    #[must_use]
    pub fn new(pan: Point, scale: f64) -> Self {
        Self { pan, scale }
    }

    /// Map a canvas-space point to the viewport point it is drawn at.
    #[must_use]
    pub fn canvas_to_viewport(&self, canvas: Point) -> Point {
        canvas * self.scale + self.pan
    }

    /// Map a viewport point back to the canvas-space point underneath it.
    #[must_use]
    pub fn viewport_to_canvas(&self, viewport: Point) -> Point {
        (viewport - self.pan) * (1.0 / self.scale)
    }

    /// The CSS `transform` value.
    #[must_use]
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translate({}px, {}px) scale({})",
            css_number(self.pan.x),
            css_number(self.pan.y),
            css_number(self.scale)
        )
    }
}

// Adding +0.0 folds -0.0 into 0.0 so the output never reads "-0px".
fn css_number(value: f64) -> f64 {
    value + 0.0
}
