//! Seam between the controller and whatever draws the wall.
//!
//! In the browser this is `dom::DomSurface`, which reads element sizes and
//! writes `style.transform` / `style.cursor`. Tests use an in-memory fake.

use crate::geom::Size;
use crate::input::Cursor;
use crate::transform::Transform;

pub trait Surface {
    /// Current size of the fixed viewport element.
    fn viewport_size(&self) -> Size;

    /// Natural (untransformed) size of the canvas content.
    fn canvas_size(&self) -> Size;

    /// Render the canvas with `transform`.
    fn apply(&mut self, transform: &Transform);

    fn set_cursor(&mut self, cursor: Cursor);
}
