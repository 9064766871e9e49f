//! web-sys implementation of [`Surface`].

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use crate::error::ViewportError;
use crate::geom::{Point, Size};
use crate::input::Cursor;
use crate::surface::Surface;
use crate::transform::Transform;

/// The wall element (viewport) and the canvas element it contains.
pub struct DomSurface {
    wall: HtmlElement,
    canvas: HtmlElement,
}

impl DomSurface {
    /// Resolve `selector` and locate, or create, the canvas inside it.
    ///
    /// When no child carries `canvas_class`, a new `div` with that class is
    /// created and every existing child of the wall is moved into it.
    pub fn resolve(document: &Document, selector: &str, canvas_class: &str) -> Result<Self, ViewportError> {
        let wall = document
            .query_selector(selector)
            .map_err(js_err)?
            .ok_or_else(|| ViewportError::ElementNotFound { selector: selector.to_string() })?;
        let wall = into_html(wall, selector)?;
        let canvas = find_or_wrap_canvas(document, &wall, canvas_class)?;
        Ok(Self { wall, canvas })
    }

    #[must_use]
    pub fn wall(&self) -> &HtmlElement {
        &self.wall
    }

    #[must_use]
    pub fn canvas(&self) -> &HtmlElement {
        &self.canvas
    }

    /// Convert client coordinates to coordinates relative to the wall's top-left corner.
    #[must_use]
    pub fn local_point(&self, client_x: f64, client_y: f64) -> Point {
        let rect = self.wall.get_bounding_client_rect();
        Point::new(client_x - rect.left(), client_y - rect.top())
    }

    fn set_style(element: &HtmlElement, property: &str, value: &str) {
        if let Err(err) = element.style().set_property(property, value) {
            log::warn!("failed to set {property}: {err:?}");
        }
    }
}

impl Surface for DomSurface {
    fn viewport_size(&self) -> Size {
        let rect = self.wall.get_bounding_client_rect();
        Size::new(rect.width(), rect.height())
    }

    fn canvas_size(&self) -> Size {
        Size::new(f64::from(self.canvas.offset_width()), f64::from(self.canvas.offset_height()))
    }

    fn apply(&mut self, transform: &Transform) {
        Self::set_style(&self.canvas, "transform", &transform.to_css());
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        Self::set_style(&self.wall, "cursor", cursor.as_css());
    }
}

fn find_or_wrap_canvas(document: &Document, wall: &HtmlElement, canvas_class: &str) -> Result<HtmlElement, ViewportError> {
    let existing = wall.query_selector(&format!(".{canvas_class}")).map_err(js_err)?;
    if let Some(canvas) = existing {
        return into_html(canvas, canvas_class);
    }

    let canvas = into_html(document.create_element("div").map_err(js_err)?, canvas_class)?;
    canvas.set_class_name(canvas_class);
    while let Some(child) = wall.first_child() {
        canvas.append_child(&child).map_err(js_err)?;
    }
    wall.append_child(&canvas).map_err(js_err)?;
    log::debug!("wrapped wall content in .{canvas_class}");
    Ok(canvas)
}

fn into_html(element: Element, what: &str) -> Result<HtmlElement, ViewportError> {
    element
        .dyn_into::<HtmlElement>()
        .map_err(|_| ViewportError::Dom(format!("{what} is not an HTML element")))
}

pub(crate) fn js_err(err: JsValue) -> ViewportError {
    ViewportError::Dom(format!("{err:?}"))
}
