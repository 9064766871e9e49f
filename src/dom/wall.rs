//! A mounted wall: the controller plus the DOM listeners feeding it.
//!
//! Listeners are `gloo_events::EventListener` values owned by the wall, so
//! dropping or disposing the wall detaches all of them, including the
//! document-level `mousemove` / `mouseup` listeners that keep a drag alive
//! when the pointer leaves the wall.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, MouseEvent, TouchEvent, TouchList, WheelEvent};

use super::surface::DomSurface;
use crate::config::ViewportConfig;
use crate::controller::ViewportCore;
use crate::error::ViewportError;
use crate::geom::Point;
use crate::input::{EventOutcome, Target, TouchPoints, WheelInput};
use crate::registry::Dispose;
use crate::state::ViewportSnapshot;
use crate::surface::Surface;

type SharedCore = Rc<RefCell<ViewportCore<DomSurface>>>;

pub struct PannableWall {
    selector: String,
    core: SharedCore,
    listeners: Vec<EventListener>,
}

impl PannableWall {
    /// Mount a controller on the element matching `selector`.
    pub fn mount(selector: &str, config: ViewportConfig) -> Result<Self, ViewportError> {
        config.validate()?;
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| ViewportError::Dom("no document available".into()))?;
        let surface = DomSurface::resolve(&document, selector, &config.canvas_class)?;
        let wall: EventTarget = surface.wall().clone().into();
        let interactive = Rc::<str>::from(config.interactive_selector.as_str());
        let core = Rc::new(RefCell::new(ViewportCore::new(surface, config)?));
        let listeners = attach_listeners(&document, &wall, &core, &interactive);
        log::info!("wall mounted: {selector} ({} listeners)", listeners.len());
        Ok(Self { selector: selector.to_string(), core, listeners })
    }

    #[must_use]
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Whether listeners are still attached.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        !self.listeners.is_empty()
    }

    pub fn reset(&self) {
        with_core(&self.core, ViewportCore::reset);
    }

    pub fn zoom_in(&self) -> bool {
        with_core(&self.core, ViewportCore::zoom_in).unwrap_or(false)
    }

    pub fn zoom_out(&self) -> bool {
        with_core(&self.core, ViewportCore::zoom_out).unwrap_or(false)
    }

    /// Snapshot of the current state; `None` only while an event handler holds the core.
    #[must_use]
    pub fn snapshot(&self) -> Option<ViewportSnapshot> {
        match self.core.try_borrow() {
            Ok(core) => Some(core.snapshot()),
            Err(_) => None,
        }
    }
}

impl Dispose for PannableWall {
    fn dispose(&mut self) {
        let count = self.listeners.len();
        self.listeners.clear();
        if count > 0 {
            log::info!("wall disposed: {} ({count} listeners removed)", self.selector);
        }
    }
}

/// Run `f` against the core unless it is already borrowed by a handler.
fn with_core<T>(core: &SharedCore, f: impl FnOnce(&mut ViewportCore<DomSurface>) -> T) -> Option<T> {
    match core.try_borrow_mut() {
        Ok(mut core) => Some(f(&mut core)),
        Err(_) => {
            log::debug!("viewport busy, event dropped");
            None
        }
    }
}

fn prevent_if(event: &Event, outcome: EventOutcome) {
    if outcome.is_consumed() {
        event.prevent_default();
    }
}

fn classify_target(event: &Event, interactive: &str) -> Target {
    let Some(target) = event.target() else {
        return Target::Surface;
    };
    let Some(element) = target.dyn_ref::<Element>() else {
        return Target::Surface;
    };
    match element.closest(interactive) {
        Ok(Some(_)) => Target::Interactive,
        Ok(None) => Target::Surface,
        Err(err) => {
            log::warn!("invalid interactive selector {interactive}: {err:?}");
            Target::Surface
        }
    }
}

fn mouse_point(core: &ViewportCore<DomSurface>, event: &MouseEvent) -> Point {
    core.surface()
        .local_point(f64::from(event.client_x()), f64::from(event.client_y()))
}

fn touch_points(core: &ViewportCore<DomSurface>, list: &TouchList) -> TouchPoints {
    let points: Vec<Point> = (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|touch| {
            core.surface()
                .local_point(f64::from(touch.client_x()), f64::from(touch.client_y()))
        })
        .collect();
    TouchPoints::from(points)
}

/// Read a numeric property off an event web-sys has no type for (`GestureEvent`).
fn number_prop(event: &Event, name: &str) -> Option<f64> {
    match js_sys::Reflect::get(event.as_ref(), &JsValue::from_str(name)) {
        Ok(value) => value.as_f64(),
        Err(_) => None,
    }
}

#[allow(clippy::too_many_lines)]
fn attach_listeners(
    document: &Document,
    wall: &EventTarget,
    core: &SharedCore,
    interactive: &Rc<str>,
) -> Vec<EventListener> {
    let active = EventListenerOptions::enable_prevent_default();
    let mut listeners = Vec::with_capacity(12);

    // Mouse: press on the wall, track and release on the whole document.
    {
        let core = Rc::clone(core);
        let interactive = Rc::clone(interactive);
        listeners.push(EventListener::new_with_options(wall, "mousedown", active, move |event| {
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let target = classify_target(event, &interactive);
            let outcome = with_core(&core, |core| {
                let position = mouse_point(core, mouse);
                core.begin_drag(position, target)
            });
            prevent_if(event, outcome.unwrap_or(EventOutcome::Ignored));
        }));
    }
    {
        let core = Rc::clone(core);
        listeners.push(EventListener::new_with_options(document, "mousemove", active, move |event| {
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let outcome = with_core(&core, |core| {
                let position = mouse_point(core, mouse);
                core.continue_drag(position)
            });
            prevent_if(event, outcome.unwrap_or(EventOutcome::Ignored));
        }));
    }
    {
        let core = Rc::clone(core);
        listeners.push(EventListener::new(document, "mouseup", move |_event| {
            with_core(&core, ViewportCore::end_drag);
        }));
    }

    // Wheel: must be non-passive so page scroll can be suppressed.
    {
        let core = Rc::clone(core);
        listeners.push(EventListener::new_with_options(wall, "wheel", active, move |event| {
            let Some(wheel) = event.dyn_ref::<WheelEvent>() else {
                return;
            };
            let outcome = with_core(&core, |core| {
                let position = mouse_point(core, wheel);
                core.wheel(WheelInput { dy: wheel.delta_y(), position })
            });
            prevent_if(event, outcome.unwrap_or(EventOutcome::Ignored));
        }));
    }

    // Touch: one finger drags, two fingers pinch.
    {
        let core = Rc::clone(core);
        let interactive = Rc::clone(interactive);
        listeners.push(EventListener::new_with_options(wall, "touchstart", active, move |event| {
            let Some(touch) = event.dyn_ref::<TouchEvent>() else {
                return;
            };
            let target = classify_target(event, &interactive);
            let outcome = with_core(&core, |core| {
                let points = touch_points(core, &touch.touches());
                core.touch_start(&points, target)
            });
            prevent_if(event, outcome.unwrap_or(EventOutcome::Ignored));
        }));
    }
    {
        let core = Rc::clone(core);
        listeners.push(EventListener::new_with_options(wall, "touchmove", active, move |event| {
            let Some(touch) = event.dyn_ref::<TouchEvent>() else {
                return;
            };
            let outcome = with_core(&core, |core| {
                let points = touch_points(core, &touch.touches());
                core.touch_move(&points)
            });
            prevent_if(event, outcome.unwrap_or(EventOutcome::Ignored));
        }));
    }
    for kind in ["touchend", "touchcancel"] {
        let core = Rc::clone(core);
        listeners.push(EventListener::new(wall, kind, move |event| {
            let Some(touch) = event.dyn_ref::<TouchEvent>() else {
                return;
            };
            let remaining = touch.touches().length() as usize;
            with_core(&core, |core| core.touch_end(remaining));
        }));
    }

    // Safari gesture events feed the same pinch path as touches.
    listeners.push(EventListener::new_with_options(wall, "gesturestart", active, |event| {
        event.prevent_default();
    }));
    {
        let core = Rc::clone(core);
        listeners.push(EventListener::new_with_options(wall, "gesturechange", active, move |event| {
            event.prevent_default();
            let Some(scale) = number_prop(event, "scale") else {
                return;
            };
            with_core(&core, |core| {
                let center = match (number_prop(event, "clientX"), number_prop(event, "clientY")) {
                    (Some(x), Some(y)) => core.surface().local_point(x, y),
                    _ => core.surface().viewport_size().center(),
                };
                core.gesture_change(scale, center)
            });
        }));
    }
    {
        let core = Rc::clone(core);
        listeners.push(EventListener::new_with_options(wall, "gestureend", active, move |event| {
            event.prevent_default();
            with_core(&core, ViewportCore::gesture_end);
        }));
    }

    // Native image/text drag would fight the pan gesture.
    listeners.push(EventListener::new_with_options(wall, "dragstart", active, |event| {
        event.prevent_default();
    }));

    listeners
}
