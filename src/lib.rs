//! Pan/zoom viewport controller for the notes wall.
//!
//! Visitors' notes render as sticky-note cards on a wall that can be dragged
//! and pinch/wheel-zoomed. This crate owns that interaction: it keeps the pan
//! offset and zoom scale of a "canvas" element nested inside a fixed-size
//! "viewport" element, keeps the content bounded, and keeps the point under
//! the cursor (or between two fingers) stable while zooming. Its only output
//! is a CSS transform string applied to the canvas.
//!
//! The logic lives in [`controller::ViewportCore`], which talks to the page
//! only through the [`surface::Surface`] trait and is therefore testable
//! without a browser. The `dom` feature adds the web-sys surface, event
//! wiring and wasm-bindgen exports.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | The controller core: drag, zoom, pinch, constraints |
//! | [`state`] | Mutable viewport state, derived constraints, snapshots |
//! | [`input`] | Input value types consumed by the controller |
//! | [`transform`] | The pan + scale transform and its CSS form |
//! | [`surface`] | Seam between the controller and the rendering layer |
//! | [`registry`] | Owner-held selector → wall mapping |
//! | [`config`] | Construction options and validation |
//! | [`error`] | Error types |
//! | [`geom`] | `Point` / `Size` primitives |
//! | [`consts`] | Shared defaults (scale bounds, zoom steps, class names) |
//! | `dom` | Browser surface, listeners and JS bindings (feature `dom`) |

pub mod config;
pub mod consts;
pub mod controller;
pub mod error;
pub mod geom;
pub mod input;
pub mod registry;
pub mod state;
pub mod surface;
pub mod transform;

#[cfg(feature = "dom")]
pub mod dom;

pub use config::ViewportConfig;
pub use controller::ViewportCore;
pub use error::{ConfigError, ViewportError};
pub use registry::{Dispose, WallRegistry};
pub use state::{Gesture, ViewportSnapshot};
