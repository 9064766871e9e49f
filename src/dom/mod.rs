//! Browser integration (feature `dom`).
//!
//! SYSTEM CONTEXT
//! ==============
//! The page calls into this module through the wasm-bindgen exports in
//! [`bindings`]. [`wall::PannableWall`] resolves the wall element, builds a
//! [`crate::ViewportCore`] over a [`surface::DomSurface`], and owns the event
//! listeners that drive it.

pub mod bindings;
pub mod surface;
pub mod wall;

pub use bindings::{NotesWall, WallManager, init_logging};
pub use surface::DomSurface;
pub use wall::PannableWall;
