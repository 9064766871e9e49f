//! Shared defaults for the viewport controller.

// ── Zoom ────────────────────────────────────────────────────────

/// Smallest zoom factor of the default wall.
pub const SCALE_MIN: f64 = 0.8;

/// Largest zoom factor of the default wall.
pub const SCALE_MAX: f64 = 2.0;

/// Smallest zoom factor of the wide-range wall preset.
pub const WIDE_SCALE_MIN: f64 = 0.5;

/// Largest zoom factor of the wide-range wall preset.
pub const WIDE_SCALE_MAX: f64 = 3.0;

/// Relative zoom change per wheel notch, regardless of scroll magnitude.
pub const WHEEL_STEP: f64 = 0.1;

/// Relative zoom change for the zoom-in / zoom-out buttons.
pub const BUTTON_STEP: f64 = 0.2;

// ── DOM ─────────────────────────────────────────────────────────

/// Class of the transformed content layer inside the wall.
pub const CANVAS_CLASS: &str = "notes-canvas";

/// Selector for interactive content that must not start a drag.
pub const INTERACTIVE_SELECTOR: &str = ".note";

/// Cursor shown while the wall is idle.
pub const CURSOR_GRAB: &str = "grab";

/// Cursor shown during a drag.
pub const CURSOR_GRABBING: &str = "grabbing";
