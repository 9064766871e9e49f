//! Viewport construction options.
//!
//! The site shipped two walls with different zoom ranges, so the bounds and
//! step sizes are options rather than constants. Options can be built in Rust
//! or parsed from a JSON object handed over by the page, e.g.
//! `{"scale_min": 0.5, "scale_max": 3.0}`; missing keys take defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    BUTTON_STEP, CANVAS_CLASS, INTERACTIVE_SELECTOR, SCALE_MAX, SCALE_MIN, WHEEL_STEP, WIDE_SCALE_MAX, WIDE_SCALE_MIN,
};
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Lower zoom bound.
    pub scale_min: f64,
    /// Upper zoom bound.
    pub scale_max: f64,
    /// Relative zoom per wheel notch.
    pub wheel_step: f64,
    /// Relative zoom per `zoom_in` / `zoom_out` call.
    pub button_step: f64,
    /// Class of the content layer that receives the transform.
    pub canvas_class: String,
    /// Selector matching cards that must keep their own click/selection behaviour.
    pub interactive_selector: String,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            scale_min: SCALE_MIN,
            scale_max: SCALE_MAX,
            wheel_step: WHEEL_STEP,
            button_step: BUTTON_STEP,
            canvas_class: CANVAS_CLASS.to_string(),
            interactive_selector: INTERACTIVE_SELECTOR.to_string(),
        }
    }
}

impl ViewportConfig {
    /// The wide-range preset (`[0.5, 3.0]`) used by the standalone wall page.
    #[must_use]
    pub fn wide() -> Self {
        Self { scale_min: WIDE_SCALE_MIN, scale_max: WIDE_SCALE_MAX, ..Self::default() }
    }

    /// Parse options from JSON and validate them.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that bounds and steps describe a usable viewport.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (min, max) = (self.scale_min, self.scale_max);
        if !(min.is_finite() && max.is_finite() && min > 0.0 && min <= max) {
            return Err(ConfigError::InvalidScaleRange { min, max });
        }
        check_step("wheel_step", self.wheel_step)?;
        check_step("button_step", self.button_step)?;
        if self.canvas_class.trim().is_empty() {
            return Err(ConfigError::EmptySelector { name: "canvas_class" });
        }
        if self.interactive_selector.trim().is_empty() {
            return Err(ConfigError::EmptySelector { name: "interactive_selector" });
        }
        Ok(())
    }

    /// Clamp a scale into the configured bounds.
    #[must_use]
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        crate::geom::clamp(scale, self.scale_min, self.scale_max)
    }
}

fn check_step(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidStep { name, value })
    }
}
