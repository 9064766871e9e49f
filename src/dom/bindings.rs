//! wasm-bindgen exports for the page's scripts.
//!
//! ```js
//! import init, { initLogging, WallManager } from "./pkg/notewall.js";
//! await init();
//! initLogging("info");
//! const walls = new WallManager();
//! walls.create("#notes-wall", JSON.stringify({ scale_min: 0.5, scale_max: 3.0 }));
//! document.querySelector("#zoom-in").onclick = () => walls.zoomIn("#notes-wall");
//! ```

use wasm_bindgen::prelude::*;

use super::wall::PannableWall;
use crate::config::ViewportConfig;
use crate::error::ConfigError;
use crate::registry::{Dispose, WallRegistry};

/// Install the panic hook and the console logger. Safe to call repeatedly.
///
/// `level` is a `log` level name (`"debug"`, `"info"`, ...); defaults to info.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(level: Option<String>) {
    console_error_panic_hook::set_once();
    let level = match level.as_deref().map(str::parse::<log::Level>) {
        Some(Ok(level)) => level,
        _ => log::Level::Info,
    };
    if console_log::init_with_level(level).is_err() {
        log::debug!("logger already installed");
    }
}

fn parse_config(raw: Option<&str>) -> Result<ViewportConfig, ConfigError> {
    match raw {
        Some(raw) if !raw.trim().is_empty() => ViewportConfig::from_json(raw),
        _ => Ok(ViewportConfig::default()),
    }
}

/// A single wall handle, for pages that manage one wall themselves.
#[wasm_bindgen]
pub struct NotesWall {
    inner: PannableWall,
}

#[wasm_bindgen]
impl NotesWall {
    /// Mount on `selector`. Throws if the element is missing or the config is invalid.
    #[wasm_bindgen(constructor)]
    pub fn new(selector: &str, config_json: Option<String>) -> Result<NotesWall, JsError> {
        let config = parse_config(config_json.as_deref())?;
        Ok(Self { inner: PannableWall::mount(selector, config)? })
    }

    pub fn reset(&self) {
        self.inner.reset();
    }

    #[wasm_bindgen(js_name = zoomIn)]
    pub fn zoom_in(&self) -> bool {
        self.inner.zoom_in()
    }

    #[wasm_bindgen(js_name = zoomOut)]
    pub fn zoom_out(&self) -> bool {
        self.inner.zoom_out()
    }

    /// JSON snapshot of the viewport state.
    pub fn state(&self) -> Result<Option<String>, JsError> {
        match self.inner.snapshot() {
            Some(snapshot) => Ok(Some(snapshot.to_json()?)),
            None => Ok(None),
        }
    }

    /// `false` once `dispose` has run.
    #[wasm_bindgen(js_name = isAttached)]
    pub fn is_attached(&self) -> bool {
        self.inner.is_attached()
    }

    /// Remove every listener this wall registered.
    pub fn dispose(&mut self) {
        self.inner.dispose();
    }
}

/// Selector-keyed set of walls owned by the page.
#[wasm_bindgen]
pub struct WallManager {
    registry: WallRegistry<PannableWall>,
}

impl Default for WallManager {
    fn default() -> Self {
        Self { registry: WallRegistry::new() }
    }
}

#[wasm_bindgen]
impl WallManager {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WallManager {
        Self::default()
    }

    /// Mount a wall. Throws if `selector` is already mounted or missing.
    pub fn create(&mut self, selector: &str, config_json: Option<String>) -> Result<(), JsError> {
        let config = parse_config(config_json.as_deref())?;
        self.registry
            .create_with(selector, |selector| PannableWall::mount(selector, config))?;
        Ok(())
    }

    /// Dispose any wall on `selector` and mount a fresh one.
    pub fn replace(&mut self, selector: &str, config_json: Option<String>) -> Result<(), JsError> {
        let config = parse_config(config_json.as_deref())?;
        self.registry
            .replace_with(selector, |selector| PannableWall::mount(selector, config))?;
        Ok(())
    }

    pub fn destroy(&mut self, selector: &str) -> bool {
        self.registry.destroy(selector)
    }

    pub fn contains(&self, selector: &str) -> bool {
        self.registry.contains(selector)
    }

    pub fn selectors(&self) -> Vec<String> {
        self.registry.selectors().map(str::to_string).collect()
    }

    /// Reset the wall on `selector`; `false` if none is mounted.
    pub fn reset(&self, selector: &str) -> bool {
        match self.registry.get(selector) {
            Some(wall) => {
                wall.reset();
                true
            }
            None => false,
        }
    }

    #[wasm_bindgen(js_name = zoomIn)]
    pub fn zoom_in(&self, selector: &str) -> bool {
        self.registry.get(selector).is_some_and(PannableWall::zoom_in)
    }

    #[wasm_bindgen(js_name = zoomOut)]
    pub fn zoom_out(&self, selector: &str) -> bool {
        self.registry.get(selector).is_some_and(PannableWall::zoom_out)
    }

    pub fn state(&self, selector: &str) -> Result<Option<String>, JsError> {
        match self.registry.get(selector).and_then(PannableWall::snapshot) {
            Some(snapshot) => Ok(Some(snapshot.to_json()?)),
            None => Ok(None),
        }
    }

    /// Dispose every wall.
    pub fn clear(&mut self) {
        self.registry.clear();
    }
}
