//! Owner-held mapping from wall selector to mounted wall.
//!
//! Whoever composes the page owns a `WallRegistry` and creates, replaces and
//! destroys walls through it explicitly. Removing an entry always disposes
//! the wall first, so re-initializing a selector never leaves the old wall's
//! listeners attached.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use std::collections::BTreeMap;

use crate::error::ViewportError;

/// Teardown for a mounted wall: detach every listener it registered.
pub trait Dispose {
    fn dispose(&mut self);
}

pub struct WallRegistry<W: Dispose> {
    walls: BTreeMap<String, W>,
}

impl<W: Dispose> Default for WallRegistry<W> {
    fn default() -> Self {
        Self { walls: BTreeMap::new() }
    }
}

impl<W: Dispose> WallRegistry<W> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build and register a wall for `selector`.
    ///
    /// Fails with `AlreadyMounted` if the selector is taken; use
    /// [`Self::replace_with`] to swap a wall out deliberately.
    pub fn create_with<F>(&mut self, selector: &str, build: F) -> Result<&mut W, ViewportError>
    where
        F: FnOnce(&str) -> Result<W, ViewportError>,
    {
        if self.walls.contains_key(selector) {
            return Err(ViewportError::AlreadyMounted { selector: selector.to_string() });
        }
        let wall = build(selector)?;
        log::info!("wall created: {selector}");
        Ok(self.walls.entry(selector.to_string()).or_insert(wall))
    }

    /// Dispose any existing wall for `selector`, then build a new one.
    ///
    /// The old wall is disposed before `build` runs, so a build failure
    /// leaves the selector unregistered.
    pub fn replace_with<F>(&mut self, selector: &str, build: F) -> Result<&mut W, ViewportError>
    where
        F: FnOnce(&str) -> Result<W, ViewportError>,
    {
        if self.destroy(selector) {
            log::info!("wall replaced: {selector}");
        }
        self.create_with(selector, build)
    }

    /// Dispose and forget the wall for `selector`. Returns whether one existed.
    pub fn destroy(&mut self, selector: &str) -> bool {
        match self.walls.remove(selector) {
            Some(mut wall) => {
                wall.dispose();
                log::info!("wall destroyed: {selector}");
                true
            }
            None => false,
        }
    }

    /// Dispose every wall.
    pub fn clear(&mut self) {
        for (selector, mut wall) in std::mem::take(&mut self.walls) {
            wall.dispose();
            log::info!("wall destroyed: {selector}");
        }
    }

    #[must_use]
    pub fn get(&self, selector: &str) -> Option<&W> {
        self.walls.get(selector)
    }

    pub fn get_mut(&mut self, selector: &str) -> Option<&mut W> {
        self.walls.get_mut(selector)
    }

    #[must_use]
    pub fn contains(&self, selector: &str) -> bool {
        self.walls.contains_key(selector)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.walls.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    /// Registered selectors, in sorted order.
    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        self.walls.keys().map(String::as_str)
    }
}

impl<W: Dispose> Drop for WallRegistry<W> {
    fn drop(&mut self) {
        self.clear();
    }
}
