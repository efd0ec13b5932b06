use crate::error::ChartError;
use crate::spec::ChartSpec;
use std::collections::HashMap;

/// A chart widget that accepts option trees. The tree is consumed
/// verbatim; implementations must not reinterpret or patch it.
pub trait RenderSurface {
    fn set_option(&mut self, option: &ChartSpec);
}

/// Tracks live render surfaces by element id so repeated renders to the
/// same target reuse (and re-option) the existing surface instead of
/// leaking a stale one.
#[derive(Default)]
pub struct Renderer {
    surfaces: HashMap<String, Box<dyn RenderSurface>>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a surface to a target id, replacing any previous one.
    pub fn register(&mut self, target: &str, surface: Box<dyn RenderSurface>) {
        if self.surfaces.insert(target.to_string(), surface).is_some() {
            log::debug!("replacing existing surface for {}", target);
        }
    }

    /// Push an option tree to the surface registered under `target`.
    pub fn render_chart(&mut self, target: &str, option: &ChartSpec) -> Result<(), ChartError> {
        let surface = self
            .surfaces
            .get_mut(target)
            .ok_or_else(|| ChartError::MissingTarget(target.to_string()))?;
        surface.set_option(option);
        Ok(())
    }

    /// Drop the surface for `target`, if any.
    pub fn dispose(&mut self, target: &str) {
        self.surfaces.remove(target);
    }

    pub fn dispose_all(&mut self) {
        self.surfaces.clear();
    }

    pub fn is_registered(&self, target: &str) -> bool {
        self.surfaces.contains_key(target)
    }
}
