//! Core renderer trait for diagram output
//!
//! This trait defines the interface for rendering a context map
//! into a diagram-description format.

use anyhow::Result;

use super::ContextMap;

/// Core trait for context-map renderers
///
/// This trait represents the rendering layer that converts a context map into
/// diagram text. The map is read-only for the duration of a render call, and
/// each call owns its output exclusively, so independent renders of the same
/// map may run concurrently.
///
/// # Example
/// ```
/// use cartograph::core::{ContextMap, Renderer};
/// use cartograph::plantuml::ComponentDiagramRenderer;
///
/// let map = ContextMap::new();
/// let renderer = ComponentDiagramRenderer::new();
/// let output = renderer.render(&map).unwrap();
/// ```
pub trait Renderer: Send + Sync {
    /// The output type of this renderer
    type Output;

    /// Render the context map into the output format
    fn render(&self, map: &ContextMap) -> Result<Self::Output>;

    /// Get the name of this renderer
    fn name(&self) -> &'static str;

    /// Get the version of this renderer
    fn version(&self) -> &'static str;

    /// Get the supported output format
    fn format(&self) -> &'static str;
}
