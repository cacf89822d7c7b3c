//! Cartograph - Render DDD context maps as PlantUML component diagrams
//!
//! A library for turning an in-memory context map (bounded contexts plus the
//! relationships between them) into PlantUML component-diagram text.
//!
//! # Quick Start
//!
//! ```rust
//! use cartograph::core::{BoundedContext, ContextMap, Relationship, SymmetricRelationship};
//! use cartograph::render_component_diagram;
//!
//! let mut map = ContextMap::new();
//! map.add_bounded_context(BoundedContext::new("Orders")).unwrap();
//! map.add_bounded_context(BoundedContext::new("Catalog")).unwrap();
//! map.add_relationship(Relationship::Partnership(
//!     SymmetricRelationship::new("Orders", "Catalog"),
//! ));
//!
//! let diagram = render_component_diagram(&map).unwrap();
//! println!("{}", diagram);
//! ```
//!
//! # Advanced Usage
//!
//! For more control, use the renderer directly:
//!
//! ```rust
//! use cartograph::prelude::*;
//!
//! let map = ContextMap::new();
//!
//! // Tighter note wrapping than the default
//! let renderer = ComponentDiagramRenderer::with_note_wrap_threshold(20);
//! let diagram = renderer.render(&map).unwrap();
//! assert!(diagram.contains("@startuml"));
//! ```

pub mod core;
pub mod plantuml;

pub use core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        BoundedContext, ContextMap, DiagramError, DownstreamRole, Relationship, Renderer,
        SymmetricRelationship, UpstreamDownstreamRelationship, UpstreamRole,
    };
    pub use crate::plantuml::ComponentDiagramRenderer;
}

/// Render a context map as a PlantUML component diagram
///
/// This is the simplest way to turn a context map into diagram text. Uses the
/// default note wrap threshold.
///
/// # Arguments
/// * `map` - The context map to render
///
/// # Returns
/// * `Ok(String)` - The PlantUML component-diagram text
/// * `Err` - If rendering fails
///
/// # Example
/// ```rust
/// use cartograph::core::{BoundedContext, ContextMap};
/// use cartograph::render_component_diagram;
///
/// let mut map = ContextMap::new();
/// map.add_bounded_context(BoundedContext::new("Orders")).unwrap();
///
/// let diagram = render_component_diagram(&map).unwrap();
/// assert!(diagram.contains("component [Orders]"));
/// ```
pub fn render_component_diagram(map: &core::ContextMap) -> anyhow::Result<String> {
    use crate::core::Renderer as _;
    use crate::plantuml::ComponentDiagramRenderer;

    let renderer = ComponentDiagramRenderer::new();
    renderer.render(map)
}
