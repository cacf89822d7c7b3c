//! PlantUML component-diagram rendering
//!
//! Converts a context map into PlantUML component-diagram text: one component
//! per bounded context (with an attached note for its vision statement),
//! followed by one edge block per relationship, everything in model order.

use anyhow::Result;
use tracing::{debug, span, trace, Level};

use super::label::relationship_label;
use crate::core::{
    messages, wrap_note, BoundedContext, ContextMap, Relationship, Renderer,
    SymmetricRelationship, UpstreamDownstreamRelationship, DEFAULT_NOTE_WRAP_THRESHOLD,
};

/// PlantUML component-diagram renderer
///
/// A single render call makes one read-only pass over the map and returns the
/// complete diagram text. Rendering the same map twice yields byte-identical
/// output.
pub struct ComponentDiagramRenderer {
    note_wrap_threshold: usize,
}

impl ComponentDiagramRenderer {
    /// Create a new renderer with the default note wrap threshold
    pub fn new() -> Self {
        Self {
            note_wrap_threshold: DEFAULT_NOTE_WRAP_THRESHOLD,
        }
    }

    /// Create a new renderer with a specific note wrap threshold
    pub fn with_note_wrap_threshold(threshold: usize) -> Self {
        Self {
            note_wrap_threshold: threshold,
        }
    }

    /// Get the current note wrap threshold
    pub fn note_wrap_threshold(&self) -> usize {
        self.note_wrap_threshold
    }

    /// Produce the diagram as an ordered sequence of output lines
    ///
    /// A blank line is represented by an empty string. Exposed for callers
    /// that stream statements instead of writing one blob.
    pub fn diagram_lines(&self, map: &ContextMap) -> Vec<String> {
        let mut lines = vec!["@startuml".to_string(), String::new()];

        if map.context_count() == 0 {
            trace!("Context map has no bounded contexts, emitting placeholder note");
            lines.push(format!(
                "note \"{}\" as EmptyDiagramError",
                messages::EMPTY_UML_COMPONENT_DIAGRAM_MESSAGE
            ));
            lines.push(String::new());
        } else {
            for context in map.bounded_contexts() {
                self.component_statements(context, &mut lines);
            }
            lines.push(String::new());
            for relationship in map.relationships() {
                self.relationship_statements(relationship, &mut lines);
            }
        }

        lines.push("@enduml".to_string());
        lines
    }

    fn component_statements(&self, context: &BoundedContext, lines: &mut Vec<String>) {
        lines.push(format!("component [{}]", context.name()));
        if let Some(vision) = context.domain_vision_statement() {
            lines.push(format!("note right of [{}]", context.name()));
            lines.extend(wrap_note(vision, self.note_wrap_threshold));
            lines.push("end note".to_string());
        }
    }

    /// Dispatch a relationship to its rendering rule
    ///
    /// Variants are tested in fixed order: Partnership, Shared Kernel, then
    /// the asymmetric upstream-downstream form (Customer-Supplier included).
    fn relationship_statements(&self, relationship: &Relationship, lines: &mut Vec<String>) {
        match relationship {
            Relationship::Partnership(rel) | Relationship::SharedKernel(rel) => {
                self.symmetric_statements(rel, &relationship_label(relationship), lines);
            }
            Relationship::UpstreamDownstream(rel) => {
                self.upstream_downstream_statements(rel, &relationship_label(relationship), lines);
            }
        }
    }

    fn symmetric_statements(
        &self,
        relationship: &SymmetricRelationship,
        label: &str,
        lines: &mut Vec<String>,
    ) {
        lines.push(format!(
            "[{}]<-->[{}] : {}",
            relationship.participant1(),
            relationship.participant2(),
            label
        ));
        lines.push(String::new());
    }

    fn upstream_downstream_statements(
        &self,
        relationship: &UpstreamDownstreamRelationship,
        label: &str,
        lines: &mut Vec<String>,
    ) {
        // Interface id: downstream first, upstream second.
        let interface_id = format!(
            "{}_to_{}",
            relationship.downstream(),
            relationship.upstream()
        );
        lines.push(format!("interface \"{}\" as {}", label, interface_id));

        let mut exposure = format!("[{}] --> {}", relationship.upstream(), interface_id);
        if !relationship.upstream_roles().is_empty() {
            let roles: Vec<&str> = relationship
                .upstream_roles()
                .iter()
                .map(|role| role.name())
                .collect();
            exposure.push_str(&format!(" : {}", roles.join(", ")));
        }
        lines.push(exposure);

        // The "use" tag is unconditional; role names are a second annotation.
        let mut usage = format!("{} <.. [{}] : use", interface_id, relationship.downstream());
        if !relationship.downstream_roles().is_empty() {
            let roles: Vec<&str> = relationship
                .downstream_roles()
                .iter()
                .map(|role| role.name())
                .collect();
            usage.push_str(&format!(" : {}", roles.join(", ")));
        }
        lines.push(usage);
        lines.push(String::new());
    }
}

impl Default for ComponentDiagramRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for ComponentDiagramRenderer {
    type Output = String;

    fn render(&self, map: &ContextMap) -> Result<String> {
        let render_span = span!(
            Level::INFO,
            "render_component_diagram",
            context_count = map.context_count(),
            relationship_count = map.relationship_count()
        );
        let _enter = render_span.enter();

        let lines = self.diagram_lines(map);
        debug!(line_count = lines.len(), "Component diagram rendered");

        let mut output = lines.join("\n");
        output.push('\n');
        Ok(output)
    }

    fn name(&self) -> &'static str {
        "component-diagram"
    }

    fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn format(&self) -> &'static str {
        "plantuml"
    }
}
