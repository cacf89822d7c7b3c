//! Context-map domain model
//!
//! Stores bounded contexts and the relationships between them.
//! Maintains insertion order so rendering is deterministic: contexts and
//! relationships appear in output exactly as they were added.
//!
//! The model is constructed upstream (parser, refactoring, JSON loader) and
//! is read-only from the renderer's perspective. Optional `name` and
//! `implementation_technology` strings treat the empty string as unset; the
//! accessors filter both cases so callers never need to distinguish them.

use tracing::{debug, trace, warn};

use super::DiagramError;

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// A named model boundary representing an autonomous component in the map
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct BoundedContext {
    /// Unique name within the owning context map
    name: String,
    /// Optional free-text vision statement, rendered as an attached note
    #[cfg_attr(feature = "serde", serde(default))]
    domain_vision_statement: Option<String>,
}

impl BoundedContext {
    /// Create a new bounded context with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            domain_vision_statement: None,
        }
    }

    /// Set the domain vision statement
    pub fn with_vision_statement(mut self, statement: impl Into<String>) -> Self {
        self.domain_vision_statement = Some(statement.into());
        self
    }

    /// Get the context name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the vision statement, treating an empty string as unset
    pub fn domain_vision_statement(&self) -> Option<&str> {
        non_empty(self.domain_vision_statement.as_deref())
    }
}

/// Upstream participant roles qualifying an asymmetric relationship
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UpstreamRole {
    PublishedLanguage,
    OpenHostService,
}

impl UpstreamRole {
    /// Short tag used in diagram annotations
    pub fn name(&self) -> &'static str {
        match self {
            UpstreamRole::PublishedLanguage => "PL",
            UpstreamRole::OpenHostService => "OHS",
        }
    }
}

impl std::fmt::Display for UpstreamRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Downstream participant roles qualifying an asymmetric relationship
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DownstreamRole {
    AnticorruptionLayer,
    Conformist,
}

impl DownstreamRole {
    /// Short tag used in diagram annotations
    pub fn name(&self) -> &'static str {
        match self {
            DownstreamRole::AnticorruptionLayer => "ACL",
            DownstreamRole::Conformist => "CF",
        }
    }
}

impl std::fmt::Display for DownstreamRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A symmetric relationship between two equal participants
///
/// Used for both Partnership and Shared Kernel; the variant lives on
/// [`Relationship`], not here.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct SymmetricRelationship {
    /// Name of the first participating bounded context
    participant1: String,
    /// Name of the second participating bounded context
    participant2: String,
    #[cfg_attr(feature = "serde", serde(default))]
    name: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    implementation_technology: Option<String>,
}

impl SymmetricRelationship {
    /// Create a new symmetric relationship between two contexts
    pub fn new(participant1: impl Into<String>, participant2: impl Into<String>) -> Self {
        Self {
            participant1: participant1.into(),
            participant2: participant2.into(),
            name: None,
            implementation_technology: None,
        }
    }

    /// Set the explicit relationship name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the implementation technology annotation
    pub fn with_implementation_technology(mut self, technology: impl Into<String>) -> Self {
        self.implementation_technology = Some(technology.into());
        self
    }

    /// Get the first participant's name
    pub fn participant1(&self) -> &str {
        &self.participant1
    }

    /// Get the second participant's name
    pub fn participant2(&self) -> &str {
        &self.participant2
    }

    /// Get the explicit name, treating an empty string as unset
    pub fn name(&self) -> Option<&str> {
        non_empty(self.name.as_deref())
    }

    /// Get the implementation technology, treating an empty string as unset
    pub fn implementation_technology(&self) -> Option<&str> {
        non_empty(self.implementation_technology.as_deref())
    }
}

/// An asymmetric relationship with one upstream and one downstream participant
///
/// Customer-Supplier is the named sub-variant with stronger collaboration
/// semantics; it is carried as a flag rather than a separate type so the
/// dispatch in the renderer stays a single match arm.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct UpstreamDownstreamRelationship {
    /// Name of the upstream (provider) bounded context
    upstream: String,
    /// Name of the downstream (consumer) bounded context
    downstream: String,
    #[cfg_attr(feature = "serde", serde(default))]
    customer_supplier: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    upstream_roles: Vec<UpstreamRole>,
    #[cfg_attr(feature = "serde", serde(default))]
    downstream_roles: Vec<DownstreamRole>,
    #[cfg_attr(feature = "serde", serde(default))]
    name: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    implementation_technology: Option<String>,
}

impl UpstreamDownstreamRelationship {
    /// Create a new generic upstream-downstream relationship
    pub fn new(upstream: impl Into<String>, downstream: impl Into<String>) -> Self {
        Self {
            upstream: upstream.into(),
            downstream: downstream.into(),
            customer_supplier: false,
            upstream_roles: Vec::new(),
            downstream_roles: Vec::new(),
            name: None,
            implementation_technology: None,
        }
    }

    /// Create a new Customer-Supplier relationship
    pub fn customer_supplier(upstream: impl Into<String>, downstream: impl Into<String>) -> Self {
        Self {
            customer_supplier: true,
            ..Self::new(upstream, downstream)
        }
    }

    /// Set the explicit relationship name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the implementation technology annotation
    pub fn with_implementation_technology(mut self, technology: impl Into<String>) -> Self {
        self.implementation_technology = Some(technology.into());
        self
    }

    /// Append an upstream role (model order is preserved in output)
    pub fn with_upstream_role(mut self, role: UpstreamRole) -> Self {
        self.upstream_roles.push(role);
        self
    }

    /// Append a downstream role (model order is preserved in output)
    pub fn with_downstream_role(mut self, role: DownstreamRole) -> Self {
        self.downstream_roles.push(role);
        self
    }

    /// Get the upstream participant's name
    pub fn upstream(&self) -> &str {
        &self.upstream
    }

    /// Get the downstream participant's name
    pub fn downstream(&self) -> &str {
        &self.downstream
    }

    /// Whether this is the Customer-Supplier sub-variant
    pub fn is_customer_supplier(&self) -> bool {
        self.customer_supplier
    }

    /// Get the upstream roles in model order
    pub fn upstream_roles(&self) -> &[UpstreamRole] {
        &self.upstream_roles
    }

    /// Get the downstream roles in model order
    pub fn downstream_roles(&self) -> &[DownstreamRole] {
        &self.downstream_roles
    }

    /// Get the explicit name, treating an empty string as unset
    pub fn name(&self) -> Option<&str> {
        non_empty(self.name.as_deref())
    }

    /// Get the implementation technology, treating an empty string as unset
    pub fn implementation_technology(&self) -> Option<&str> {
        non_empty(self.implementation_technology.as_deref())
    }
}

/// A relationship between bounded contexts
///
/// The variant is fixed at construction. Renderers dispatch over the variants
/// in declaration order: Partnership, Shared Kernel, then the asymmetric
/// upstream-downstream form (which subsumes Customer-Supplier).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Relationship {
    Partnership(SymmetricRelationship),
    SharedKernel(SymmetricRelationship),
    UpstreamDownstream(UpstreamDownstreamRelationship),
}

impl Relationship {
    /// Names of the bounded contexts this relationship references
    pub fn participant_names(&self) -> [&str; 2] {
        match self {
            Relationship::Partnership(rel) | Relationship::SharedKernel(rel) => {
                [rel.participant1(), rel.participant2()]
            }
            Relationship::UpstreamDownstream(rel) => [rel.upstream(), rel.downstream()],
        }
    }
}

/// Context-map model
///
/// The top-level model: an insertion-ordered collection of bounded contexts
/// plus the relationships between them. Well-formedness (unique names aside)
/// is an upstream concern; unknown participants are logged but accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ContextMap {
    #[cfg_attr(feature = "serde", serde(default))]
    bounded_contexts: Vec<BoundedContext>,
    #[cfg_attr(feature = "serde", serde(default))]
    relationships: Vec<Relationship>,
}

impl ContextMap {
    /// Create a new empty context map
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a bounded context to the map
    ///
    /// Context names identify components, so duplicates are rejected.
    pub fn add_bounded_context(&mut self, context: BoundedContext) -> Result<(), DiagramError> {
        if self.has_bounded_context(context.name()) {
            return Err(DiagramError::model_error(format!(
                "Bounded context '{}' already exists in this map",
                context.name()
            )));
        }
        trace!(context_name = %context.name(), "Adding bounded context");
        self.bounded_contexts.push(context);
        debug!(context_count = self.bounded_contexts.len(), "Bounded context added");
        Ok(())
    }

    /// Add a relationship to the map
    ///
    /// Participants referencing unknown contexts are accepted; validating
    /// references is the job of an upstream validator, not the model.
    pub fn add_relationship(&mut self, relationship: Relationship) {
        for participant in relationship.participant_names() {
            if !self.has_bounded_context(participant) {
                warn!(%participant, "Relationship references a context not present in the map");
            }
        }
        self.relationships.push(relationship);
        debug!(relationship_count = self.relationships.len(), "Relationship added");
    }

    /// Check if a bounded context exists
    pub fn has_bounded_context(&self, name: &str) -> bool {
        self.bounded_contexts.iter().any(|bc| bc.name() == name)
    }

    /// Get a bounded context by name
    pub fn get_bounded_context(&self, name: &str) -> Option<&BoundedContext> {
        self.bounded_contexts.iter().find(|bc| bc.name() == name)
    }

    /// Get the bounded contexts in insertion order
    pub fn bounded_contexts(&self) -> &[BoundedContext] {
        &self.bounded_contexts
    }

    /// Get the relationships in insertion order
    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    /// Get the number of bounded contexts
    pub fn context_count(&self) -> usize {
        self.bounded_contexts.len()
    }

    /// Get the number of relationships
    pub fn relationship_count(&self) -> usize {
        self.relationships.len()
    }

    /// Clear all data from the map
    pub fn clear(&mut self) {
        self.bounded_contexts.clear();
        self.relationships.clear();
    }
}
