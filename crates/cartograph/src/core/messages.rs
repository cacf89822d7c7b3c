//! Central catalog of user-facing message strings
//!
//! Diagram output and validation share these strings; renderers must reference
//! them here rather than hardcoding their own copies.

/// Placeholder note shown when a context map contains no bounded contexts.
pub const EMPTY_UML_COMPONENT_DIAGRAM_MESSAGE: &str =
    "Sorry, we cannot generate a component diagram. Your Context Map seems to be empty.";
