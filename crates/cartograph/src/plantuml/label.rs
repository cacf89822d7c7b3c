//! Relationship label derivation
//!
//! Computes the single-line label shown on a diagram edge from the
//! relationship variant, its optional explicit name, and its optional
//! implementation-technology annotation.
//!
//! The symmetric and asymmetric rules are deliberately separate. The
//! asymmetric rule runs three ordered steps over a seed state (explicit name,
//! fixed type label, or nothing), then folds the technology in, then falls
//! back to the generic type label. Unifying the two rules changes observable
//! labels, so don't.

use crate::core::{Relationship, SymmetricRelationship, UpstreamDownstreamRelationship};

/// Fixed type label for partnerships
pub const PARTNERSHIP_LABEL: &str = "Partnership";
/// Fixed type label for shared kernels
pub const SHARED_KERNEL_LABEL: &str = "Shared Kernel";
/// Fixed type label for the Customer-Supplier sub-variant
pub const CUSTOMER_SUPPLIER_LABEL: &str = "Customer-Supplier";
/// Fixed fallback label for generic upstream-downstream relationships
pub const UPSTREAM_DOWNSTREAM_LABEL: &str = "Upstream-Downstream";

/// Derive the display label for a relationship edge
pub fn relationship_label(relationship: &Relationship) -> String {
    match relationship {
        Relationship::Partnership(rel) => symmetric_label(PARTNERSHIP_LABEL, rel),
        Relationship::SharedKernel(rel) => symmetric_label(SHARED_KERNEL_LABEL, rel),
        Relationship::UpstreamDownstream(rel) => asymmetric_label(rel),
    }
}

fn symmetric_label(type_label: &str, relationship: &SymmetricRelationship) -> String {
    let mut label = match relationship.name() {
        Some(name) => name.to_string(),
        None => type_label.to_string(),
    };
    if let Some(technology) = relationship.implementation_technology() {
        label.push_str(&format!(" ({technology})"));
    }
    label
}

/// Seed state after the first asymmetric derivation step
enum LabelSeed<'a> {
    Empty,
    Name(&'a str),
    TypeLabel(&'static str),
}

fn asymmetric_label(relationship: &UpstreamDownstreamRelationship) -> String {
    // Step 1: explicit name wins; Customer-Supplier gets its type label;
    // the generic variant seeds nothing.
    let seed = if let Some(name) = relationship.name() {
        LabelSeed::Name(name)
    } else if relationship.is_customer_supplier() {
        LabelSeed::TypeLabel(CUSTOMER_SUPPLIER_LABEL)
    } else {
        LabelSeed::Empty
    };

    // Step 2: technology fills an empty label verbatim, otherwise it is
    // appended parenthesized. Step 3: an empty label falls back to the
    // generic type label.
    match (seed, relationship.implementation_technology()) {
        (LabelSeed::Empty, Some(technology)) => technology.to_string(),
        (LabelSeed::Empty, None) => UPSTREAM_DOWNSTREAM_LABEL.to_string(),
        (LabelSeed::Name(name), Some(technology)) => format!("{name} ({technology})"),
        (LabelSeed::Name(name), None) => name.to_string(),
        (LabelSeed::TypeLabel(label), Some(technology)) => format!("{label} ({technology})"),
        (LabelSeed::TypeLabel(label), None) => label.to_string(),
    }
}
