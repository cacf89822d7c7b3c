//! PlantUML output support
//!
//! This module contains the component-diagram renderer and the relationship
//! label derivation it relies on.

mod component_diagram;
mod label;

pub use component_diagram::*;
pub use label::{
    relationship_label, CUSTOMER_SUPPLIER_LABEL, PARTNERSHIP_LABEL, SHARED_KERNEL_LABEL,
    UPSTREAM_DOWNSTREAM_LABEL,
};
