//! Core abstractions for context-map rendering
//!
//! This module contains the domain model, the renderer trait, shared text
//! utilities, and the error and logging infrastructure.

mod error;
pub mod logging;
pub mod messages;
mod model;
mod renderer;
mod text;

pub use error::*;
pub use logging::*;
pub use model::*;
pub use renderer::*;
pub use text::*;
