//! Core error types for context-map processing
//!
//! This module defines common error types used throughout the rendering pipeline.

use thiserror::Error;

/// Core error types for context-map processing
#[derive(Error, Debug)]
pub enum DiagramError {
    #[error("Model error: {message}")]
    ModelError { message: String },

    #[error("Render error: {message}")]
    RenderError { message: String },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl DiagramError {
    /// Create a new model error
    pub fn model_error(message: String) -> Self {
        Self::ModelError { message }
    }

    /// Create a new render error
    pub fn render_error(message: String) -> Self {
        Self::RenderError { message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_error() {
        let error = DiagramError::model_error("Duplicate context".to_string());
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Model error"));
        assert!(error_msg.contains("Duplicate context"));
    }

    #[test]
    fn test_render_error() {
        let error = DiagramError::render_error("Render failed".to_string());
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Render error"));
        assert!(error_msg.contains("Render failed"));
    }

    #[test]
    fn test_io_error_conversion() {
        use std::io;
        let io_err = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error: DiagramError = io_err.into();
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("IO error"));
        assert!(error_msg.contains("File not found"));
    }
}
